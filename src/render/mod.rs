//! SVG rendering for decoded maps
//!
//! This module is organized into submodules:
//! - `defaults`: default sizes and settings
//! - `geometry`: bounding box, canvas transform and compass facings
//! - `classify`: special/flags/type classification tables
//! - `theme`: category to colour mapping
//! - `svg`: document emission

pub mod classify;
pub mod defaults;
pub mod geometry;
pub mod svg;
pub mod theme;

pub use classify::{LineKind, LineWeight, ThingKind};
pub use geometry::{Bounds, Compass, Transform};
pub use theme::Theme;

use glam::DVec2;

use crate::errors::{RenderError, Result, StructureError};
use crate::log::debug;
use crate::wad::{Linedef, MapData, Thing, Vertex, Wad};

/// Knobs the renderer reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Map units to canvas units
    pub scale: f64,
    /// Empty border around the map, in canvas units
    pub padding: i32,
    /// Draw thing markers
    pub draw_things: bool,
    /// Add diagnostic comments
    pub verbose: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: defaults::SCALE,
            padding: defaults::PADDING,
            draw_things: false,
            verbose: false,
            theme: Theme::Dark,
        }
    }
}

impl RenderOptions {
    /// Full-size, light-background profile
    pub fn classic() -> Self {
        Self {
            scale: defaults::CLASSIC_SCALE,
            theme: Theme::Light,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RenderError::InvalidScale { value: self.scale });
        }
        if self.padding < 0 {
            return Err(RenderError::InvalidPadding {
                value: self.padding,
            });
        }
        Ok(())
    }
}

/// One drawing instruction, already in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Comment(String),
    Line {
        from: DVec2,
        to: DVec2,
        stroke: &'static str,
        width: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        fill: &'static str,
    },
}

/// A fully laid out map: canvas transform plus primitives in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub transform: Transform,
    pub background: &'static str,
    /// Comments emitted ahead of every primitive
    pub prologue: Vec<String>,
    pub primitives: Vec<Primitive>,
}

/// Where the map came from, for the verbose prologue
#[derive(Debug, Clone, Copy)]
pub struct SourceInfo<'a> {
    pub name: &'a str,
    /// Map name as asked for, before prefix matching
    pub requested: &'a str,
    pub wad: &'a Wad<'a>,
}

/// Lay out `map` as primitives.
///
/// Fails before producing anything if the options are invalid, the map has
/// no vertices or a linedef points past the vertex array.
pub fn layout(map: &MapData, options: &RenderOptions, source: Option<SourceInfo<'_>>) -> Result<Scene> {
    options.validate()?;
    let transform = Transform::fit(&map.vertices, options.scale, options.padding)?;

    debug!(
        map = %map.lumps.marker,
        min_x = transform.bounds.min_x,
        max_x = transform.bounds.max_x,
        min_y = transform.bounds.min_y,
        max_y = transform.bounds.max_y,
        x_offset = transform.x_offset,
        y_offset = transform.y_offset,
        width = transform.width(),
        height = transform.height(),
        "computed canvas transform"
    );

    let mut primitives = Vec::with_capacity(map.linedefs.len() + map.things.len() * 2);
    for (i, line) in map.linedefs.iter().enumerate() {
        if options.verbose {
            primitives.push(Primitive::Comment(format!(
                "Linedef {i} - Flags: {} / Special: {}",
                line.flags, line.special
            )));
        }
        primitives.push(linedef_primitive(&transform, &map.vertices, i, line, options.theme)?);
    }

    if options.draw_things {
        if options.verbose {
            primitives.push(Primitive::Comment("Things:".to_string()));
        }
        for thing in &map.things {
            if options.verbose {
                primitives.push(Primitive::Comment(format!(
                    "Thing type: {} / angle: {} / flags: {}",
                    thing.kind, thing.angle, thing.flags
                )));
            }
            thing_primitives(&transform, thing, options.theme, &mut primitives);
        }
    }

    let prologue = match (options.verbose, source) {
        (true, Some(source)) => prologue(source, map, options),
        _ => Vec::new(),
    };

    Ok(Scene {
        transform,
        background: options.theme.background(),
        prologue,
        primitives,
    })
}

/// Lay out and serialize `map` as a complete SVG document
pub fn render(map: &MapData, options: &RenderOptions, source: Option<SourceInfo<'_>>) -> Result<String> {
    let scene = layout(map, options, source)?;
    svg::write_document(&scene)
}

fn vertex_at(vertices: &[Vertex], linedef: usize, index: i16) -> Result<&Vertex> {
    usize::try_from(index)
        .ok()
        .and_then(|i| vertices.get(i))
        .ok_or_else(|| {
            StructureError::VertexOutOfRange {
                linedef,
                vertex: index,
                count: vertices.len(),
            }
            .into()
        })
}

fn linedef_primitive(
    transform: &Transform,
    vertices: &[Vertex],
    index: usize,
    line: &Linedef,
    theme: Theme,
) -> Result<Primitive> {
    let start = vertex_at(vertices, index, line.start_vertex)?;
    let end = vertex_at(vertices, index, line.end_vertex)?;
    let weight = LineWeight::from_flags(line.flags);
    Ok(Primitive::Line {
        from: transform.project_vertex(start),
        to: transform.project_vertex(end),
        stroke: theme.line(LineKind::from_special(line.special)),
        width: transform.length(weight.width()),
    })
}

fn thing_primitives(transform: &Transform, thing: &Thing, theme: Theme, out: &mut Vec<Primitive>) {
    let kind = ThingKind::from_type(thing.kind);
    let center = transform.project(thing.x, thing.y);
    out.push(Primitive::Circle {
        center,
        radius: transform.length(kind.radius()),
        fill: theme.thing(kind),
    });

    if !kind.shows_facing() {
        return;
    }
    if let Some(facing) = Compass::from_angle(thing.angle) {
        let reach = transform.length(defaults::DIRECTION_LENGTH);
        out.push(Primitive::Line {
            from: center,
            to: center + facing.step() * reach,
            stroke: theme.facing(),
            width: transform.length(defaults::LINEDEF_SLIM),
        });
    }
}

fn prologue(source: SourceInfo<'_>, map: &MapData, options: &RenderOptions) -> Vec<String> {
    let lumps = &map.lumps;
    let mut notes = vec![
        format!("wadfile         : {} => {}", source.name, source.wad.kind),
        format!("map             : {}", source.requested),
    ];
    if !lumps.marker.equals(source.requested.as_bytes()) {
        notes.push(format!("matched marker  : {}", lumps.marker));
    }
    notes.extend([
        format!("num_lumps       : {}", source.wad.directory.len()),
        format!(
            "{} Things pos: {} / size: {}",
            map.things.len(),
            lumps.things.offset(),
            lumps.things.len()
        ),
        format!(
            "{} Linedefs pos: {} / size: {}",
            map.linedefs.len(),
            lumps.linedefs.offset(),
            lumps.linedefs.len()
        ),
        format!(
            "{} Vertexes pos: {} / size: {}",
            map.vertices.len(),
            lumps.vertexes.offset(),
            lumps.vertexes.len()
        ),
        format!("scaling         : {}", options.scale),
    ]);
    notes
}
