//! Map-space to canvas-space transform.
//!
//! Map coordinates are signed with Y growing north; the canvas is
//! non-negative with Y growing down. The transform is derived once from the
//! bounding box of every vertex in the map.

use glam::{DVec2, dvec2};

use crate::errors::{Result, StructureError};
use crate::wad::Vertex;

/// Inclusive bounding box of a vertex set, in map units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    fn point(v: &Vertex) -> Self {
        let (x, y) = (i32::from(v.x), i32::from(v.y));
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    fn expand(self, v: &Vertex) -> Self {
        let (x, y) = (i32::from(v.x), i32::from(v.y));
        Self {
            min_x: self.min_x.min(x),
            max_x: self.max_x.max(x),
            min_y: self.min_y.min(y),
            max_y: self.max_y.max(y),
        }
    }

    /// Reduce `vertices` to their bounds, seeded by the first vertex.
    pub fn of(vertices: &[Vertex]) -> Result<Self> {
        let (first, rest) = vertices.split_first().ok_or(StructureError::EmptyVertices)?;
        Ok(rest.iter().fold(Self::point(first), Self::expand))
    }

    /// Offsets that make every coordinate non-negative
    pub fn offsets(&self) -> (i32, i32) {
        (axis_offset(self.min_x), axis_offset(self.min_y))
    }
}

/// Offset for one axis given its minimum.
///
/// A negative minimum shifts by its magnitude. A positive minimum shifts by
/// itself too, keeping a margin on the low side instead of snapping to zero.
pub fn axis_offset(min: i32) -> i32 {
    min.abs()
}

/// Everything needed to place a map coordinate on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub bounds: Bounds,
    pub x_offset: i32,
    pub y_offset: i32,
    pub scale: f64,
    pub padding: f64,
    /// Canvas size including scale and padding
    pub size: DVec2,
}

impl Transform {
    pub fn new(bounds: Bounds, scale: f64, padding: i32) -> Self {
        let (x_offset, y_offset) = bounds.offsets();
        let padding = f64::from(padding);
        let extent = dvec2(
            f64::from(bounds.max_x + x_offset),
            f64::from(bounds.max_y + y_offset),
        );
        Self {
            bounds,
            x_offset,
            y_offset,
            scale,
            padding,
            size: extent * scale + DVec2::splat(2.0 * padding),
        }
    }

    /// Derive the transform for a vertex set
    pub fn fit(vertices: &[Vertex], scale: f64, padding: i32) -> Result<Self> {
        Ok(Self::new(Bounds::of(vertices)?, scale, padding))
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Canvas position of a map coordinate; Y is flipped about the top of the map
    pub fn project(&self, x: i16, y: i16) -> DVec2 {
        let shifted = dvec2(
            f64::from(i32::from(x) + self.x_offset),
            f64::from(self.bounds.max_y - i32::from(y)),
        );
        DVec2::splat(self.padding) + shifted * self.scale
    }

    pub fn project_vertex(&self, v: &Vertex) -> DVec2 {
        self.project(v.x, v.y)
    }

    /// A map-unit length on the canvas
    pub fn length(&self, map_units: f64) -> f64 {
        map_units * self.scale
    }
}

/// The eight facings a thing can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compass {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Compass {
    /// Facing for an exact thing angle.
    ///
    /// Only the eight listed values have a facing; everything else, including
    /// 135, draws no indicator. The north-west entry is stored as 134.
    pub fn from_angle(angle: i16) -> Option<Self> {
        match angle {
            0 => Some(Compass::East),
            45 => Some(Compass::NorthEast),
            90 => Some(Compass::North),
            134 => Some(Compass::NorthWest),
            180 => Some(Compass::West),
            225 => Some(Compass::SouthWest),
            270 => Some(Compass::South),
            315 => Some(Compass::SouthEast),
            _ => None,
        }
    }

    /// Canvas-space step (Y down); diagonals move a full unit on both axes
    pub fn step(self) -> DVec2 {
        match self {
            Compass::East => dvec2(1.0, 0.0),
            Compass::NorthEast => dvec2(1.0, -1.0),
            Compass::North => dvec2(0.0, -1.0),
            Compass::NorthWest => dvec2(-1.0, -1.0),
            Compass::West => dvec2(-1.0, 0.0),
            Compass::SouthWest => dvec2(-1.0, 1.0),
            Compass::South => dvec2(0.0, 1.0),
            Compass::SouthEast => dvec2(1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i16, y: i16) -> Vertex {
        Vertex { x, y }
    }

    #[test]
    fn bounds_include_the_seed() {
        let b = Bounds::of(&[v(-50, 300), v(10, 10), v(5, 20)]).unwrap();
        assert_eq!(
            b,
            Bounds {
                min_x: -50,
                max_x: 10,
                min_y: 10,
                max_y: 300
            }
        );
    }

    #[test]
    fn single_vertex() {
        let b = Bounds::of(&[v(7, -7)]).unwrap();
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (7, 7, -7, -7));
    }

    #[test]
    fn empty_vertices_are_an_error() {
        assert!(Bounds::of(&[]).is_err());
    }

    #[test]
    fn offsets_are_asymmetric() {
        assert_eq!(axis_offset(-128), 128);
        assert_eq!(axis_offset(0), 0);
        // a positive minimum is kept as margin, not zeroed
        assert_eq!(axis_offset(64), 64);
    }

    #[test]
    fn unit_square_canvas() {
        let t = Transform::fit(&[v(0, 0), v(10, 10)], 1.0, 0).unwrap();
        assert_eq!(t.size, dvec2(10.0, 10.0));
        assert_eq!(t.project(0, 0), dvec2(0.0, 10.0));
        assert_eq!(t.project(10, 10), dvec2(10.0, 0.0));
    }

    #[test]
    fn scale_and_padding() {
        let t = Transform::fit(&[v(-100, -20), v(100, 20)], 0.5, 8).unwrap();
        assert_eq!(t.x_offset, 100);
        assert_eq!(t.y_offset, 20);
        // (100 + 100) * 0.5 + 16, (20 + 20) * 0.5 + 16
        assert_eq!(t.size, dvec2(116.0, 36.0));
        assert_eq!(t.project(-100, 20), dvec2(8.0, 8.0));
        assert_eq!(t.project(100, -20), dvec2(108.0, 28.0));
        assert_eq!(t.length(16.0), 8.0);
    }

    #[test]
    fn every_vertex_lands_on_the_canvas() {
        let sets: [&[Vertex]; 4] = [
            &[v(-3000, -2000), v(1500, 40), v(0, 0)],
            &[v(200, 300), v(900, 1200), v(450, 310)],
            &[v(-900, -1200), v(-200, -300)],
            &[v(i16::MIN, i16::MIN), v(i16::MAX, i16::MAX)],
        ];
        for vertices in sets {
            for (scale, padding) in [(1.0, 0), (0.5, 0), (0.25, 32)] {
                let t = Transform::fit(vertices, scale, padding).unwrap();
                let (x_off, y_off) = t.bounds.offsets();
                let pad = f64::from(padding);
                for vertex in vertices {
                    assert!(i32::from(vertex.x) + x_off >= 0);
                    assert!(i32::from(vertex.y) + y_off >= 0);
                    let p = t.project_vertex(vertex);
                    assert!(p.x >= pad && p.x <= t.width() - pad, "{p:?} in {:?}", t.size);
                    assert!(p.y >= pad && p.y <= t.height() - pad, "{p:?} in {:?}", t.size);
                }
            }
        }
    }

    #[test]
    fn compass_lookup_is_exact() {
        assert_eq!(Compass::from_angle(0), Some(Compass::East));
        assert_eq!(Compass::from_angle(134), Some(Compass::NorthWest));
        assert_eq!(Compass::from_angle(135), None);
        assert_eq!(Compass::from_angle(360), None);
        assert_eq!(Compass::from_angle(-90), None);
        assert_eq!(Compass::South.step(), dvec2(0.0, 1.0));
        assert_eq!(Compass::NorthEast.step(), dvec2(1.0, -1.0));
    }
}
