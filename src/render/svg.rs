//! SVG document emission

use std::io::Write;

use ::svg::Document;
use ::svg::node::Comment;
use ::svg::node::element::{Circle, Line, Rectangle};
use glam::DVec2;

use crate::errors::{Result, WadError};

use super::{Primitive, Scene};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Build the SVG DOM for a scene.
///
/// Prologue comments come first, then the background, then the primitives in
/// scene order. Comments never change the geometry of anything after them.
pub fn document(scene: &Scene) -> Document {
    let width = fmt_num(scene.transform.width());
    let height = fmt_num(scene.transform.height());

    let mut document = Document::new()
        .set("xmlns", SVG_NS)
        .set("version", "1.1")
        .set("width", width.clone())
        .set("height", height.clone());

    for note in &scene.prologue {
        document = document.add(comment(note));
    }

    document = document.add(
        Rectangle::new()
            .set("width", width)
            .set("height", height)
            .set("fill", scene.background),
    );

    scene
        .primitives
        .iter()
        .fold(document, |document, primitive| match primitive {
            Primitive::Comment(text) => document.add(comment(text)),
            Primitive::Line {
                from,
                to,
                stroke,
                width,
            } => document.add(line(*from, *to, stroke, *width)),
            Primitive::Circle {
                center,
                radius,
                fill,
            } => document.add(
                Circle::new()
                    .set("cx", fmt_num(center.x))
                    .set("cy", fmt_num(center.y))
                    .set("r", fmt_num(*radius))
                    .set("fill", *fill),
            ),
        })
}

/// Serialize a scene as a standalone SVG file
pub fn write_document(scene: &Scene) -> Result<String> {
    let document = document(scene);
    let mut out = Vec::new();
    writeln!(out, "{XML_DECLARATION}").map_err(WadError::Serialize)?;
    ::svg::write(&mut out, &document).map_err(WadError::Serialize)?;
    out.push(b'\n');
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn line(from: DVec2, to: DVec2, stroke: &str, width: f64) -> Line {
    Line::new()
        .set("x1", fmt_num(from.x))
        .set("y1", fmt_num(from.y))
        .set("x2", fmt_num(to.x))
        .set("y2", fmt_num(to.y))
        .set("stroke", stroke)
        .set("stroke-width", fmt_num(width))
}

/// XML comments may not contain `--`
fn comment(text: &str) -> Comment {
    let mut safe = text.replace("--", "- -");
    if safe.ends_with('-') {
        safe.push(' ');
    }
    Comment::new(safe)
}

/// Shortest decimal form; whole numbers print without a fraction and -0 prints as 0
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Bounds, Transform};
    use glam::dvec2;

    fn scene(primitives: Vec<Primitive>, prologue: Vec<String>) -> Scene {
        let bounds = Bounds {
            min_x: 0,
            max_x: 10,
            min_y: 0,
            max_y: 10,
        };
        Scene {
            transform: Transform::new(bounds, 1.0, 0),
            background: "black",
            prologue,
            primitives,
        }
    }

    #[test]
    fn number_format() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_num(-3.0), "-3");
    }

    #[test]
    fn document_shape() {
        let svg = write_document(&scene(
            vec![Primitive::Line {
                from: dvec2(0.0, 10.0),
                to: dvec2(10.0, 0.0),
                stroke: "white",
                width: 4.0,
            }],
            vec![],
        ))
        .unwrap();
        assert!(svg.starts_with(XML_DECLARATION));
        assert!(svg.contains(r#"width="10""#));
        assert!(svg.contains(r#"height="10""#));
        assert!(svg.contains(r#"fill="black""#));
        assert!(svg.contains(r#"x1="0""#));
        assert!(svg.contains(r#"y1="10""#));
        assert!(svg.contains(r#"stroke-width="4""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<!--"));
    }

    #[test]
    fn prologue_comes_before_background() {
        let svg = write_document(&scene(vec![], vec!["map             : E1M1".into()])).unwrap();
        let note = svg.find("E1M1").unwrap();
        let rect = svg.find("<rect").unwrap();
        assert!(note < rect);
    }

    #[test]
    fn comments_are_sanitized() {
        let svg = write_document(&scene(
            vec![Primitive::Comment("a--b-".into())],
            vec!["wadfile : my--maps.wad => PWAD".into()],
        ))
        .unwrap();
        assert!(svg.contains("my- -maps.wad"));
        assert!(svg.contains("a- -b- "));
    }
}
