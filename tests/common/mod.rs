//! Shared helpers: an in-memory WAD writer and an SVG element scraper.

#![allow(dead_code)]

use std::collections::HashMap;

use regex_lite::Regex;

/// Builds a WAD archive byte by byte: header, lump data, then directory
pub struct WadBuilder {
    tag: [u8; 4],
    data: Vec<u8>,
    entries: Vec<(i32, i32, [u8; 8])>,
}

impl WadBuilder {
    pub fn new(tag: &[u8; 4]) -> Self {
        Self {
            tag: *tag,
            data: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn pwad() -> Self {
        Self::new(b"PWAD")
    }

    /// Append a lump with raw contents
    pub fn lump(mut self, name: &str, bytes: &[u8]) -> Self {
        let pos = 12 + self.data.len() as i32;
        self.data.extend_from_slice(bytes);
        self.entries.push((pos, bytes.len() as i32, name_bytes(name)));
        self
    }

    /// Append a lump of little-endian 16-bit fields
    pub fn lump_i16(self, name: &str, fields: &[i16]) -> Self {
        let bytes: Vec<u8> = fields.iter().flat_map(|f| f.to_le_bytes()).collect();
        self.lump(name, &bytes)
    }

    /// Append the usual lump sequence for one map
    pub fn map(self, marker: &str, things: &[[i16; 5]], linedefs: &[[i16; 7]], vertices: &[[i16; 2]]) -> Self {
        self.lump(marker, &[])
            .lump_i16("THINGS", &things.concat())
            .lump_i16("LINEDEFS", &linedefs.concat())
            .lump("SIDEDEFS", &[])
            .lump_i16("VERTEXES", &vertices.concat())
            .lump("SEGS", &[])
            .lump("SSECTORS", &[])
            .lump("NODES", &[])
            .lump("SECTORS", &[])
            .lump("REJECT", &[])
            .lump("BLOCKMAP", &[])
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&(self.entries.len() as i32).to_le_bytes());
        out.extend_from_slice(&(12 + self.data.len() as i32).to_le_bytes());
        out.extend_from_slice(&self.data);
        for (pos, size, name) in &self.entries {
            out.extend_from_slice(&pos.to_le_bytes());
            out.extend_from_slice(&size.to_le_bytes());
            out.extend_from_slice(name);
        }
        out
    }
}

fn name_bytes(name: &str) -> [u8; 8] {
    let mut raw = [0u8; 8];
    for (dst, src) in raw.iter_mut().zip(name.bytes()) {
        *dst = src;
    }
    raw
}

/// The minimal archive: one E1M1 with a single diagonal wall
pub fn minimal_wad() -> Vec<u8> {
    WadBuilder::pwad()
        .map("E1M1", &[], &[[0, 1, 0, 0, 0, 0, -1]], &[[0, 0], [10, 10]])
        .build()
}

/// One SVG element with its attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: HashMap<String, String>,
}

impl Element {
    pub fn attr(&self, name: &str) -> &str {
        self.attrs
            .get(name)
            .unwrap_or_else(|| panic!("<{}> has no {name} attribute: {:?}", self.tag, self.attrs))
    }

    pub fn num(&self, name: &str) -> f64 {
        self.attr(name)
            .parse()
            .unwrap_or_else(|e| panic!("{name}={:?} is not a number: {e}", self.attr(name)))
    }
}

/// Every `tag` element in document order
pub fn elements(svg: &str, tag: &str) -> Vec<Element> {
    let element = Regex::new(&format!(r"<{tag}\b([^>]*)>")).unwrap();
    let attribute = Regex::new(r#"([\w:-]+)="([^"]*)""#).unwrap();
    element
        .captures_iter(svg)
        .map(|caps| Element {
            tag: tag.to_string(),
            attrs: attribute
                .captures_iter(&caps[1])
                .map(|a| (a[1].to_string(), a[2].to_string()))
                .collect(),
        })
        .collect()
}

/// Text of every comment, trimmed
pub fn comments(svg: &str) -> Vec<String> {
    let comment = Regex::new(r"(?s)<!--(.*?)-->").unwrap();
    comment
        .captures_iter(svg)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}
