//! On-disk record layouts.
//!
//! Header and directory fields are 32-bit, map geometry fields are 16-bit,
//! all little-endian regardless of the host.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use super::codec::Record;

/// Archive identification tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadKind {
    /// Complete game data
    Iwad,
    /// Patch archive layered over an IWAD
    Pwad,
}

impl WadKind {
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"IWAD" => Some(WadKind::Iwad),
            b"PWAD" => Some(WadKind::Pwad),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WadKind::Iwad => "IWAD",
            WadKind::Pwad => "PWAD",
        }
    }
}

impl fmt::Display for WadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 12-byte file header, undecoded tag included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub identification: [u8; 4],
    pub lump_count: i32,
    pub directory_offset: i32,
}

impl Record for Header {
    const NAME: &'static str = "header";
    const SIZE: usize = 12;

    fn decode(bytes: &[u8]) -> Self {
        let mut identification = [0u8; 4];
        identification.copy_from_slice(&bytes[0..4]);
        Self {
            identification,
            lump_count: LittleEndian::read_i32(&bytes[4..8]),
            directory_offset: LittleEndian::read_i32(&bytes[8..12]),
        }
    }
}

/// An 8-byte lump name, NUL padded but not necessarily NUL terminated
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LumpName([u8; 8]);

impl LumpName {
    pub const fn new(raw: [u8; 8]) -> Self {
        Self(raw)
    }

    /// Build a name from a string, truncating to 8 bytes and padding with NULs
    pub fn from_str_padded(name: &str) -> Self {
        let mut raw = [0u8; 8];
        for (dst, src) in raw.iter_mut().zip(name.bytes()) {
            *dst = src;
        }
        Self(raw)
    }

    /// All eight stored bytes
    pub fn raw(&self) -> &[u8; 8] {
        &self.0
    }

    /// The name up to its first NUL
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(self.0.len());
        &self.0[..end]
    }

    /// Length-bounded comparison: the first `prefix.len()` stored bytes equal `prefix`.
    ///
    /// "E1M1" therefore also matches a stored "E1M10". A prefix longer than
    /// eight bytes never matches.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        prefix.len() <= self.0.len() && &self.0[..prefix.len()] == prefix
    }

    /// Whole-name comparison with trailing NULs ignored
    pub fn equals(&self, name: &[u8]) -> bool {
        self.as_bytes() == name
    }
}

impl fmt::Display for LumpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for LumpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LumpName({:?})", self.to_string())
    }
}

/// One 16-byte directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    pub file_position: i32,
    pub size: i32,
    pub name: LumpName,
}

impl Record for DirEntry {
    const NAME: &'static str = "directory entry";
    const SIZE: usize = 16;

    fn decode(bytes: &[u8]) -> Self {
        let mut name = [0u8; 8];
        name.copy_from_slice(&bytes[8..16]);
        Self {
            file_position: LittleEndian::read_i32(&bytes[0..4]),
            size: LittleEndian::read_i32(&bytes[4..8]),
            name: LumpName::new(name),
        }
    }
}

/// Map-space point; Y grows north
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub x: i16,
    pub y: i16,
}

impl Record for Vertex {
    const NAME: &'static str = "vertex";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            x: LittleEndian::read_i16(&bytes[0..2]),
            y: LittleEndian::read_i16(&bytes[2..4]),
        }
    }
}

/// A wall segment between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linedef {
    pub start_vertex: i16,
    pub end_vertex: i16,
    pub flags: i16,
    pub special: i16,
    pub tag: i16,
    pub front_sidedef: i16,
    pub back_sidedef: i16,
}

impl Record for Linedef {
    const NAME: &'static str = "linedef";
    const SIZE: usize = 14;

    fn decode(bytes: &[u8]) -> Self {
        let mut fields = [0i16; 7];
        LittleEndian::read_i16_into(bytes, &mut fields);
        let [start_vertex, end_vertex, flags, special, tag, front_sidedef, back_sidedef] = fields;
        Self {
            start_vertex,
            end_vertex,
            flags,
            special,
            tag,
            front_sidedef,
            back_sidedef,
        }
    }
}

/// A placed entity: monster, item, player start...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thing {
    pub x: i16,
    pub y: i16,
    /// Degrees, 0 = east
    pub angle: i16,
    pub kind: i16,
    pub flags: i16,
}

impl Record for Thing {
    const NAME: &'static str = "thing";
    const SIZE: usize = 10;

    fn decode(bytes: &[u8]) -> Self {
        let mut fields = [0i16; 5];
        LittleEndian::read_i16_into(bytes, &mut fields);
        let [x, y, angle, kind, flags] = fields;
        Self {
            x,
            y,
            angle,
            kind,
            flags,
        }
    }
}
