//! WAD archive access
//!
//! This module is organized into submodules:
//! - `codec`: the fixed-size little-endian record primitive
//! - `records`: header, directory entry and map geometry layouts
//! - `directory`: map marker lookup and enumeration

pub mod codec;
pub mod directory;
pub mod records;

pub use directory::{
    LumpRange, MapEntry, MapLumps, MapNaming, MatchMode, enumerate_maps, find_map, map_naming,
};
pub use records::{DirEntry, Header, Linedef, LumpName, Thing, Vertex, WadKind};

use crate::errors::{Result, WadError};
use crate::log::debug;
use codec::{Record, decode_array, decode_at, decode_lump, take};
use directory::non_negative;

/// A parsed archive: validated header plus the full directory, borrowing the file bytes
#[derive(Debug, Clone)]
pub struct Wad<'a> {
    data: &'a [u8],
    pub kind: WadKind,
    pub header: Header,
    pub directory: Vec<DirEntry>,
}

impl<'a> Wad<'a> {
    /// Read the header and directory.
    ///
    /// The identification tag is checked before anything else is decoded,
    /// so a short file with a readable but wrong tag is a format error.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let tag = take(data, 0, 4, Header::NAME)?;
        let kind = WadKind::from_tag(tag).ok_or_else(|| WadError::BadIdentification {
            found: String::from_utf8_lossy(tag).into_owned(),
        })?;
        let header: Header = decode_at(data, 0)?;

        let count = non_negative("lump count", header.lump_count)?;
        let offset = non_negative("directory offset", header.directory_offset)?;
        let directory = decode_array::<DirEntry>(data, offset, count)?;

        debug!(
            kind = %kind,
            lump_count = count,
            directory_offset = offset,
            "read WAD header"
        );

        Ok(Self {
            data,
            kind,
            header,
            directory,
        })
    }

    /// The raw archive bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Every map marker in the directory
    pub fn maps(&self) -> Vec<MapEntry> {
        enumerate_maps(&self.directory)
    }

    /// Locate `map_name` and decode its things, linedefs and vertices.
    ///
    /// A name with no matching marker is `MapNotFound`.
    pub fn load_map(&self, map_name: &str, mode: MatchMode) -> Result<MapData> {
        let lumps = find_map(&self.directory, map_name, mode)?.ok_or_else(|| {
            WadError::MapNotFound {
                name: map_name.to_string(),
            }
        })?;
        MapData::decode(self.data, lumps)
    }
}

/// Decoded geometry and entities for one map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapData {
    pub lumps: MapLumps,
    pub things: Vec<Thing>,
    pub linedefs: Vec<Linedef>,
    pub vertices: Vec<Vertex>,
}

impl MapData {
    pub fn decode(data: &[u8], lumps: MapLumps) -> Result<Self> {
        let things = decode_range::<Thing>(data, "THINGS", &lumps.things)?;
        let linedefs = decode_range::<Linedef>(data, "LINEDEFS", &lumps.linedefs)?;
        let vertices = decode_range::<Vertex>(data, "VERTEXES", &lumps.vertexes)?;

        debug!(
            map = %lumps.marker,
            things = things.len(),
            linedefs = linedefs.len(),
            vertices = vertices.len(),
            "decoded map lumps"
        );

        Ok(Self {
            lumps,
            things,
            linedefs,
            vertices,
        })
    }

    /// Name of the marker this map was loaded from
    pub fn name(&self) -> String {
        self.lumps.marker.to_string()
    }
}

fn decode_range<R: Record>(data: &[u8], lump: &'static str, range: &LumpRange) -> Result<Vec<R>> {
    decode_lump(data, lump, range.offset(), range.len())
}
