//! Lump directory resolution.
//!
//! A map is a marker entry followed by its data lumps at fixed positions:
//!
//! ```text
//! E1M1      <- marker, index i
//! THINGS    <- i + 1
//! LINEDEFS  <- i + 2
//! SIDEDEFS  <- i + 3
//! VERTEXES  <- i + 4
//! SEGS ...
//! ```
//!
//! Membership is positional; the sub-lump names are only checked for logging.

use std::ops::Range;

use crate::errors::{Result, StructureError};
use crate::log::{debug, warn};

use super::records::{DirEntry, LumpName};

/// Offset of each data lump from its map marker
pub const THINGS_OFFSET: usize = 1;
pub const LINEDEFS_OFFSET: usize = 2;
pub const VERTEXES_OFFSET: usize = 4;

/// How a requested map name is compared with directory names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Compare only the first `len(name)` bytes, so "E1M1" also hits "E1M10"
    #[default]
    Prefix,
    /// Compare the whole NUL-trimmed name
    Exact,
}

impl MatchMode {
    fn matches(self, entry: &LumpName, name: &[u8]) -> bool {
        match self {
            MatchMode::Prefix => entry.starts_with(name),
            MatchMode::Exact => entry.equals(name),
        }
    }
}

/// A data lump as a validated byte range within the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumpRange {
    pub name: LumpName,
    pub index: usize,
    pub bytes: Range<usize>,
}

impl LumpRange {
    fn from_entry(index: usize, entry: &DirEntry) -> Result<Self> {
        let start = non_negative("lump position", entry.file_position)?;
        let size = non_negative("lump size", entry.size)?;
        Ok(Self {
            name: entry.name,
            index,
            bytes: start..start + size,
        })
    }

    pub fn offset(&self) -> usize {
        self.bytes.start
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The resolved data lumps of one map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLumps {
    /// Directory index of the marker that matched
    pub marker_index: usize,
    /// Stored name of the marker that matched
    pub marker: LumpName,
    pub things: LumpRange,
    pub linedefs: LumpRange,
    pub vertexes: LumpRange,
}

/// Convert a signed 32-bit directory field, rejecting negatives
pub(crate) fn non_negative(field: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| StructureError::NegativeField { field, value }.into())
}

/// Scan `directory` in stored order for the first marker matching `map_name`.
///
/// Returns `Ok(None)` when nothing matches. A match whose data lumps would
/// fall past the end of the directory is a `MissingSubLump` error.
pub fn find_map(directory: &[DirEntry], map_name: &str, mode: MatchMode) -> Result<Option<MapLumps>> {
    let wanted = map_name.as_bytes();
    let Some(index) = directory
        .iter()
        .position(|entry| mode.matches(&entry.name, wanted))
    else {
        debug!(map_name, "no matching map marker");
        return Ok(None);
    };

    let marker = directory[index].name;
    debug!(map_name, index, marker = %marker, "found map marker");

    let sub_lump = |offset: usize, lump: &'static str| -> Result<LumpRange> {
        let at = index + offset;
        let entry = directory.get(at).ok_or_else(|| StructureError::MissingSubLump {
            marker: marker.to_string(),
            index,
            lump,
            count: directory.len(),
        })?;
        if !entry.name.equals(lump.as_bytes()) {
            warn!(
                map = %marker,
                expected = lump,
                found = %entry.name,
                "unexpected lump at fixed map offset"
            );
        }
        LumpRange::from_entry(at, entry)
    };

    Ok(Some(MapLumps {
        marker_index: index,
        marker,
        things: sub_lump(THINGS_OFFSET, "THINGS")?,
        linedefs: sub_lump(LINEDEFS_OFFSET, "LINEDEFS")?,
        vertexes: sub_lump(VERTEXES_OFFSET, "VERTEXES")?,
    }))
}

/// Naming scheme a map marker follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapNaming {
    /// `MAPxx`, two digits
    MapNumber,
    /// `ExMy`, episode and mission digits
    EpisodeMission,
}

/// Classify a lump name as a map marker, if it is one.
///
/// Both schemes are tried for every name.
pub fn map_naming(name: &LumpName) -> Option<MapNaming> {
    let bytes = name.as_bytes();
    let map_number = matches!(bytes, [b'M', b'A', b'P', a, b, ..] if a.is_ascii_digit() && b.is_ascii_digit());
    let episode_mission = matches!(bytes, [b'E', e, b'M', m, ..] if e.is_ascii_digit() && m.is_ascii_digit());
    if map_number {
        Some(MapNaming::MapNumber)
    } else if episode_mission {
        Some(MapNaming::EpisodeMission)
    } else {
        None
    }
}

/// One map marker found while listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub index: usize,
    pub name: LumpName,
    pub naming: MapNaming,
    pub file_position: i32,
    pub size: i32,
}

/// Every map marker in directory order
pub fn enumerate_maps(directory: &[DirEntry]) -> Vec<MapEntry> {
    directory
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            map_naming(&entry.name).map(|naming| MapEntry {
                index,
                name: entry.name,
                naming,
                file_position: entry.file_position,
                size: entry.size,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WadError;

    fn entry(name: &str, file_position: i32, size: i32) -> DirEntry {
        DirEntry {
            file_position,
            size,
            name: LumpName::from_str_padded(name),
        }
    }

    fn map_block(marker: &str, base: i32) -> Vec<DirEntry> {
        vec![
            entry(marker, base, 0),
            entry("THINGS", base, 10),
            entry("LINEDEFS", base + 10, 14),
            entry("SIDEDEFS", base + 24, 0),
            entry("VERTEXES", base + 24, 8),
        ]
    }

    #[test]
    fn resolves_fixed_offsets() {
        let mut dir = vec![entry("PLAYPAL", 12, 0)];
        dir.extend(map_block("E1M1", 100));
        let lumps = find_map(&dir, "E1M1", MatchMode::Prefix).unwrap().unwrap();
        assert_eq!(lumps.marker_index, 1);
        assert_eq!(lumps.things.index, 2);
        assert_eq!(lumps.things.bytes, 100..110);
        assert_eq!(lumps.linedefs.index, 3);
        assert_eq!(lumps.linedefs.bytes, 110..124);
        assert_eq!(lumps.vertexes.index, 5);
        assert_eq!(lumps.vertexes.bytes, 124..132);
    }

    #[test]
    fn missing_name_is_not_an_error() {
        let dir = map_block("E1M1", 100);
        assert_eq!(find_map(&dir, "E9M9", MatchMode::Prefix).unwrap(), None);
    }

    #[test]
    fn prefix_match_takes_first_in_scan_order() {
        let mut dir = map_block("E1M10", 100);
        dir.extend(map_block("E1M1", 200));
        let lumps = find_map(&dir, "E1M1", MatchMode::Prefix).unwrap().unwrap();
        assert_eq!(lumps.marker_index, 0);
        assert_eq!(lumps.marker.to_string(), "E1M10");
    }

    #[test]
    fn exact_match_skips_longer_names() {
        let mut dir = map_block("E1M10", 100);
        dir.extend(map_block("E1M1", 200));
        let lumps = find_map(&dir, "E1M1", MatchMode::Exact).unwrap().unwrap();
        assert_eq!(lumps.marker_index, 5);
        assert_eq!(lumps.marker.to_string(), "E1M1");
    }

    #[test]
    fn marker_too_close_to_the_end() {
        let dir = vec![entry("MAP01", 0, 0), entry("THINGS", 0, 0), entry("LINEDEFS", 0, 0)];
        let err = find_map(&dir, "MAP01", MatchMode::Prefix).unwrap_err();
        assert!(matches!(
            err,
            WadError::Structure(StructureError::MissingSubLump { lump: "VERTEXES", count: 3, .. })
        ));
    }

    #[test]
    fn negative_lump_size() {
        let mut dir = map_block("MAP01", 0);
        dir[2].size = -14;
        let err = find_map(&dir, "MAP01", MatchMode::Prefix).unwrap_err();
        assert!(matches!(
            err,
            WadError::Structure(StructureError::NegativeField { value: -14, .. })
        ));
    }

    #[test]
    fn enumeration_recognises_both_schemes() {
        let dir = vec![
            entry("MAP01", 0, 0),
            entry("E1M1", 0, 0),
            entry("THINGS", 0, 0),
            entry("VERTEXES", 0, 0),
        ];
        let maps = enumerate_maps(&dir);
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0].index, 0);
        assert_eq!(maps[0].naming, MapNaming::MapNumber);
        assert_eq!(maps[1].index, 1);
        assert_eq!(maps[1].naming, MapNaming::EpisodeMission);
    }

    #[test]
    fn near_miss_names_are_not_maps() {
        for name in ["MAP", "MAPX1", "MAP1", "EXM1", "E1MX", "E1", "MAPINFO"] {
            assert_eq!(map_naming(&LumpName::from_str_padded(name)), None, "{name}");
        }
        assert_eq!(
            map_naming(&LumpName::from_str_padded("MAP32")),
            Some(MapNaming::MapNumber)
        );
        assert_eq!(
            map_naming(&LumpName::from_str_padded("E4M9")),
            Some(MapNaming::EpisodeMission)
        );
    }
}
