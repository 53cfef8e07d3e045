//! Render DOOM-engine maps from WAD archives as SVG.
//!
//! ```no_run
//! let data = std::fs::read("doom1.wad").unwrap();
//! let svg = wadsvg::render_wad(&data, "doom1.wad", "E1M1", &Default::default()).unwrap();
//! std::fs::write("E1M1.svg", svg).unwrap();
//! ```

pub mod config;
pub mod errors;
pub mod log;
pub mod render;
pub mod wad;

pub use config::{Config, Output, execute, run};
pub use errors::{RenderError, Result, StructureError, WadError};
pub use render::{RenderOptions, Theme};
pub use wad::{MapEntry, MatchMode, Wad};

/// Render one map of an in-memory archive to an SVG document.
///
/// `source_name` only appears in verbose comments. The map name is matched
/// with [`MatchMode::Prefix`].
pub fn render_wad(data: &[u8], source_name: &str, map_name: &str, options: &RenderOptions) -> Result<String> {
    if map_name.is_empty() {
        return Err(RenderError::EmptyMapName.into());
    }
    let wad = Wad::parse(data)?;
    let map = wad.load_map(map_name, MatchMode::Prefix)?;
    render::render(
        &map,
        options,
        Some(render::SourceInfo {
            name: source_name,
            requested: map_name,
            wad: &wad,
        }),
    )
}

/// List every map marker of an in-memory archive
pub fn list_maps(data: &[u8]) -> Result<Vec<MapEntry>> {
    Ok(Wad::parse(data)?.maps())
}

/// Human-readable listing: one line per map, then a count
pub fn format_listing(maps: &[MapEntry]) -> String {
    let plural = if maps.len() == 1 { "" } else { "s" };
    maps.iter()
        .map(|map| {
            format!(
                "{}: {} (pos: {}, size: {})\n",
                map.index, map.name, map.file_position, map.size
            )
        })
        .chain(std::iter::once(format!("{} map{plural} found\n", maps.len())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wad::{LumpName, MapNaming};

    fn entry(index: usize, name: &str, file_position: i32) -> MapEntry {
        MapEntry {
            index,
            name: LumpName::from_str_padded(name),
            naming: MapNaming::MapNumber,
            file_position,
            size: 0,
        }
    }

    #[test]
    fn listing_text() {
        let maps = [entry(0, "MAP01", 12), entry(11, "MAP02", 4096)];
        insta::assert_snapshot!(format_listing(&maps).trim_end(), @r"
        0: MAP01 (pos: 12, size: 0)
        11: MAP02 (pos: 4096, size: 0)
        2 maps found
        ");
    }

    #[test]
    fn listing_singular() {
        insta::assert_snapshot!(format_listing(&[entry(3, "E2M4", 0)]).trim_end(), @r"
        3: E2M4 (pos: 0, size: 0)
        1 map found
        ");
        insta::assert_snapshot!(format_listing(&[]).trim_end(), @"0 maps found");
    }

    #[test]
    fn empty_map_name_is_rejected() {
        let err = render_wad(b"", "x.wad", "", &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, WadError::Render(RenderError::EmptyMapName)));
    }
}
