//! Error types with diagnostics using miette
//!
//! Every failure surfaces to the caller unchanged; nothing here is retried and
//! no partial record or document is ever handed on after an error.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = WadError> = std::result::Result<T, E>;

// ============================================================================
// Top-level errors
// ============================================================================

/// Everything that can go wrong between opening an archive and writing a document
#[derive(Error, Diagnostic, Debug)]
pub enum WadError {
    #[error("could not {action} {}", path.display())]
    #[diagnostic(code(wadsvg::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("truncated {record}: need {needed} bytes at offset {offset}, only {available} available")]
    #[diagnostic(
        code(wadsvg::truncated_read),
        help("the archive is shorter than its header or directory claims")
    )]
    TruncatedRead {
        record: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("not a WAD archive (identification: {found:?})")]
    #[diagnostic(
        code(wadsvg::format),
        help("the first four bytes must be \"IWAD\" or \"PWAD\"")
    )]
    BadIdentification { found: String },

    #[error("{name} not found")]
    #[diagnostic(
        code(wadsvg::map_not_found),
        help("use --list to see the maps this archive contains")
    )]
    MapNotFound { name: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error("SVG serialization failed")]
    #[diagnostic(code(wadsvg::serialize))]
    Serialize(#[source] std::io::Error),
}

impl WadError {
    /// Whether this is the "map absent" outcome rather than corruption or I/O trouble
    pub fn is_map_not_found(&self) -> bool {
        matches!(self, WadError::MapNotFound { .. })
    }
}

// ============================================================================
// Structural errors
// ============================================================================

/// The archive decodes, but its contents contradict each other
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum StructureError {
    #[error("map marker {marker} at index {index} has no {lump} entry (directory holds {count} entries)")]
    #[diagnostic(code(wadsvg::structure::missing_sub_lump))]
    MissingSubLump {
        marker: String,
        index: usize,
        lump: &'static str,
        count: usize,
    },

    #[error("{lump} lump is {size} bytes, not a multiple of the {record_size}-byte record")]
    #[diagnostic(code(wadsvg::structure::ragged_lump))]
    RaggedLump {
        lump: &'static str,
        size: usize,
        record_size: usize,
    },

    #[error("{field} is negative ({value})")]
    #[diagnostic(code(wadsvg::structure::negative_field))]
    NegativeField { field: &'static str, value: i32 },

    #[error("linedef {linedef} references vertex {vertex}, but the map has {count} vertices")]
    #[diagnostic(code(wadsvg::structure::vertex_out_of_range))]
    VertexOutOfRange {
        linedef: usize,
        vertex: i16,
        count: usize,
    },

    #[error("map has no vertices")]
    #[diagnostic(
        code(wadsvg::structure::empty_vertices),
        help("the VERTEXES lump of this map is empty, so there is nothing to size the canvas by")
    )]
    EmptyVertices,
}

// ============================================================================
// Render errors
// ============================================================================

/// Rejected configuration values, caught before any I/O
#[derive(Error, Diagnostic, Debug, PartialEq)]
pub enum RenderError {
    #[error("invalid scale: {value}")]
    #[diagnostic(
        code(wadsvg::render::invalid_scale),
        help("scale must be a finite number greater than zero")
    )]
    InvalidScale { value: f64 },

    #[error("invalid padding: {value}")]
    #[diagnostic(code(wadsvg::render::invalid_padding))]
    InvalidPadding { value: i32 },

    #[error("empty map name")]
    #[diagnostic(
        code(wadsvg::render::empty_map_name),
        help("pass a map name such as E1M1 or MAP01")
    )]
    EmptyMapName,
}
