//! Fixed-layout little-endian record decoding.
//!
//! Every WAD structure is a run of two's-complement integers with no padding
//! and no schema tag. A record type declares its byte width and how to pull
//! its fields out of exactly that many bytes; `decode_at` and `decode_array`
//! do the bounds checking once for all of them.

use crate::errors::{Result, StructureError, WadError};

/// A fixed-size record stored little-endian in the archive
pub trait Record: Sized {
    /// Name used in diagnostics
    const NAME: &'static str;
    /// Encoded size in bytes
    const SIZE: usize;

    /// Decode from a slice of exactly `Self::SIZE` bytes.
    ///
    /// Callers guarantee the length; use [`decode_at`] instead of calling this
    /// directly.
    fn decode(bytes: &[u8]) -> Self;
}

/// Borrow `len` bytes at `offset`, or fail with `TruncatedRead` naming `record`
pub fn take<'a>(data: &'a [u8], offset: usize, len: usize, record: &'static str) -> Result<&'a [u8]> {
    let available = data.len().saturating_sub(offset);
    match offset.checked_add(len) {
        Some(end) if end <= data.len() => Ok(&data[offset..end]),
        _ => Err(WadError::TruncatedRead {
            record,
            offset,
            needed: len,
            available,
        }),
    }
}

/// Decode one record starting at `offset`
pub fn decode_at<R: Record>(data: &[u8], offset: usize) -> Result<R> {
    take(data, offset, R::SIZE, R::NAME).map(R::decode)
}

/// Decode `count` consecutive records starting at `offset`
pub fn decode_array<R: Record>(data: &[u8], offset: usize, count: usize) -> Result<Vec<R>> {
    let len = count.checked_mul(R::SIZE).ok_or(WadError::TruncatedRead {
        record: R::NAME,
        offset,
        needed: usize::MAX,
        available: data.len().saturating_sub(offset),
    })?;
    let bytes = take(data, offset, len, R::NAME)?;
    Ok(bytes.chunks_exact(R::SIZE).map(R::decode).collect())
}

/// Decode a whole lump of `size` bytes at `offset` as an array of `R`.
///
/// The size must be an exact multiple of the record width.
pub fn decode_lump<R: Record>(
    data: &[u8],
    lump: &'static str,
    offset: usize,
    size: usize,
) -> Result<Vec<R>> {
    if size % R::SIZE != 0 {
        return Err(StructureError::RaggedLump {
            lump,
            size,
            record_size: R::SIZE,
        }
        .into());
    }
    decode_array(data, offset, size / R::SIZE)
}
