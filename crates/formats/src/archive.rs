//! Support for the LHA/LZH archive family.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Adds support for LHA archives. This struct is stateless, and is merely a namespace.
///
/// # Format
/// LHA has no file-level magic; recognition rides on the first entry header instead.
///
/// | Offset | Field | Type | Notes |
/// |---|---|---|---|
/// | 0x0 | Header size | u8 | Level 0/1 headers |
/// | 0x2 | Method | u8\[5\] | `-lh5-`, `-lz4-`, `-lhd-`, ... |
/// | 0x7 | Packed size | u32 (LE) | |
/// | 0xB | Original size | u32 (LE) | |
///
/// Only the invariant bytes of the method string gate recognition, the `-l` at offset 2 and the
/// closing `-` at offset 6, so every `-l??-` scheme is accepted and the full string is reported.
pub struct Lzh;

impl Lzh {
    /// Invariant opening of the method string.
    pub const METHOD_PREFIX: [u8; 2] = *b"-l";
    /// Invariant closing byte of the method string.
    pub const METHOD_SUFFIX: [u8; 1] = *b"-";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Lzh(LhaEntry {
            method: reader.bytes_at::<5>(2),
            packed_size: reader.u32_at(7, Endian::Little),
            original_size: reader.u32_at(0xB, Endian::Little),
        }))
    }
}
