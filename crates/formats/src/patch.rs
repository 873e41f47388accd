//! Support for the Beat patch container (BPS), the patch format the ROM-hacking scene settled on.
//!
//! # Format
//! A patch opens with a 4-byte magic and ends with a fixed checksum block; everything between is
//! a varint-coded action stream this probe does not decode.
//!
//! | Offset | Field | Type | Notes |
//! |---|---|---|---|
//! | 0x0 | Magic | u8\[4\] | `BPS1` |
//! | ... | Action stream | varint | Source/target sizes, metadata, patch actions |
//! | len-12 | Source CRC32 | u32 (LE) | Checksum of the file the patch applies to |
//! | len-8 | Target CRC32 | u32 (LE) | Checksum of the patched output |
//! | len-4 | Patch CRC32 | u32 (LE) | Checksum of the patch itself, excluding these 4 bytes |
//!
//! The trailing block is anchored at the end, so the probe works on any patch long enough to hold
//! both the magic and the block. The three checksums are reported verbatim.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Adds support for the BPS patch container. This struct is stateless, and is merely a namespace.
pub struct Bps;

impl Bps {
    /// Unique identifier at the start of every BPS patch.
    pub const MAGIC: [u8; 4] = *b"BPS1";
    /// The checksum block occupies the last 12 bytes.
    pub const TRAILING_LEN: usize = 12;

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        let base = reader.len().saturating_sub(Self::TRAILING_LEN);
        Some(Payload::Bps(BpsFooter {
            source_crc: reader.u32_at(base, Endian::Little),
            target_crc: reader.u32_at(base + 4, Endian::Little),
            patch_crc: reader.u32_at(base + 8, Endian::Little),
        }))
    }
}
