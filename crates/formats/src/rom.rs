//! Support for headerless cartridge ROM families, classified by size alone.
//!
//! A bare dump of an Atari 5200, CreatiVision, Midway, or Sega system cartridge is
//! indistinguishable from any other buffer of the same length; these families simply claim the
//! length ranges the real hardware shipped in. Two dumps of the same length resolve by registry
//! order, and the hint path exists for callers who know better.
//!
//! Intellivision is the one family here with any structure: a common dumping tool prepends a
//! two-byte prefix, so the probe peeks at it, but a dump without the prefix is just as real.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Adds support for Intellivision ROM images. This struct is stateless, and is merely a
/// namespace.
pub struct Int;

impl Int {
    /// Prefix left by a common dumping tool; its absence only clears the header flag.
    pub const HEADER_PREFIX: [u8; 2] = [0xA8, 0x00];

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Rom(RomImage {
            rom_size: reader.len() as u64,
            has_header: reader.matches_at(0, &Self::HEADER_PREFIX),
        }))
    }
}
