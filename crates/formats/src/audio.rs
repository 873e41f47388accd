//! Support for chiptune and console audio rips: AY archives and Ultra64 sound files.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Adds support for ZX Spectrum AY music archives. This struct is stateless, and is merely a
/// namespace.
///
/// # Format
/// | Offset | Field | Type | Notes |
/// |---|---|---|---|
/// | 0x0 | Magic | u8\[8\] | `ZXAYEMUL` |
/// | 0x8 | File version | u8 | |
/// | 0x9 | Player version | u8 | |
/// | 0x10 | Song count | u8 | Stored as songs minus one |
/// | 0x11 | First song | u8 | Zero-based index of the default song |
pub struct Ay;

impl Ay {
    /// Unique identifier that tells us if we're reading an AY archive.
    pub const MAGIC: [u8; 8] = *b"ZXAYEMUL";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Ay(AyTune {
            file_version: reader.u8_at(8),
            player_version: reader.u8_at(9),
            num_songs: u16::from(reader.u8_at(0x10)) + 1,
            first_song: reader.u8_at(0x11),
        }))
    }
}

/// Adds support for the Ultra64 sound format. This struct is stateless, and is merely a
/// namespace.
///
/// USF is a PSF-family container: the shared `PSF` tag is followed by a version byte, `0x21` for
/// the Nintendo 64 variant. Both sizes are reported verbatim without checking them against the
/// buffer, since miniUSF files reference data that lives in an external library file.
pub struct Usf;

impl Usf {
    /// PSF signature plus the Ultra64 version byte.
    pub const MAGIC: [u8; 4] = *b"PSF\x21";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Usf(UltraSound {
            reserved_size: reader.u32_at(4, Endian::Little),
            compressed_size: reader.u32_at(8, Endian::Little),
        }))
    }
}
