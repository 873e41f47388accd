//! Support for TAS movie containers: Dolphin and FCEU input recordings.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Adds support for Dolphin TAS movies. This struct is stateless, and is merely a namespace.
///
/// # Format
/// | Offset | Field | Type | Notes |
/// |---|---|---|---|
/// | 0x0 | Magic | u8\[4\] | `DTM` followed by 0x1A |
/// | 0x4 | Game ID | u8\[6\] | e.g. `GALE01` |
/// | 0xA | Wii flag | u8 | Non-zero for Wii titles |
/// | 0xB | Controllers | u8 | Bitmask of connected pads |
/// | 0xC | Savestate flag | u8 | Non-zero when recording starts from a savestate |
///
/// The full header is 256 bytes; the probe demands all of it even though only the front is
/// decoded, since shorter files cannot be complete recordings.
pub struct Dtm;

impl Dtm {
    /// Unique identifier that tells us if we're reading a Dolphin movie.
    pub const MAGIC: [u8; 4] = *b"DTM\x1A";
    /// Total size of the fixed header.
    pub const HEADER_SIZE: usize = 256;

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Dtm(DolphinMovie {
            game_id: reader.bytes_at::<6>(4),
            wii_game: reader.u8_at(0xA) != 0,
            controllers: reader.u8_at(0xB),
            from_savestate: reader.u8_at(0xC) != 0,
        }))
    }
}

/// Adds support for FCEU movies. This struct is stateless, and is merely a namespace.
///
/// The magic is the little-endian u32 `0x4D4D4346`, which reads as `FCMM` on disk. Counters are
/// little-endian u32s straight out of the 32-byte header.
pub struct Fcm;

impl Fcm {
    /// Header signature as the emulator stores it.
    pub const SIGNATURE: u32 = 0x4D4D_4346;
    /// Unique identifier that tells us if we're reading an FCEU movie.
    pub const MAGIC: [u8; 4] = Self::SIGNATURE.to_le_bytes();
    /// Total size of the fixed header.
    pub const HEADER_SIZE: usize = 32;

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Fcm(FceuMovie {
            version: reader.u32_at(4, Endian::Little),
            frame_count: reader.u32_at(8, Endian::Little),
            rerecord_count: reader.u32_at(0xC, Endian::Little),
        }))
    }
}
