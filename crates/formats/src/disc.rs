//! Support for optical and flux-level disc imaging formats.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Adds support for Alcohol 120% media descriptors. This struct is stateless, and is merely a
/// namespace.
///
/// # Format
/// | Offset | Field | Type | Notes |
/// |---|---|---|---|
/// | 0x0 | Magic | u8\[16\] | `MEDIA DESCRIPTOR` |
/// | 0x10 | Version major | u8 | |
/// | 0x11 | Version minor | u8 | |
/// | 0x12 | Medium type | u16 (LE) | |
/// | 0x14 | Session count | u16 (LE) | |
pub struct Mds;

impl Mds {
    /// Unique identifier that tells us if we're reading a media descriptor.
    pub const MAGIC: [u8; 16] = *b"MEDIA DESCRIPTOR";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Mds(MediaDescriptor {
            version_major: reader.u8_at(0x10),
            version_minor: reader.u8_at(0x11),
            medium_type: reader.u16_at(0x12, Endian::Little),
            session_count: reader.u16_at(0x14, Endian::Little),
        }))
    }
}

/// Adds support for CT Raw flux dumps. This struct is stateless, and is merely a namespace.
///
/// A dump holds a single track of raw flux data behind a 13-byte header: `CTRAW`, a version,
/// track and side numbers, and the length of the flux stream that follows.
pub struct Ctr;

impl Ctr {
    /// Unique identifier that tells us if we're reading a CT Raw dump.
    pub const MAGIC: [u8; 5] = *b"CTRAW";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Ctr(CtRaw {
            version: reader.u16_at(5, Endian::Little),
            track: reader.u8_at(7),
            side: reader.u8_at(8),
            data_size: reader.u32_at(9, Endian::Little),
        }))
    }
}

/// Adds support for LaserActive disc images. This struct is stateless, and is merely a namespace.
///
/// LaserActive images have no magic of their own; any sufficiently large buffer is taken at its
/// word. A `SEGA` marker at offset 0x100 singles out Mega LD discs, and its absence only means
/// the image belongs to another LaserActive flavour.
pub struct Lda;

impl Lda {
    /// Offset where Mega LD discs carry their system marker.
    pub const SEGA_OFFSET: usize = 0x100;
    /// The Mega LD system marker.
    pub const SEGA: [u8; 4] = *b"SEGA";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Lda(LaserDisc {
            mega_ld: reader.matches_at(Self::SEGA_OFFSET, &Self::SEGA),
        }))
    }
}
