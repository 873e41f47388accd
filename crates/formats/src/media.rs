//! Support for audio/video containers: RIFF AVI and Shockwave Flash.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Adds support for the RIFF AVI container. This struct is stateless, and is merely a namespace.
///
/// # Format
/// | Offset | Field | Type | Notes |
/// |---|---|---|---|
/// | 0x0 | Magic | u8\[4\] | `RIFF` |
/// | 0x4 | Chunk size | u32 (LE) | File size minus the first 8 bytes |
/// | 0x8 | Form type | u8\[4\] | `AVI ` narrows RIFF down to AVI |
pub struct Avi;

impl Avi {
    /// Unique identifier that tells us if we're reading a RIFF container.
    pub const MAGIC: [u8; 4] = *b"RIFF";
    /// Form type at offset 8 that narrows a RIFF file down to AVI.
    pub const FORM_TYPE: [u8; 4] = *b"AVI ";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Avi(RiffAvi { file_size: reader.u32_at(4, Endian::Little) }))
    }
}

/// Adds support for Shockwave Flash movies. This struct is stateless, and is merely a namespace.
///
/// The first signature byte doubles as the compression scheme: `FWS` is stored flat, `CWS` is
/// zlib past the first 8 bytes, `ZWS` is LZMA. Version and the declared uncompressed length sit
/// in the 8-byte header, which is never compressed.
pub struct Swf;

impl Swf {
    /// Signature of an uncompressed movie.
    pub const MAGIC_NONE: [u8; 3] = *b"FWS";
    /// Signature of a zlib-compressed movie.
    pub const MAGIC_ZLIB: [u8; 3] = *b"CWS";
    /// Signature of an LZMA-compressed movie.
    pub const MAGIC_LZMA: [u8; 3] = *b"ZWS";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        //The gate already passed on one of the three signatures, so this cannot fail
        let compression = SwfCompression::try_from(reader.u8_at(0)).ok()?;
        Some(Payload::Swf(Shockwave {
            compression,
            version: reader.u8_at(3),
            file_length: reader.u32_at(4, Endian::Little),
        }))
    }
}
