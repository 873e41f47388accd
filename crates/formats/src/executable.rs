//! Support for console and handheld executables: XEX2 images and N-Gage installers.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Adds support for Xbox 360 executables. This struct is stateless, and is merely a namespace.
///
/// # Format
/// XEX2 is one of the few big-endian headers in the registry, matching the console's PowerPC
/// heritage.
///
/// | Offset | Field | Type | Notes |
/// |---|---|---|---|
/// | 0x0 | Magic | u8\[4\] | `XEX2` |
/// | 0x4 | Module flags | u32 (BE) | See [`XexModuleFlags`] |
/// | 0x8 | Header size | u32 (BE) | |
/// | 0x10 | Image size | u32 (BE) | |
pub struct Xex;

impl Xex {
    /// Unique identifier that tells us if we're reading an XEX2 executable.
    pub const MAGIC: [u8; 4] = *b"XEX2";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Xex(Xex2 {
            module_flags: XexModuleFlags::from_bits_retain(reader.u32_at(4, Endian::Big)),
            header_size: reader.u32_at(8, Endian::Big),
            image_size: reader.u32_at(0x10, Endian::Big),
        }))
    }
}

/// Adds support for N-Gage installer images. This struct is stateless, and is merely a namespace.
///
/// Symbian E32 images open with three little-endian UIDs; UID1 is fixed per file kind and is the
/// gate here. UID2 narrows the image type and UID3 names the application, so all three are worth
/// reporting.
pub struct Nge;

impl Nge {
    /// Symbian OS UID1 for executable images.
    pub const UID1: u32 = 0x1000_0419;
    /// UID1 as it appears on disk.
    pub const MAGIC: [u8; 4] = Self::UID1.to_le_bytes();

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        Some(Payload::Nge(SymbianImage {
            uid1: reader.u32_at(0, Endian::Little),
            uid2: reader.u32_at(4, Endian::Little),
            uid3: reader.u32_at(8, Endian::Little),
        }))
    }
}
