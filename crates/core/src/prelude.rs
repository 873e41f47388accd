//! Convenient re-exports of commonly used data types, designed to make crate usage painless.
//!
//! Everything a probe implementation touches lives here: the byte primitives, the envelope, and
//! every payload record.
//!
//! The contents of this module can be used by including the following in any module:
//! ```
//! use cartouche_core::prelude::*;
//! ```

#[doc(inline)]
pub use crate::crc::crc16_ibm;
#[doc(inline)]
pub use crate::data::{ByteView, DataError, Endian};
#[doc(inline)]
pub use crate::report::{
    AyTune, BpsFooter, Category, CtRaw, CueSheet, DiskGeometry, DolphinMovie, FceuMovie, FormatId,
    LaserDisc, LhaEntry, MediaDescriptor, Payload, Playlist, Report, RiffAvi, RomImage, SaveRam,
    Shockwave, SwfCompression, SymbianImage, UltraSound, Xex2, XexModuleFlags,
};

/// Includes [`util::format_size`], which allows for pretty-print of various lengths.
#[cfg(feature = "std")]
pub mod util {
    #[doc(inline)]
    pub use crate::util::format_size;
}
