//! The result envelope shared by every probe.
//!
//! Identification never throws. Whatever the input, probing produces a [`Report`] whose two flags
//! say how far the buffer got: `recognised` means the structural gate (magic, size table, or text
//! sentinel) matched, `valid` means every remaining check also held. Extracted fields travel in a
//! [`Payload`] tagged by [`FormatId`], and a refused buffer always carries the zeroed payload for
//! its tag, so callers can consume fields without branching on failure first.

use bitflags::bitflags;
use num_enum::TryFromPrimitive;

/// Identifies a registered format, or [`Unknown`](FormatId::Unknown) for the synthetic envelope
/// returned when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatId {
    /// Beat patch
    Bps,
    /// RIFF AVI container
    Avi,
    /// ZX Spectrum AY music archive
    Ay,
    /// CT Raw flux dump
    Ctr,
    /// Dolphin TAS movie
    Dtm,
    /// FCEU movie
    Fcm,
    /// Alcohol 120% media descriptor
    Mds,
    /// Xbox 360 executable
    Xex,
    /// Ultra64 sound format
    Usf,
    /// Shockwave Flash movie
    Swf,
    /// N-Gage installer image
    Nge,
    /// LHA archive
    Lzh,
    /// Altair/IMSAI 8-inch disk image
    Altair,
    /// Agat disk image
    Agat,
    /// Alphatronic PC disk image
    Alphatronic,
    /// Casio FP-1100 disk image
    CasioFp,
    /// UniFLEX disk image
    Uniflex,
    /// E-mu sampler disk image
    Emu,
    /// Atari 5200 ROM image
    A52,
    /// CreatiVision ROM image
    Cv,
    /// Intellivision ROM image
    Int,
    /// Midway arcade ROM image
    Mid,
    /// Sega system ROM image
    Ssy,
    /// Super Famicom save
    Sfm,
    /// Battery-backed save RAM
    Srm,
    /// LaserActive disc image
    Lda,
    /// M3U playlist
    M3u,
    /// GD-ROM cue sheet
    Gdi,
    /// No registered format matched
    Unknown,
}

impl FormatId {
    /// Short lowercase identifier, as accepted by registry lookup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bps => "bps",
            Self::Avi => "avi",
            Self::Ay => "ay",
            Self::Ctr => "ctr",
            Self::Dtm => "dtm",
            Self::Fcm => "fcm",
            Self::Mds => "mds",
            Self::Xex => "xex",
            Self::Usf => "usf",
            Self::Swf => "swf",
            Self::Nge => "nge",
            Self::Lzh => "lzh",
            Self::Altair => "altair",
            Self::Agat => "agat",
            Self::Alphatronic => "alphatronic",
            Self::CasioFp => "casio_fp",
            Self::Uniflex => "uniflex",
            Self::Emu => "emu",
            Self::A52 => "a52",
            Self::Cv => "cv",
            Self::Int => "int",
            Self::Mid => "mid",
            Self::Ssy => "ssy",
            Self::Sfm => "sfm",
            Self::Srm => "srm",
            Self::Lda => "lda",
            Self::M3u => "m3u",
            Self::Gdi => "gdi",
            Self::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for FormatId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad grouping for registry listings. Purely descriptive, never consulted by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Category {
    Rom,
    Disk,
    Movie,
    Archive,
    Media,
    Audio,
    Playlist,
    Sidecar,
    Executable,
    Save,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rom => "rom",
            Self::Disk => "disk",
            Self::Movie => "movie",
            Self::Archive => "archive",
            Self::Media => "media",
            Self::Audio => "audio",
            Self::Playlist => "playlist",
            Self::Sidecar => "sidecar",
            Self::Executable => "executable",
            Self::Save => "save",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Module flags stored big-endian at offset 4 of an XEX2 header.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct XexModuleFlags: u32 {
        const TITLE_MODULE = 1 << 0;
        const EXPORTS_TO_TITLE = 1 << 1;
        const SYSTEM_DEBUGGER = 1 << 2;
        const DLL_MODULE = 1 << 3;
        const MODULE_PATCH = 1 << 4;
        const PATCH_FULL = 1 << 5;
        const PATCH_DELTA = 1 << 6;
        const USER_MODE = 1 << 7;
    }
}

/// Compression scheme of a Shockwave Flash movie, taken from the first signature byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, TryFromPrimitive)]
#[repr(u8)]
pub enum SwfCompression {
    /// `FWS`, stored uncompressed.
    #[default]
    None = b'F',
    /// `CWS`, zlib-compressed past the first 8 bytes.
    Zlib = b'C',
    /// `ZWS`, LZMA-compressed past the first 8 bytes.
    Lzma = b'Z',
}

impl core::fmt::Display for SwfCompression {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::None => "uncompressed",
            Self::Zlib => "zlib",
            Self::Lzma => "lzma",
        })
    }
}

/// Trailing fields of a Beat patch. The last 12 bytes hold three CRC32s, reported verbatim;
/// checking them against actual data is the caller's business.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BpsFooter {
    pub source_crc: u32,
    pub target_crc: u32,
    pub patch_crc: u32,
}

/// RIFF AVI container header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RiffAvi {
    /// Declared RIFF chunk size, which trails the real file size by 8 bytes.
    pub file_size: u32,
}

/// ZX Spectrum AY music archive header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AyTune {
    pub file_version: u8,
    pub player_version: u8,
    /// Stored on disk as songs-minus-one; reported here as the actual count.
    pub num_songs: u16,
    pub first_song: u8,
}

/// CT Raw flux dump header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CtRaw {
    pub version: u16,
    pub track: u8,
    pub side: u8,
    pub data_size: u32,
}

/// Dolphin TAS movie header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DolphinMovie {
    /// Six-character game ID, e.g. `GALE01`.
    pub game_id: [u8; 6],
    pub wii_game: bool,
    /// Bitmask of connected controllers.
    pub controllers: u8,
    pub from_savestate: bool,
}

/// FCEU movie header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FceuMovie {
    pub version: u32,
    pub frame_count: u32,
    pub rerecord_count: u32,
}

/// Alcohol 120% media descriptor header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MediaDescriptor {
    pub version_major: u8,
    pub version_minor: u8,
    pub medium_type: u16,
    pub session_count: u16,
}

/// Xbox 360 executable header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Xex2 {
    pub module_flags: XexModuleFlags,
    pub header_size: u32,
    pub image_size: u32,
}

/// Ultra64 sound format header (PSF type 0x21).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UltraSound {
    pub reserved_size: u32,
    pub compressed_size: u32,
}

/// Shockwave Flash movie header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Shockwave {
    pub compression: SwfCompression,
    pub version: u8,
    /// Declared length of the movie once decompressed.
    pub file_length: u32,
}

/// Symbian E32 image UIDs, the gate N-Gage installers are recognised by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SymbianImage {
    pub uid1: u32,
    pub uid2: u32,
    pub uid3: u32,
}

/// First entry header of an LHA/LZH archive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LhaEntry {
    /// Compression method string, e.g. `-lh5-`.
    pub method: [u8; 5],
    pub packed_size: u32,
    pub original_size: u32,
}

/// A bare cartridge ROM dump, classified by size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RomImage {
    pub rom_size: u64,
    /// Set when the dump opens with a known dumper-tool prefix.
    pub has_header: bool,
}

/// Floppy image geometry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiskGeometry {
    pub tracks: u16,
    pub sides: u8,
    pub sectors: u16,
    pub sector_size: u32,
    pub double_density: bool,
}

/// A battery save dump.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveRam {
    pub save_size: u64,
    /// Real SRAM chips come in power-of-two sizes; an odd length suggests a padded or cut dump.
    pub power_of_two: bool,
}

/// LaserActive disc image.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LaserDisc {
    /// Set when the image carries the `SEGA` marker of a Mega LD disc.
    pub mega_ld: bool,
}

/// M3U playlist summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Playlist {
    /// Whether the file opens with the `#EXTM3U` sentinel.
    pub extended: bool,
    pub entry_count: u32,
}

/// GD-ROM cue sheet, parsed no deeper than the track count on line one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CueSheet {
    pub track_count: u8,
}

/// Format-tagged structured data extracted by a probe.
///
/// Families that share a shape share a variant: the size-classified ROM systems all report
/// [`RomImage`], the floppy families [`DiskGeometry`], the save dumps [`SaveRam`]. The envelope's
/// [`FormatId`] still names the exact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Payload {
    /// No probe recognised the buffer.
    Unknown,
    Bps(BpsFooter),
    Avi(RiffAvi),
    Ay(AyTune),
    Ctr(CtRaw),
    Dtm(DolphinMovie),
    Fcm(FceuMovie),
    Mds(MediaDescriptor),
    Xex(Xex2),
    Usf(UltraSound),
    Swf(Shockwave),
    Nge(SymbianImage),
    Lzh(LhaEntry),
    Rom(RomImage),
    Disk(DiskGeometry),
    Save(SaveRam),
    Lda(LaserDisc),
    M3u(Playlist),
    Gdi(CueSheet),
}

impl Payload {
    /// The all-zero payload for a given tag, carried by every refused envelope.
    #[must_use]
    pub fn zeroed(format: FormatId) -> Self {
        match format {
            FormatId::Bps => Self::Bps(BpsFooter::default()),
            FormatId::Avi => Self::Avi(RiffAvi::default()),
            FormatId::Ay => Self::Ay(AyTune::default()),
            FormatId::Ctr => Self::Ctr(CtRaw::default()),
            FormatId::Dtm => Self::Dtm(DolphinMovie::default()),
            FormatId::Fcm => Self::Fcm(FceuMovie::default()),
            FormatId::Mds => Self::Mds(MediaDescriptor::default()),
            FormatId::Xex => Self::Xex(Xex2::default()),
            FormatId::Usf => Self::Usf(UltraSound::default()),
            FormatId::Swf => Self::Swf(Shockwave::default()),
            FormatId::Nge => Self::Nge(SymbianImage::default()),
            FormatId::Lzh => Self::Lzh(LhaEntry::default()),
            FormatId::A52 | FormatId::Cv | FormatId::Int | FormatId::Mid | FormatId::Ssy => {
                Self::Rom(RomImage::default())
            }
            FormatId::Altair
            | FormatId::Agat
            | FormatId::Alphatronic
            | FormatId::CasioFp
            | FormatId::Uniflex
            | FormatId::Emu => Self::Disk(DiskGeometry::default()),
            FormatId::Sfm | FormatId::Srm => Self::Save(SaveRam::default()),
            FormatId::Lda => Self::Lda(LaserDisc::default()),
            FormatId::M3u => Self::M3u(Playlist::default()),
            FormatId::Gdi => Self::Gdi(CueSheet::default()),
            FormatId::Unknown => Self::Unknown,
        }
    }
}

/// The uniform envelope produced by every probe of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// The probe's structural gate matched.
    pub recognised: bool,
    /// Every check the format defines held. Implies `recognised`.
    pub valid: bool,
    /// Echo of the probed buffer's length.
    pub source_size: usize,
    /// Which descriptor produced this envelope.
    pub format: FormatId,
    /// Extracted fields, zeroed whenever `recognised` is false.
    pub payload: Payload,
}

impl Report {
    /// The synthetic envelope for a buffer no probe recognised.
    #[must_use]
    pub fn unknown(source_size: usize) -> Self {
        Self {
            recognised: false,
            valid: false,
            source_size,
            format: FormatId::Unknown,
            payload: Payload::Unknown,
        }
    }

    /// The envelope for a probe that refused a buffer at its gate.
    #[must_use]
    pub fn refused(format: FormatId, source_size: usize) -> Self {
        Self {
            recognised: false,
            valid: false,
            source_size,
            format,
            payload: Payload::zeroed(format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_payload_matches_its_tag() {
        assert_eq!(Payload::zeroed(FormatId::Bps), Payload::Bps(BpsFooter::default()));
        assert_eq!(Payload::zeroed(FormatId::Cv), Payload::Rom(RomImage::default()));
        assert_eq!(Payload::zeroed(FormatId::Agat), Payload::Disk(DiskGeometry::default()));
        assert_eq!(Payload::zeroed(FormatId::Unknown), Payload::Unknown);
    }

    #[test]
    fn refused_envelopes_are_inert() {
        let report = Report::refused(FormatId::Swf, 123);
        assert!(!report.recognised);
        assert!(!report.valid);
        assert_eq!(report.source_size, 123);
        assert_eq!(report.payload, Payload::Swf(Shockwave::default()));
    }

    #[test]
    fn swf_compression_round_trips_signature_bytes() {
        assert_eq!(SwfCompression::try_from(b'F'), Ok(SwfCompression::None));
        assert_eq!(SwfCompression::try_from(b'C'), Ok(SwfCompression::Zlib));
        assert_eq!(SwfCompression::try_from(b'Z'), Ok(SwfCompression::Lzma));
        assert!(SwfCompression::try_from(b'X').is_err());
    }

    #[test]
    fn format_names_are_stable() {
        assert_eq!(FormatId::CasioFp.as_str(), "casio_fp");
        assert_eq!(FormatId::Unknown.to_string(), "unknown");
    }
}
