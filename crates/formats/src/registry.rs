//! The format registry: one static row per format, in dispatch order.
//!
//! Order is part of the contract. Magic-gated probes come first, longest magic first, so an
//! unambiguous signature always beats a length coincidence. Size-classified families follow,
//! descending in specificity: exact geometry tables, then exact chip sizes, then bare range
//! checks. Text probes run last. Formats whose magic is advisory (Intellivision, LaserActive)
//! recognise nothing by their bytes alone and sit with the size families.
//!
//! The registry is immutable and lock-free; probing shares it across threads freely.

use cartouche_core::prelude::*;
use snafu::prelude::*;

#[cfg(not(feature = "std"))]
use crate::no_std::*;

use crate::archive::Lzh;
use crate::audio::{Ay, Usf};
use crate::descriptor::{Descriptor, Magic, ProbeKind, SizeFallback};
use crate::disc::{Ctr, Lda, Mds};
use crate::disk::{Agat, Alphatronic, Altair, CasioFp, Emu, Uniflex};
use crate::executable::{Nge, Xex};
use crate::media::{Avi, Swf};
use crate::movie::{Dtm, Fcm};
use crate::patch::Bps;
use crate::playlist::{Gdi, M3u};
use crate::rom::Int;
use crate::save::Sfm;

/// Raised when a caller names a format the registry does not know.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("No format registered under {name:?}"))]
    UnknownName { name: String },
}

const OCTET_STREAM: &str = "application/octet-stream";

pub static REGISTRY: [Descriptor; 28] = [
    Descriptor {
        id: FormatId::Mds,
        name: "Alcohol 120% media descriptor",
        category: Category::Sidecar,
        extensions: &["mds"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::StructuredHeader,
        min_size: 16,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Mds::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Mds::parse),
    },
    Descriptor {
        id: FormatId::Avi,
        name: "RIFF AVI container",
        category: Category::Media,
        extensions: &["avi"],
        media_type: "video/x-msvideo",
        kind: ProbeKind::FixedMagic,
        min_size: 12,
        max_size: None,
        magic: &[
            Magic { offset: 0, bytes: &Avi::MAGIC },
            Magic { offset: 8, bytes: &Avi::FORM_TYPE },
        ],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Avi::parse),
    },
    Descriptor {
        id: FormatId::Ay,
        name: "ZX Spectrum AY music archive",
        category: Category::Audio,
        extensions: &["ay"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::FixedMagic,
        min_size: 20,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Ay::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Ay::parse),
    },
    Descriptor {
        id: FormatId::Ctr,
        name: "CT Raw flux dump",
        category: Category::Disk,
        extensions: &["ctr"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::StructuredHeader,
        min_size: 9,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Ctr::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Ctr::parse),
    },
    Descriptor {
        id: FormatId::Bps,
        name: "Beat patch",
        category: Category::Sidecar,
        extensions: &["bps"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::TrailingChecksum,
        min_size: 4,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Bps::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: Bps::TRAILING_LEN,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Bps::parse),
    },
    Descriptor {
        id: FormatId::Dtm,
        name: "Dolphin TAS movie",
        category: Category::Movie,
        extensions: &["dtm"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::StructuredHeader,
        min_size: Dtm::HEADER_SIZE,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Dtm::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Dtm::parse),
    },
    Descriptor {
        id: FormatId::Fcm,
        name: "FCEU movie",
        category: Category::Movie,
        extensions: &["fcm"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::FixedMagic,
        min_size: Fcm::HEADER_SIZE,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Fcm::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Fcm::parse),
    },
    Descriptor {
        id: FormatId::Xex,
        name: "Xbox 360 executable",
        category: Category::Executable,
        extensions: &["xex"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::StructuredHeader,
        min_size: 24,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Xex::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Xex::parse),
    },
    Descriptor {
        id: FormatId::Usf,
        name: "Ultra64 sound format",
        category: Category::Audio,
        extensions: &["usf", "miniusf"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::FixedMagic,
        min_size: 16,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Usf::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Usf::parse),
    },
    Descriptor {
        id: FormatId::Nge,
        name: "N-Gage installer image",
        category: Category::Executable,
        extensions: &["app"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::FixedMagic,
        min_size: 16,
        max_size: None,
        magic: &[Magic { offset: 0, bytes: &Nge::MAGIC }],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Nge::parse),
    },
    Descriptor {
        id: FormatId::Swf,
        name: "Shockwave Flash movie",
        category: Category::Media,
        extensions: &["swf"],
        media_type: "application/x-shockwave-flash",
        kind: ProbeKind::AltMagic,
        min_size: 8,
        max_size: None,
        magic: &[
            Magic { offset: 0, bytes: &Swf::MAGIC_NONE },
            Magic { offset: 0, bytes: &Swf::MAGIC_ZLIB },
            Magic { offset: 0, bytes: &Swf::MAGIC_LZMA },
        ],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Swf::parse),
    },
    Descriptor {
        id: FormatId::Lzh,
        name: "LHA archive",
        category: Category::Archive,
        extensions: &["lzh", "lha"],
        media_type: "application/x-lzh-compressed",
        kind: ProbeKind::FixedMagic,
        min_size: 21,
        max_size: None,
        magic: &[
            Magic { offset: 2, bytes: &Lzh::METHOD_PREFIX },
            Magic { offset: 6, bytes: &Lzh::METHOD_SUFFIX },
        ],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Lzh::parse),
    },
    Descriptor {
        id: FormatId::Altair,
        name: "Altair/IMSAI 8-inch disk image",
        category: Category::Disk,
        extensions: &["dsk"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 76_720,
        max_size: Some(1_025_024),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &Altair::RULES,
        fallback: SizeFallback::Derive(Altair::derive),
        parse: None,
    },
    Descriptor {
        id: FormatId::Agat,
        name: "Agat disk image",
        category: Category::Disk,
        extensions: &["dsk"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 143_360,
        max_size: Some(860_160),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &Agat::RULES,
        fallback: SizeFallback::Reject,
        parse: None,
    },
    Descriptor {
        id: FormatId::Alphatronic,
        name: "Alphatronic PC disk image",
        category: Category::Disk,
        extensions: &["dsk"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 163_840,
        max_size: Some(327_680),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &Alphatronic::RULES,
        fallback: SizeFallback::Reject,
        parse: None,
    },
    Descriptor {
        id: FormatId::CasioFp,
        name: "Casio FP-1100 disk image",
        category: Category::Disk,
        extensions: &["dsk"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 327_680,
        max_size: Some(655_360),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &CasioFp::RULES,
        fallback: SizeFallback::Reject,
        parse: None,
    },
    Descriptor {
        id: FormatId::Uniflex,
        name: "UniFLEX disk image",
        category: Category::Disk,
        extensions: &["dsk"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 315_392,
        max_size: Some(630_784),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &Uniflex::RULES,
        fallback: SizeFallback::Reject,
        parse: None,
    },
    Descriptor {
        id: FormatId::Emu,
        name: "E-mu sampler disk image",
        category: Category::Disk,
        extensions: &["img"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 819_200,
        max_size: Some(1_638_400),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &Emu::RULES,
        fallback: SizeFallback::Reject,
        parse: None,
    },
    Descriptor {
        id: FormatId::Sfm,
        name: "Super Famicom save",
        category: Category::Save,
        extensions: &["sfm", "srm"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 2048,
        max_size: Some(32_768),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &Sfm::RULES,
        fallback: SizeFallback::Reject,
        parse: None,
    },
    Descriptor {
        id: FormatId::A52,
        name: "Atari 5200 ROM image",
        category: Category::Rom,
        extensions: &["a52"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 4096,
        max_size: Some(32_768),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::RomOfLength,
        parse: None,
    },
    Descriptor {
        id: FormatId::Cv,
        name: "CreatiVision ROM image",
        category: Category::Rom,
        extensions: &["rom"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 2048,
        max_size: Some(32_768),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::RomOfLength,
        parse: None,
    },
    Descriptor {
        id: FormatId::Int,
        name: "Intellivision ROM image",
        category: Category::Rom,
        extensions: &["int"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::FixedMagic,
        min_size: 4096,
        max_size: Some(65_536),
        magic: &[Magic { offset: 0, bytes: &Int::HEADER_PREFIX }],
        advisory_magic: true,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Int::parse),
    },
    Descriptor {
        id: FormatId::Mid,
        name: "Midway arcade ROM image",
        category: Category::Rom,
        extensions: &["bin"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 1024,
        max_size: Some(16_384),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::RomOfLength,
        parse: None,
    },
    Descriptor {
        id: FormatId::Ssy,
        name: "Sega system ROM image",
        category: Category::Rom,
        extensions: &["bin"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 8192,
        max_size: Some(1_048_576),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::RomOfLength,
        parse: None,
    },
    Descriptor {
        id: FormatId::Srm,
        name: "Battery-backed save RAM",
        category: Category::Save,
        extensions: &["srm", "sav"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::SizeSet,
        min_size: 512,
        max_size: Some(131_072),
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::SaveOfLength,
        parse: None,
    },
    Descriptor {
        id: FormatId::Lda,
        name: "LaserActive disc image",
        category: Category::Disk,
        extensions: &["lda"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::StructuredHeader,
        min_size: 4096,
        max_size: None,
        magic: &[Magic { offset: Lda::SEGA_OFFSET, bytes: &Lda::SEGA }],
        advisory_magic: true,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Lda::parse),
    },
    Descriptor {
        id: FormatId::M3u,
        name: "M3U playlist",
        category: Category::Playlist,
        extensions: &["m3u", "m3u8"],
        media_type: "audio/x-mpegurl",
        kind: ProbeKind::TextHeader,
        min_size: 7,
        max_size: None,
        magic: &[],
        advisory_magic: false,
        text_prefix: Some(&M3u::SENTINEL),
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(M3u::parse),
    },
    Descriptor {
        id: FormatId::Gdi,
        name: "GD-ROM cue sheet",
        category: Category::Sidecar,
        extensions: &["gdi"],
        media_type: OCTET_STREAM,
        kind: ProbeKind::TextHeader,
        min_size: 3,
        max_size: None,
        magic: &[],
        advisory_magic: false,
        text_prefix: None,
        trailing_len: 0,
        size_rules: &[],
        fallback: SizeFallback::Reject,
        parse: Some(Gdi::parse),
    },
];

/// All descriptors in dispatch order.
#[must_use]
pub fn all() -> &'static [Descriptor] {
    &REGISTRY
}

/// Finds the descriptor for a format id, if one is registered.
#[must_use]
pub fn find(id: FormatId) -> Option<&'static Descriptor> {
    REGISTRY.iter().find(|desc| desc.id == id)
}

/// Resolves a format by its short name, case-insensitively. This is what drives hint parsing on
/// the command line.
///
/// # Errors
/// Returns [`UnknownName`](Error::UnknownName) if no descriptor carries the name.
pub fn lookup(name: &str) -> Result<&'static Descriptor, Error> {
    REGISTRY
        .iter()
        .find(|desc| desc.id.as_str().eq_ignore_ascii_case(name))
        .context(UnknownNameSnafu { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(desc: &Descriptor) -> u8 {
        match desc.kind {
            ProbeKind::TextHeader => 2,
            ProbeKind::SizeSet => 1,
            _ if desc.advisory_magic => 1,
            _ => 0,
        }
    }

    #[test]
    fn ids_are_unique() {
        for (index, desc) in REGISTRY.iter().enumerate() {
            assert!(
                REGISTRY[index + 1..].iter().all(|other| other.id != desc.id),
                "duplicate id {}",
                desc.id
            );
        }
    }

    #[test]
    fn dispatch_tiers_are_ordered() {
        let tiers: Vec<u8> = REGISTRY.iter().map(tier).collect();
        let mut sorted = tiers.clone();
        sorted.sort_unstable();
        assert_eq!(tiers, sorted);
    }

    #[test]
    fn magic_tier_descends_in_specificity() {
        let lengths: Vec<usize> =
            REGISTRY.iter().filter(|desc| tier(desc) == 0).map(Descriptor::magic_len).collect();
        assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]), "{lengths:?}");
    }

    #[test]
    fn rows_are_internally_consistent() {
        for desc in &REGISTRY {
            if let Some(max) = desc.max_size {
                assert!(desc.min_size <= max, "{}", desc.id);
            }
            for rule in desc.size_rules {
                assert!(rule.size >= desc.min_size, "{}", desc.id);
                assert!(desc.within_max(rule.size), "{}", desc.id);
            }
            //Gates must be decidable on any buffer that passes the length floor
            for magic in desc.magic {
                assert!(magic.offset + magic.bytes.len() <= desc.min_size, "{}", desc.id);
            }
            match desc.kind {
                ProbeKind::SizeSet => assert!(desc.parse.is_none(), "{}", desc.id),
                _ => assert!(desc.parse.is_some(), "{}", desc.id),
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("BPS").unwrap().id, FormatId::Bps);
        assert_eq!(lookup("casio_fp").unwrap().id, FormatId::CasioFp);
        assert!(lookup("tape").is_err());
    }

    #[test]
    fn find_covers_every_id_but_unknown() {
        for desc in &REGISTRY {
            assert_eq!(find(desc.id).map(|found| found.id), Some(desc.id));
        }
        assert!(find(FormatId::Unknown).is_none());
    }
}
