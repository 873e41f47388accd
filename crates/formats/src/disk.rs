//! Support for size-classified floppy image families.
//!
//! None of these containers carry a header. A dump is a bare sector stream, and the only signal
//! is its exact length, so each family lists the lengths it ships in together with the geometry
//! each length implies. Two families claiming the same length is resolved by registry order.

use cartouche_core::prelude::*;

use crate::descriptor::SizeRule;

/// Shorthand for a geometry rule; keeps the tables readable.
const fn rule(
    size: usize,
    tracks: u16,
    sides: u8,
    sectors: u16,
    sector_size: u32,
    double_density: bool,
) -> SizeRule {
    SizeRule {
        size,
        payload: Payload::Disk(DiskGeometry { tracks, sides, sectors, sector_size, double_density }),
    }
}

/// Adds support for MITS Altair and IMSAI 8-inch disk images. This struct is stateless, and is
/// merely a namespace.
///
/// The family spans five well-known dump sizes, from the 35-track minidisk to the double-sided
/// double-density 8-inch format. Lengths between the listed sizes do occur in the wild (partial
/// dumps, appended metadata), so this family also guesses a geometry for those instead of
/// dropping them on the floor.
pub struct Altair;

impl Altair {
    pub const RULES: [SizeRule; 5] = [
        rule(76_720, 35, 1, 16, 137, false),
        rule(256_256, 77, 1, 26, 128, false),
        rule(337_568, 77, 1, 32, 137, false),
        rule(512_512, 77, 1, 26, 256, true),
        rule(1_025_024, 77, 2, 26, 256, true),
    ];

    /// Best-guess geometry for an off-table length. Anything at or past the double-density
    /// threshold reads as the DD layout, everything below as the standard 8-inch SD disk.
    pub(crate) fn derive(length: usize) -> DiskGeometry {
        if length >= 512_512 {
            DiskGeometry { tracks: 77, sides: 1, sectors: 26, sector_size: 256, double_density: true }
        } else {
            DiskGeometry { tracks: 77, sides: 1, sectors: 26, sector_size: 128, double_density: false }
        }
    }
}

/// Adds support for Agat disk images. This struct is stateless, and is merely a namespace.
///
/// The Soviet Apple II derivative used 140K 5.25-inch disks and an 840K MFM format on the later
/// models.
pub struct Agat;

impl Agat {
    pub const RULES: [SizeRule; 2] =
        [rule(143_360, 35, 1, 16, 256, false), rule(860_160, 80, 2, 21, 256, true)];
}

/// Adds support for Triumph-Adler Alphatronic PC disk images. This struct is stateless, and is
/// merely a namespace.
pub struct Alphatronic;

impl Alphatronic {
    pub const RULES: [SizeRule; 2] =
        [rule(163_840, 40, 1, 16, 256, true), rule(327_680, 40, 2, 16, 256, true)];
}

/// Adds support for Casio FP-1100 disk images. This struct is stateless, and is merely a
/// namespace.
pub struct CasioFp;

impl CasioFp {
    pub const RULES: [SizeRule; 2] =
        [rule(327_680, 40, 2, 16, 256, true), rule(655_360, 80, 2, 16, 256, true)];
}

/// Adds support for UniFLEX disk images. This struct is stateless, and is merely a namespace.
///
/// UniFLEX ran on 77-track 8-inch drives; the two sizes are the single- and double-sided layouts
/// of the same 16-sector format.
pub struct Uniflex;

impl Uniflex {
    pub const RULES: [SizeRule; 2] =
        [rule(315_392, 77, 1, 16, 256, true), rule(630_784, 77, 2, 16, 256, true)];
}

/// Adds support for E-mu sampler disk images. This struct is stateless, and is merely a
/// namespace.
///
/// The Emulator line stored samples on 800K and 1600K 3.5-inch disks with 512-byte sectors.
pub struct Emu;

impl Emu {
    pub const RULES: [SizeRule; 2] =
        [rule(819_200, 80, 2, 10, 512, true), rule(1_638_400, 80, 2, 20, 512, true)];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(entry: &SizeRule) -> DiskGeometry {
        match entry.payload {
            Payload::Disk(geometry) => geometry,
            _ => unreachable!(),
        }
    }

    #[test]
    fn every_rule_length_matches_its_geometry() {
        let families: [&[SizeRule]; 6] = [
            &Altair::RULES,
            &Agat::RULES,
            &Alphatronic::RULES,
            &CasioFp::RULES,
            &Uniflex::RULES,
            &Emu::RULES,
        ];
        for rules in families {
            for entry in rules {
                let geometry = geometry(entry);
                let implied = usize::from(geometry.tracks)
                    * usize::from(geometry.sides)
                    * usize::from(geometry.sectors)
                    * geometry.sector_size as usize;
                assert_eq!(implied, entry.size);
            }
        }
    }

    #[test]
    fn rule_tables_are_sorted_ascending() {
        for rules in [&Altair::RULES[..], &Agat::RULES[..], &Emu::RULES[..]] {
            assert!(rules.windows(2).all(|pair| pair[0].size < pair[1].size));
        }
    }

    #[test]
    fn altair_guesses_around_the_density_threshold() {
        assert!(!Altair::derive(300_000).double_density);
        assert!(Altair::derive(512_512).double_density);
        assert!(Altair::derive(900_000).double_density);
    }
}
