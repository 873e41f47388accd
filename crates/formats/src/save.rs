//! Support for battery save dumps.
//!
//! Save RAM is featureless by nature, so these probes work from size alone. The Super Famicom
//! family ships at three exact chip sizes; the generic `.srm` family accepts any plausible length
//! and flags whether it is a power of two, since real chips always are.

use cartouche_core::prelude::*;

use crate::descriptor::SizeRule;

const fn chip(size: usize) -> SizeRule {
    //The listed sizes are all powers of two, so the flag is set unconditionally
    SizeRule { size, payload: Payload::Save(SaveRam { save_size: size as u64, power_of_two: true }) }
}

/// Adds support for Super Famicom saves. This struct is stateless, and is merely a namespace.
pub struct Sfm;

impl Sfm {
    /// The three SRAM chip sizes cartridges actually used: 16 kbit, 64 kbit, and 256 kbit.
    pub const RULES: [SizeRule; 3] = [chip(2048), chip(8192), chip(32_768)];
}
