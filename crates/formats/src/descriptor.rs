//! Static descriptors: everything a probe needs to know about one format.
//!
//! The registry is a table of these. A descriptor carries the structural gates (magic literals,
//! size rules, text sentinel), the length bounds, presentation metadata, and a pointer to the
//! format's field extractor. Adding a format means adding one payload record and one row; the
//! strategies themselves never change.

use cartouche_core::prelude::*;

use crate::strategy::FieldReader;

/// Which of the probe strategies drives a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProbeKind {
    /// One or more byte literals at fixed offsets; all must match.
    FixedMagic,
    /// Several alternative literals; any single match recognises the buffer.
    AltMagic,
    /// No magic at all; the buffer length is looked up in a rule table.
    SizeSet,
    /// A magic gate followed by a fixed field map.
    StructuredHeader,
    /// A magic gate plus a field group anchored at the end of the buffer.
    TrailingChecksum,
    /// A textual sentinel or first-line rule, tolerant of a UTF-8 BOM.
    TextHeader,
}

/// A byte literal expected at a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct Magic {
    pub offset: usize,
    pub bytes: &'static [u8],
}

/// One exact-length rule of a size-set probe, with the payload that length implies.
#[derive(Debug, Clone, Copy)]
pub struct SizeRule {
    pub size: usize,
    pub payload: Payload,
}

/// What a size-set probe does with an in-bounds length that matches no exact rule.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum SizeFallback {
    /// The family only ships at its listed sizes; anything else is unrecognised.
    Reject,
    /// Bounds-only ROM families: any in-range length is a valid dump of that length.
    RomOfLength,
    /// Bounds-only save families: any in-range length is a valid dump, flagged for power of two.
    SaveOfLength,
    /// Derive a best-guess geometry from the length; recognised but never valid.
    Derive(fn(usize) -> DiskGeometry),
}

/// Extracts a format's payload through a truncation-tracking reader.
///
/// Returning `None` refuses the buffer outright, for probes whose gate is a parse rule rather
/// than a fixed literal.
pub type ParseFn = fn(&mut FieldReader<'_>) -> Option<Payload>;

/// A single registered format.
pub struct Descriptor {
    pub id: FormatId,
    /// Human-readable name, e.g. `"Beat patch"`.
    pub name: &'static str,
    pub category: Category,
    /// Typical file extensions, as hints for callers; never consulted by the probes.
    pub extensions: &'static [&'static str],
    /// Media type hint, `application/octet-stream` where nothing better is registered.
    pub media_type: &'static str,
    pub kind: ProbeKind,
    /// Smallest buffer the probe will look at. Anything shorter is refused before the gate.
    pub min_size: usize,
    /// Inclusive ceiling; a gated match above it is recognised but not valid.
    pub max_size: Option<usize>,
    /// Byte literals gating recognition. Any-of for [`ProbeKind::AltMagic`], all-of otherwise.
    pub magic: &'static [Magic],
    /// When set, a magic mismatch informs the payload instead of refusing the buffer.
    pub advisory_magic: bool,
    /// Sentinel prefix for text probes, checked after an optional BOM.
    pub text_prefix: Option<&'static [u8]>,
    /// Length of the field group anchored at `length - trailing_len`.
    pub trailing_len: usize,
    /// Exact-length rules for size-set probes, sorted ascending.
    pub size_rules: &'static [SizeRule],
    /// Policy for in-bounds lengths with no exact rule.
    pub fallback: SizeFallback,
    /// Field extractor; `None` for size-set rows, whose payloads come from the rule table.
    pub parse: Option<ParseFn>,
}

impl Descriptor {
    /// Number of gating magic bytes, the registry's measure of specificity. All-of gates count
    /// every literal; an any-of gate only guarantees its longest alternative; advisory magic
    /// recognises nothing by itself and counts as zero.
    #[must_use]
    pub fn magic_len(&self) -> usize {
        if self.advisory_magic {
            return 0;
        }
        match self.kind {
            ProbeKind::AltMagic => {
                self.magic.iter().map(|magic| magic.bytes.len()).max().unwrap_or(0)
            }
            _ => self.magic.iter().map(|magic| magic.bytes.len()).sum(),
        }
    }

    /// Whether `length` does not exceed the descriptor's ceiling.
    #[inline]
    #[must_use]
    pub fn within_max(&self, length: usize) -> bool {
        self.max_size.map_or(true, |max| length <= max)
    }
}
