//! The identification façade: run the registry against a buffer and pick the winner.

use cartouche_core::prelude::*;

#[cfg(not(feature = "std"))]
use crate::no_std::*;

use crate::registry;
use crate::strategy;

/// Identifies a buffer.
///
/// With a hint naming a registered format, only that format's probe runs and its envelope comes
/// back as-is, refusals included. Without one, every probe runs in registry order: the first
/// valid envelope wins; failing that, the first recognised one; failing that, the synthetic
/// unknown envelope.
///
/// # Examples
/// ```
/// use cartouche_core::prelude::*;
/// use cartouche_formats::prelude::*;
///
/// let mut patch = vec![0u8; 32];
/// patch[..4].copy_from_slice(b"BPS1");
///
/// let report = identify(&patch, None);
/// assert_eq!(report.format, FormatId::Bps);
/// assert!(report.valid);
/// assert_eq!(report.source_size, 32);
/// ```
#[must_use]
pub fn identify(data: &[u8], hint: Option<FormatId>) -> Report {
    if let Some(id) = hint {
        if let Some(desc) = registry::find(id) {
            return strategy::probe(data, desc);
        }
    }

    let mut candidate: Option<Report> = None;
    for desc in registry::all() {
        let report = strategy::probe(data, desc);
        if report.valid {
            return report;
        }
        if report.recognised && candidate.is_none() {
            candidate = Some(report);
        }
    }

    candidate.unwrap_or_else(|| Report::unknown(data.len()))
}

/// Runs every registered probe and returns each verdict, refusals included. The diagnostic
/// companion to [`identify`], and the easy way to see what a length collision shadowed.
#[must_use]
pub fn identify_all(data: &[u8]) -> Vec<Report> {
    registry::all().iter().map(|desc| strategy::probe(data, desc)).collect()
}
