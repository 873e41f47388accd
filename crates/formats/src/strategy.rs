//! The probe strategies: the routines that turn a descriptor plus a buffer into a [`Report`].
//!
//! Structure failures stay in-band. A probe never returns an error: a buffer that fails the gate
//! comes back `recognised = false` with a zeroed payload, one that passes the gate but fails a
//! later check comes back `recognised = true, valid = false`. [`FieldReader`] centralises the
//! truncation rule, so the per-format extractors stay straight-line field maps.

use cartouche_core::prelude::*;

use crate::descriptor::{Descriptor, Magic, ProbeKind, SizeFallback};

/// UTF-8 byte-order mark, tolerated at the front of text formats.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Returns the buffer with a leading UTF-8 BOM removed, if one is present.
#[inline]
#[must_use]
pub fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(&UTF8_BOM).unwrap_or(data)
}

/// Bounded field access that records truncation instead of failing.
///
/// Wraps [`ByteView`]: reads inside the buffer behave normally, reads past the end yield zero and
/// set a flag the strategy later folds into `valid`. A short header therefore still produces an
/// envelope with every in-range field intact and the rest zeroed.
pub struct FieldReader<'a> {
    view: ByteView<'a>,
    truncated: bool,
}

impl<'a> FieldReader<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { view: ByteView::new(data), truncated: false }
    }

    /// Length of the underlying buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.view.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// The whole underlying buffer, for textual scans.
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.view.as_slice()
    }

    /// True once any read has gone past the end of the buffer.
    #[inline]
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn u8_at(&mut self, offset: usize) -> u8 {
        let value = self.view.read_u8(offset);
        self.absorb(value, 0)
    }

    pub fn u16_at(&mut self, offset: usize, endian: Endian) -> u16 {
        let value = self.view.read_u16(offset, endian);
        self.absorb(value, 0)
    }

    pub fn u32_at(&mut self, offset: usize, endian: Endian) -> u32 {
        let value = self.view.read_u32(offset, endian);
        self.absorb(value, 0)
    }

    pub fn bytes_at<const N: usize>(&mut self, offset: usize) -> [u8; N] {
        let value = self.view.read_exact::<N>(offset);
        self.absorb(value, [0u8; N])
    }

    /// Literal comparison that never marks truncation; out of range is simply no match.
    #[must_use]
    pub fn matches_at(&self, offset: usize, literal: &[u8]) -> bool {
        self.view.matches_at(offset, literal)
    }

    fn absorb<T>(&mut self, value: Result<T, DataError>, zero: T) -> T {
        match value {
            Ok(value) => value,
            Err(_) => {
                self.truncated = true;
                zero
            }
        }
    }
}

/// Runs one descriptor's probe over a buffer. This is the single entry point dispatch uses.
#[must_use]
pub fn probe(data: &[u8], desc: &Descriptor) -> Report {
    if data.len() < desc.min_size {
        return Report::refused(desc.id, data.len());
    }

    match desc.kind {
        ProbeKind::FixedMagic | ProbeKind::StructuredHeader => header_probe(data, desc),
        ProbeKind::AltMagic => alt_magic_probe(data, desc),
        ProbeKind::SizeSet => size_set_probe(data, desc),
        ProbeKind::TrailingChecksum => trailing_probe(data, desc),
        ProbeKind::TextHeader => text_probe(data, desc),
    }
}

fn matches(data: &[u8], magic: &Magic) -> bool {
    ByteView::new(data).matches_at(magic.offset, magic.bytes)
}

fn matches_all(data: &[u8], magic: &[Magic]) -> bool {
    magic.iter().all(|entry| matches(data, entry))
}

/// Fixed-magic and structured-header probes: gate on every literal, then decode the field map.
fn header_probe(data: &[u8], desc: &Descriptor) -> Report {
    if !desc.advisory_magic && !matches_all(data, desc.magic) {
        return Report::refused(desc.id, data.len());
    }
    finish(data, desc)
}

/// Alt-magic probes: any one literal recognises the buffer.
fn alt_magic_probe(data: &[u8], desc: &Descriptor) -> Report {
    if !desc.magic.iter().any(|entry| matches(data, entry)) {
        return Report::refused(desc.id, data.len());
    }
    finish(data, desc)
}

/// Trailing-field probes: gate at the front, fields anchored at the end.
fn trailing_probe(data: &[u8], desc: &Descriptor) -> Report {
    if !matches_all(data, desc.magic) {
        return Report::refused(desc.id, data.len());
    }

    //Magic matched but there is no room for the trailing group: recognised, not valid
    if data.len() < desc.min_size + desc.trailing_len {
        return Report {
            recognised: true,
            valid: false,
            source_size: data.len(),
            format: desc.id,
            payload: Payload::zeroed(desc.id),
        };
    }

    finish(data, desc)
}

/// Size-set probes: look the length up in the rule table, else apply the fallback policy.
fn size_set_probe(data: &[u8], desc: &Descriptor) -> Report {
    let length = data.len();
    if !desc.within_max(length) {
        return Report::refused(desc.id, length);
    }

    for rule in desc.size_rules {
        if rule.size == length {
            return Report {
                recognised: true,
                valid: true,
                source_size: length,
                format: desc.id,
                payload: rule.payload,
            };
        }
    }

    let (valid, payload) = match desc.fallback {
        SizeFallback::Reject => return Report::refused(desc.id, length),
        SizeFallback::RomOfLength => {
            (true, Payload::Rom(RomImage { rom_size: length as u64, has_header: false }))
        }
        SizeFallback::SaveOfLength => (
            true,
            Payload::Save(SaveRam {
                save_size: length as u64,
                power_of_two: length.is_power_of_two(),
            }),
        ),
        SizeFallback::Derive(derive) => (false, Payload::Disk(derive(length))),
    };

    Report { recognised: true, valid, source_size: length, format: desc.id, payload }
}

/// Text probes: skip an optional BOM, check the sentinel if there is one, then parse line one.
fn text_probe(data: &[u8], desc: &Descriptor) -> Report {
    if let Some(prefix) = desc.text_prefix {
        if !strip_bom(data).starts_with(prefix) {
            return Report::refused(desc.id, data.len());
        }
    }
    finish(data, desc)
}

/// Common tail: run the field extractor, fold truncation and the size ceiling into `valid`.
fn finish(data: &[u8], desc: &Descriptor) -> Report {
    let mut reader = FieldReader::new(data);
    let payload = match desc.parse {
        Some(parse) => match parse(&mut reader) {
            Some(payload) => payload,
            None => return Report::refused(desc.id, data.len()),
        },
        None => Payload::zeroed(desc.id),
    };

    Report {
        recognised: true,
        valid: !reader.truncated() && desc.within_max(data.len()),
        source_size: data.len(),
        format: desc.id,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_reader_zeroes_after_the_end() {
        let mut reader = FieldReader::new(&[0x01, 0x02, 0x03]);
        assert_eq!(reader.u16_at(1, Endian::Little), 0x0302);
        assert!(!reader.truncated());
        assert_eq!(reader.u32_at(1, Endian::Little), 0);
        assert!(reader.truncated());
    }

    #[test]
    fn field_reader_truncation_is_sticky() {
        let mut reader = FieldReader::new(&[0xAA; 4]);
        let _ = reader.u32_at(2, Endian::Big);
        assert!(reader.truncated());
        assert_eq!(reader.u8_at(0), 0xAA);
        assert!(reader.truncated());
    }

    #[test]
    fn array_reads_zero_whole_fields() {
        let mut reader = FieldReader::new(b"DTM\x1AGAL");
        assert_eq!(reader.bytes_at::<6>(4), [0; 6]);
        assert!(reader.truncated());
    }

    #[test]
    fn bom_stripping() {
        assert_eq!(strip_bom(b"\xEF\xBB\xBF#EXTM3U"), b"#EXTM3U");
        assert_eq!(strip_bom(b"#EXTM3U"), b"#EXTM3U");
        //A partial BOM is payload, not a BOM
        assert_eq!(strip_bom(b"\xEF\xBB"), b"\xEF\xBB");
    }
}
