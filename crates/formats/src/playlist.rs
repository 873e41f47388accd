//! Support for text-first formats: M3U playlists and GD-ROM cue sheets.
//!
//! Both are probed as text with tolerance for a UTF-8 BOM, and both are parsed only as deep as
//! the first line demands. Text probes sit at the very end of the registry, so a binary format
//! that happens to start with printable bytes always wins first.

use cartouche_core::prelude::*;

use crate::strategy::{strip_bom, FieldReader};

/// Adds support for M3U playlists. This struct is stateless, and is merely a namespace.
///
/// Only extended playlists, the ones opening with `#EXTM3U`, are recognised; a bare list of
/// paths has no structure to gate on. Entries are counted per line terminator: a line counts
/// unless it is empty at end-of-buffer, a comment, or a bare carriage return.
pub struct M3u;

impl M3u {
    /// Sentinel that opens an extended playlist.
    pub const SENTINEL: [u8; 7] = *b"#EXTM3U";

    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        let body = strip_bom(reader.bytes());
        Some(Payload::M3u(Playlist { extended: true, entry_count: Self::count_entries(body) }))
    }

    /// Counts playlist entries. Every newline whose successor is neither a `#`, a carriage
    /// return, nor the end of the buffer starts one; blank lines therefore count, matching how
    /// this tally has always worked.
    fn count_entries(body: &[u8]) -> u32 {
        let mut count = 0;
        for (index, &byte) in body.iter().enumerate() {
            if byte == b'\n' {
                match body.get(index + 1) {
                    None | Some(&b'#') | Some(&b'\r') => {}
                    Some(_) => count += 1,
                }
            }
        }
        count
    }
}

/// Adds support for GD-ROM cue sheets. This struct is stateless, and is merely a namespace.
///
/// A `.gdi` file opens with its track count on a line of its own. The probe reads at most two
/// digits off that line and never looks past them, so `100` parses as 10; counts outside 1..=99
/// refuse the buffer.
pub struct Gdi;

impl Gdi {
    pub(crate) fn parse(reader: &mut FieldReader<'_>) -> Option<Payload> {
        let body = strip_bom(reader.bytes());
        let track_count = Self::read_track_count(body)?;
        Some(Payload::Gdi(CueSheet { track_count }))
    }

    /// Reads the 1- or 2-digit track count off line one.
    fn read_track_count(body: &[u8]) -> Option<u8> {
        let first = *body.first()?;
        if !first.is_ascii_digit() {
            return None;
        }

        let mut value = first - b'0';
        if let Some(&second) = body.get(1) {
            if second.is_ascii_digit() {
                value = value * 10 + (second - b'0');
            }
        }

        (1..=99).contains(&value).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_counting_rules() {
        assert_eq!(M3u::count_entries(b"#EXTM3U\n"), 0);
        assert_eq!(M3u::count_entries(b"#EXTM3U\nfile.mp3\n"), 1);
        assert_eq!(M3u::count_entries(b"#EXTM3U\n#EXTINF:1,t\nfile.mp3"), 1);
        //Blank lines count; the tally is per terminator, not per path
        assert_eq!(M3u::count_entries(b"#EXTM3U\n\nfile.mp3\n"), 2);
        //CRLF comment lines stay comments
        assert_eq!(M3u::count_entries(b"#EXTM3U\r\n#EXTINF:1,t\r\nfile.mp3\r\n"), 1);
    }

    #[test]
    fn track_counts_clamp_to_two_digits() {
        assert_eq!(Gdi::read_track_count(b"3\r\n"), Some(3));
        assert_eq!(Gdi::read_track_count(b"99\n"), Some(99));
        assert_eq!(Gdi::read_track_count(b"100\n"), Some(10));
        assert_eq!(Gdi::read_track_count(b"0\n"), None);
        assert_eq!(Gdi::read_track_count(b"track\n"), None);
        assert_eq!(Gdi::read_track_count(b""), None);
    }
}
