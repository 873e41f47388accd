use cartouche_core::prelude::*;
use cartouche_formats::prelude::*;

/// Builds a zero-filled buffer of `len` bytes opening with `prefix`.
fn padded(prefix: &[u8], len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    data[..prefix.len()].copy_from_slice(prefix);
    data
}

#[test]
fn bps_patch_with_zeroed_checksums() {
    let report = identify(&padded(b"BPS1", 32), None);
    assert_eq!(report.format, FormatId::Bps);
    assert!(report.recognised);
    assert!(report.valid);
    assert_eq!(report.source_size, 32);
    assert_eq!(
        report.payload,
        Payload::Bps(BpsFooter { source_crc: 0, target_crc: 0, patch_crc: 0 })
    );
}

#[test]
fn bps_checksums_come_from_the_tail() {
    let mut data = padded(b"BPS1", 64);
    data[52..56].copy_from_slice(&0xAABBCCDDu32.to_le_bytes());
    data[56..60].copy_from_slice(&0x11223344u32.to_le_bytes());
    data[60..64].copy_from_slice(&0x99887766u32.to_le_bytes());
    let report = identify(&data, None);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Bps(BpsFooter {
            source_crc: 0xAABB_CCDD,
            target_crc: 0x1122_3344,
            patch_crc: 0x9988_7766
        })
    );
}

#[test]
fn bps_magic_without_room_for_the_tail() {
    let report = identify(b"BPS1\x00\x00", None);
    assert_eq!(report.format, FormatId::Bps);
    assert!(report.recognised);
    assert!(!report.valid);
    assert_eq!(report.payload, Payload::Bps(BpsFooter::default()));
}

#[test]
fn avi_header() {
    let mut data = padded(b"RIFF", 32);
    data[4..8].copy_from_slice(&100u32.to_le_bytes());
    data[8..12].copy_from_slice(b"AVI ");
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Avi);
    assert!(report.valid);
    assert_eq!(report.payload, Payload::Avi(RiffAvi { file_size: 100 }));
}

#[test]
fn riff_without_the_avi_form_type_is_not_avi() {
    let mut data = padded(b"RIFF", 32);
    data[8..12].copy_from_slice(b"WAVE");
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Unknown);
    assert!(!report.recognised);
}

#[test]
fn ay_archive_reports_one_more_song_than_stored() {
    let mut data = padded(b"ZXAYEMUL", 32);
    data[9] = 1;
    data[0x10] = 4;
    data[0x11] = 2;
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Ay);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Ay(AyTune { file_version: 0, player_version: 1, num_songs: 5, first_song: 2 })
    );
}

#[test]
fn swf_zlib_signature() {
    let data = [0x43, 0x57, 0x53, 0x0A, 0x64, 0x00, 0x00, 0x00];
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Swf);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Swf(Shockwave { compression: SwfCompression::Zlib, version: 10, file_length: 100 })
    );
}

#[test]
fn swf_accepts_any_of_its_three_signatures() {
    for (magic, compression) in [
        (&b"FWS"[..], SwfCompression::None),
        (&b"CWS"[..], SwfCompression::Zlib),
        (&b"ZWS"[..], SwfCompression::Lzma),
    ] {
        let report = identify(&padded(magic, 16), None);
        assert_eq!(report.format, FormatId::Swf);
        let Payload::Swf(swf) = report.payload else { panic!("wrong payload") };
        assert_eq!(swf.compression, compression);
    }
}

#[test]
fn usf_header() {
    let mut data = padded(b"PSF\x21", 16);
    data[4..8].copy_from_slice(&0x1000u32.to_le_bytes());
    data[8..12].copy_from_slice(&0x200u32.to_le_bytes());
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Usf);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Usf(UltraSound { reserved_size: 0x1000, compressed_size: 0x200 })
    );
}

#[test]
fn lzh_first_entry() {
    let mut data = vec![0u8; 24];
    data[0] = 0x16;
    data[2..7].copy_from_slice(b"-lh5-");
    data[7..11].copy_from_slice(&1000u32.to_le_bytes());
    data[11..15].copy_from_slice(&4000u32.to_le_bytes());
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Lzh);
    assert!(report.valid);
    let Payload::Lzh(entry) = report.payload else { panic!("wrong payload") };
    assert_eq!(&entry.method, b"-lh5-");
    assert_eq!(entry.packed_size, 1000);
    assert_eq!(entry.original_size, 4000);
}

#[test]
fn ctr_header_and_truncated_tail_field() {
    let mut data = vec![0u8; 16];
    data[..5].copy_from_slice(b"CTRAW");
    data[5..7].copy_from_slice(&2u16.to_le_bytes());
    data[7] = 40;
    data[8] = 1;
    data[9..13].copy_from_slice(&0x2000u32.to_le_bytes());
    let report = identify(&data, None);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Ctr(CtRaw { version: 2, track: 40, side: 1, data_size: 0x2000 })
    );

    //Room for the fixed fields but not the data length: in-range fields survive, the rest zero
    let report = identify(&data[..9], None);
    assert_eq!(report.format, FormatId::Ctr);
    assert!(report.recognised);
    assert!(!report.valid);
    assert_eq!(report.payload, Payload::Ctr(CtRaw { version: 2, track: 40, side: 1, data_size: 0 }));
}

#[test]
fn mds_header_fields() {
    let mut data = vec![0u8; 88];
    data[..16].copy_from_slice(b"MEDIA DESCRIPTOR");
    data[0x10] = 1;
    data[0x11] = 3;
    data[0x14..0x16].copy_from_slice(&2u16.to_le_bytes());
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Mds);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Mds(MediaDescriptor {
            version_major: 1,
            version_minor: 3,
            medium_type: 0,
            session_count: 2
        })
    );
}

#[test]
fn bare_mds_magic_is_recognised_with_zeroed_fields() {
    let report = identify(b"MEDIA DESCRIPTOR", None);
    assert_eq!(report.format, FormatId::Mds);
    assert!(report.recognised);
    assert!(!report.valid);
    assert_eq!(report.payload, Payload::Mds(MediaDescriptor::default()));
}

#[test]
fn dolphin_movie_header() {
    let mut data = vec![0u8; 256];
    data[..4].copy_from_slice(b"DTM\x1A");
    data[4..10].copy_from_slice(b"GALE01");
    data[0xB] = 0x01;
    data[0xC] = 1;
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Dtm);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Dtm(DolphinMovie {
            game_id: *b"GALE01",
            wii_game: false,
            controllers: 1,
            from_savestate: true
        })
    );
}

#[test]
fn dolphin_movie_demands_its_full_header() {
    let report = identify(&padded(b"DTM\x1AGALE01", 128), Some(FormatId::Dtm));
    assert!(!report.recognised);
}

#[test]
fn fceu_movie_header() {
    let mut data = vec![0u8; 32];
    data[..4].copy_from_slice(&0x4D4D_4346u32.to_le_bytes());
    data[4..8].copy_from_slice(&2u32.to_le_bytes());
    data[8..12].copy_from_slice(&5000u32.to_le_bytes());
    data[12..16].copy_from_slice(&77u32.to_le_bytes());
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Fcm);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Fcm(FceuMovie { version: 2, frame_count: 5000, rerecord_count: 77 })
    );
}

#[test]
fn xex_fields_are_big_endian() {
    let mut data = vec![0u8; 32];
    data[..4].copy_from_slice(b"XEX2");
    data[4..8].copy_from_slice(&0x0000_0009u32.to_be_bytes());
    data[8..12].copy_from_slice(&0x3000u32.to_be_bytes());
    data[16..20].copy_from_slice(&0x0010_0000u32.to_be_bytes());
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Xex);
    assert!(report.valid);
    let Payload::Xex(xex) = report.payload else { panic!("wrong payload") };
    assert!(xex.module_flags.contains(XexModuleFlags::TITLE_MODULE));
    assert!(xex.module_flags.contains(XexModuleFlags::DLL_MODULE));
    assert_eq!(xex.header_size, 0x3000);
    assert_eq!(xex.image_size, 0x0010_0000);
}

#[test]
fn ngage_image_uids() {
    let mut data = vec![0u8; 16];
    data[..4].copy_from_slice(&0x1000_0419u32.to_le_bytes());
    data[4..8].copy_from_slice(&0x1000_0037u32.to_le_bytes());
    data[8..12].copy_from_slice(&0x2000_B1A5u32.to_le_bytes());
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Nge);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Nge(SymbianImage { uid1: 0x1000_0419, uid2: 0x1000_0037, uid3: 0x2000_B1A5 })
    );
}

#[test]
fn altair_standard_disk() {
    let report = identify(&vec![0u8; 256_256], None);
    assert_eq!(report.format, FormatId::Altair);
    assert!(report.valid);
    assert_eq!(report.source_size, 256_256);
    assert_eq!(
        report.payload,
        Payload::Disk(DiskGeometry {
            tracks: 77,
            sides: 1,
            sectors: 26,
            sector_size: 128,
            double_density: false
        })
    );
}

#[test]
fn altair_off_table_length_is_recognised_but_invalid() {
    let report = identify(&vec![0u8; 300_000], Some(FormatId::Altair));
    assert!(report.recognised);
    assert!(!report.valid);
    assert_eq!(
        report.payload,
        Payload::Disk(DiskGeometry {
            tracks: 77,
            sides: 1,
            sectors: 26,
            sector_size: 128,
            double_density: false
        })
    );
}

#[test]
fn exact_geometry_beats_an_earlier_guess() {
    //860160 sits inside the Altair bounds, but only as a guess; Agat owns it exactly
    let report = identify(&vec![0u8; 860_160], None);
    assert_eq!(report.format, FormatId::Agat);
    assert!(report.valid);
    assert_eq!(
        report.payload,
        Payload::Disk(DiskGeometry {
            tracks: 80,
            sides: 2,
            sectors: 21,
            sector_size: 256,
            double_density: true
        })
    );
}

#[test]
fn shared_length_resolves_by_registry_order() {
    //Alphatronic and Casio FP-1100 both ship 320K images; the earlier row wins
    let report = identify(&vec![0u8; 327_680], None);
    assert_eq!(report.format, FormatId::Alphatronic);
    assert!(report.valid);

    let hinted = identify(&vec![0u8; 327_680], Some(FormatId::CasioFp));
    assert_eq!(hinted.format, FormatId::CasioFp);
    assert!(hinted.valid);
}

#[test]
fn exact_chip_sizes_beat_rom_ranges() {
    let report = identify(&vec![0u8; 8192], None);
    assert_eq!(report.format, FormatId::Sfm);
    assert!(report.valid);
    assert_eq!(report.payload, Payload::Save(SaveRam { save_size: 8192, power_of_two: true }));
}

#[test]
fn rom_ranges_claim_their_calibres() {
    let report = identify(&vec![0u8; 4096], None);
    assert_eq!(report.format, FormatId::A52);
    assert_eq!(report.payload, Payload::Rom(RomImage { rom_size: 4096, has_header: false }));

    let report = identify(&vec![0u8; 1024], None);
    assert_eq!(report.format, FormatId::Mid);

    let report = identify(&vec![0u8; 512], None);
    assert_eq!(report.format, FormatId::Srm);
    assert_eq!(report.payload, Payload::Save(SaveRam { save_size: 512, power_of_two: true }));
}

#[test]
fn odd_save_length_clears_the_power_of_two_flag() {
    let report = identify(&vec![0u8; 600], Some(FormatId::Srm));
    assert!(report.valid);
    assert_eq!(report.payload, Payload::Save(SaveRam { save_size: 600, power_of_two: false }));
}

#[test]
fn intellivision_header_prefix_is_advisory() {
    let mut data = vec![0u8; 8192];
    data[0] = 0xA8;
    let report = identify(&data, Some(FormatId::Int));
    assert!(report.valid);
    assert_eq!(report.payload, Payload::Rom(RomImage { rom_size: 8192, has_header: true }));

    //A mismatch only clears the flag; the dump is no less real
    let report = identify(&vec![0x55u8; 8192], Some(FormatId::Int));
    assert!(report.valid);
    assert_eq!(report.payload, Payload::Rom(RomImage { rom_size: 8192, has_header: false }));
}

#[test]
fn oversized_intellivision_dump_is_recognised_but_invalid() {
    let report = identify(&vec![0u8; 70_000], Some(FormatId::Int));
    assert!(report.recognised);
    assert!(!report.valid);
    assert_eq!(report.source_size, 70_000);
}

#[test]
fn laseractive_claims_what_nothing_else_can() {
    let mut data = vec![0u8; 0x20_0000];
    let plain = identify(&data, None);
    assert_eq!(plain.format, FormatId::Lda);
    assert!(plain.valid);
    assert_eq!(plain.payload, Payload::Lda(LaserDisc { mega_ld: false }));

    data[0x100..0x104].copy_from_slice(b"SEGA");
    let marked = identify(&data, None);
    assert_eq!(marked.payload, Payload::Lda(LaserDisc { mega_ld: true }));
}

#[test]
fn extended_playlist_counts_entries() {
    let report = identify(b"#EXTM3U\n#EXTINF:123,Title\nfile.mp3\n", None);
    assert_eq!(report.format, FormatId::M3u);
    assert!(report.valid);
    assert_eq!(report.payload, Payload::M3u(Playlist { extended: true, entry_count: 1 }));
}

#[test]
fn playlist_tolerates_a_bom() {
    let report = identify(b"\xEF\xBB\xBF#EXTM3U\nfile.mp3\n", None);
    assert_eq!(report.format, FormatId::M3u);
    assert!(report.valid);
    assert_eq!(report.payload, Payload::M3u(Playlist { extended: true, entry_count: 1 }));
}

#[test]
fn plain_playlist_without_the_sentinel_is_unknown() {
    let report = identify(b"file1.mp3\nfile2.mp3\n", None);
    assert_eq!(report.format, FormatId::Unknown);
}

#[test]
fn gdi_first_line_track_count() {
    let report = identify(b"3\r\ntrack01.bin 0 4 2352\r\n", None);
    assert_eq!(report.format, FormatId::Gdi);
    assert!(report.valid);
    assert_eq!(report.payload, Payload::Gdi(CueSheet { track_count: 3 }));
}

#[test]
fn gdi_reads_at_most_two_digits() {
    let report = identify(b"100\r\n", None);
    assert_eq!(report.format, FormatId::Gdi);
    assert_eq!(report.payload, Payload::Gdi(CueSheet { track_count: 10 }));
}

#[test]
fn gdi_rejects_out_of_range_counts() {
    assert_eq!(identify(b"0\r\nwhatever", None).format, FormatId::Unknown);
    assert_eq!(identify(b"track01.bin", None).format, FormatId::Unknown);
}

#[test]
fn size_families_win_before_text_probes() {
    let mut data = vec![0u8; 256_256];
    data[..8].copy_from_slice(b"#EXTM3U\n");
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Altair);
    assert!(report.valid);
}

#[test]
fn magic_wins_before_size_families() {
    //A 256256-byte buffer that opens with a Dolphin header is a movie, not a floppy
    let mut data = vec![0u8; 256_256];
    data[..4].copy_from_slice(b"DTM\x1A");
    let report = identify(&data, None);
    assert_eq!(report.format, FormatId::Dtm);
}

#[test]
fn unrecognised_buffer_produces_the_synthetic_envelope() {
    let report = identify(&[0xFF; 64], None);
    assert_eq!(report.format, FormatId::Unknown);
    assert!(!report.recognised);
    assert!(!report.valid);
    assert_eq!(report.source_size, 64);
    assert_eq!(report.payload, Payload::Unknown);
}

#[test]
fn empty_buffer_is_unknown() {
    let report = identify(&[], None);
    assert_eq!(report.format, FormatId::Unknown);
    assert_eq!(report.source_size, 0);
}

#[test]
fn hint_skips_the_scan_entirely() {
    let mut data = padded(b"RIFF", 32);
    data[4..8].copy_from_slice(&100u32.to_le_bytes());
    data[8..12].copy_from_slice(b"AVI ");

    let report = identify(&data, Some(FormatId::Bps));
    assert_eq!(report.format, FormatId::Bps);
    assert!(!report.recognised);
    assert_eq!(report.payload, Payload::zeroed(FormatId::Bps));
}

#[test]
fn hint_reaches_formats_the_scan_shadows() {
    //Unhinted, 2048 bytes land on the Super Famicom chip table first
    assert_eq!(identify(&vec![0u8; 2048], None).format, FormatId::Sfm);

    let report = identify(&vec![0u8; 2048], Some(FormatId::Cv));
    assert_eq!(report.format, FormatId::Cv);
    assert!(report.valid);
    assert_eq!(report.payload, Payload::Rom(RomImage { rom_size: 2048, has_header: false }));
}

#[test]
fn identify_all_reports_every_row_in_registry_order() {
    let reports = identify_all(&[0u8; 16]);
    assert_eq!(reports.len(), REGISTRY.len());
    for (report, desc) in reports.iter().zip(REGISTRY.iter()) {
        assert_eq!(report.format, desc.id);
        assert_eq!(report.source_size, 16);
        if !report.recognised {
            assert_eq!(report.payload, Payload::zeroed(desc.id));
        }
    }
}

#[test]
fn identify_all_shows_shadowed_candidates() {
    let reports = identify_all(&vec![0u8; 327_680]);
    let claimed: Vec<FormatId> =
        reports.iter().filter(|report| report.valid).map(|report| report.format).collect();
    //Both 320K families claim the buffer; dispatch order is what picks Alphatronic
    assert!(claimed.contains(&FormatId::Alphatronic));
    assert!(claimed.contains(&FormatId::CasioFp));
}
