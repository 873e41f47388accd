use anyhow::Context;
use cartouche_core::prelude::*;
use cartouche_formats::prelude::*;
use owo_colors::OwoColorize;

/// Identifies a file and prints the best envelope, or every envelope with `all`.
pub(crate) fn identify_file(input: &str, format: Option<&str>, all: bool) -> anyhow::Result<()> {
    let data = std::fs::read(input).with_context(|| format!("Unable to read {input}"))?;
    log::info!("Read {} from {input}", util::format_size(data.len()));

    let hint = match format {
        Some(name) => Some(registry::lookup(name)?.id),
        None => None,
    };

    if all {
        println!("{input}:");
        for report in identify_all(&data) {
            print_verdict(&report);
        }
        return Ok(());
    }

    let report = identify(&data, hint);
    log::debug!("Best envelope: {report:?}");

    if report.valid {
        println!("{input}: {}", describe(&report));
    } else if report.recognised {
        println!("{input}: {} {}", describe(&report), "(failed validation)".yellow());
    } else if hint.is_some() {
        println!("{input}: {} {}", describe(&report), "(not recognised)".red());
    } else {
        println!("{input}: data");
    }
    Ok(())
}

/// Prints every registered format, in dispatch order.
pub(crate) fn list_formats(hints: bool) {
    for desc in REGISTRY.iter() {
        if hints {
            println!(
                "{:12} {:10} {:32} [{}] {}",
                desc.id.to_string(),
                desc.category.to_string(),
                desc.name,
                desc.extensions.join(", "),
                desc.media_type.dimmed()
            );
        } else {
            println!("{:12} {:10} {}", desc.id.to_string(), desc.category.to_string(), desc.name);
        }
    }
}

/// Checksums a file with CRC-16/IBM.
pub(crate) fn checksum_file(input: &str) -> anyhow::Result<()> {
    let data = std::fs::read(input).with_context(|| format!("Unable to read {input}"))?;
    log::info!("Read {} from {input}", util::format_size(data.len()));

    println!("{input}: CRC-16/IBM {:#06X}", crc16_ibm(&data));
    Ok(())
}

fn print_verdict(report: &Report) {
    let verdict = if report.valid {
        "valid".green().to_string()
    } else if report.recognised {
        "recognised".yellow().to_string()
    } else {
        "refused".red().to_string()
    };

    if report.recognised {
        println!("  {:12} {verdict:10} {}", report.format.to_string(), describe(report));
    } else {
        println!("  {:12} {verdict}", report.format.to_string());
    }
}

/// One line of human-readable detail per payload shape.
fn describe(report: &Report) -> String {
    let name = registry::find(report.format).map_or("unknown", |desc| desc.name);
    match report.payload {
        Payload::Unknown => "data".to_string(),
        Payload::Bps(footer) => format!(
            "{name}, source CRC32 {:#010X}, target CRC32 {:#010X}, patch CRC32 {:#010X}",
            footer.source_crc, footer.target_crc, footer.patch_crc
        ),
        Payload::Avi(avi) => {
            format!("{name}, declared size {}", util::format_size(avi.file_size as usize))
        }
        Payload::Ay(tune) => format!(
            "{name} v{}, {} song(s), first song {}",
            tune.file_version, tune.num_songs, tune.first_song
        ),
        Payload::Ctr(ctr) => format!(
            "{name} v{}, track {} side {}, {} of flux data",
            ctr.version,
            ctr.track,
            ctr.side,
            util::format_size(ctr.data_size as usize)
        ),
        Payload::Dtm(movie) => format!(
            "{name} ({}) for {}, controller mask {:#04X}{}",
            if movie.wii_game { "Wii" } else { "GameCube" },
            String::from_utf8_lossy(&movie.game_id),
            movie.controllers,
            if movie.from_savestate { ", from savestate" } else { "" }
        ),
        Payload::Fcm(movie) => format!(
            "{name} v{}, {} frames, {} rerecords",
            movie.version, movie.frame_count, movie.rerecord_count
        ),
        Payload::Mds(mds) => format!(
            "{name} v{}.{}, medium type {}, {} session(s)",
            mds.version_major, mds.version_minor, mds.medium_type, mds.session_count
        ),
        Payload::Xex(xex) => format!(
            "{name}, module flags {:#010X}, header {}, image {}",
            xex.module_flags.bits(),
            util::format_size(xex.header_size as usize),
            util::format_size(xex.image_size as usize)
        ),
        Payload::Usf(usf) => format!(
            "{name}, {} reserved, {} compressed",
            util::format_size(usf.reserved_size as usize),
            util::format_size(usf.compressed_size as usize)
        ),
        Payload::Swf(swf) => format!(
            "{name} v{}, {}, declared length {}",
            swf.version,
            swf.compression,
            util::format_size(swf.file_length as usize)
        ),
        Payload::Nge(image) => format!(
            "{name}, UIDs {:#010X}/{:#010X}/{:#010X}",
            image.uid1, image.uid2, image.uid3
        ),
        Payload::Lzh(entry) => format!(
            "{name}, method {}, {} packed, {} original",
            String::from_utf8_lossy(&entry.method),
            util::format_size(entry.packed_size as usize),
            util::format_size(entry.original_size as usize)
        ),
        Payload::Rom(rom) => format!(
            "{name}, {}{}",
            util::format_size(rom.rom_size as usize),
            if rom.has_header { ", dumper header" } else { "" }
        ),
        Payload::Disk(geometry) => format!(
            "{name}, {} tracks x {} side(s) x {} sectors x {} bytes{}",
            geometry.tracks,
            geometry.sides,
            geometry.sectors,
            geometry.sector_size,
            if geometry.double_density { ", double density" } else { "" }
        ),
        Payload::Save(save) => format!(
            "{name}, {}{}",
            util::format_size(save.save_size as usize),
            if save.power_of_two { "" } else { ", odd size" }
        ),
        Payload::Lda(disc) => {
            format!("{name}{}", if disc.mega_ld { ", Mega LD" } else { "" })
        }
        Payload::M3u(playlist) => format!("{name}, {} entries", playlist.entry_count),
        Payload::Gdi(sheet) => format!("{name}, {} tracks", sheet.track_count),
        _ => name.to_string(),
    }
}
