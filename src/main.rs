mod identify;
mod menu;

use anyhow::Result;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    let args: menu::Cartouche = argp::parse_args_or_exit(argp::DEFAULT);

    let level = match args.verbose {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    match args.nested {
        menu::Modules::Info(flags) => {
            identify::identify_file(&flags.input, flags.format.as_deref(), flags.all)?;
        }
        menu::Modules::Registry(flags) => identify::list_formats(flags.hints),
        menu::Modules::Checksum(flags) => identify::checksum_file(&flags.input)?,
    }

    Ok(())
}
