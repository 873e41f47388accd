use argp::FromArgs;
use paste::paste;

macro_rules! declare_module {
    ($($name:ident),+) => {
        $(
        paste! {
            mod $name;
            pub(crate) use $name::[<$name:camel Option>];
        }
    )+
};
}

declare_module!(checksum, info, registry);

/// Top-level command
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(description = "Identify retro and niche binary container formats.")]
pub struct Cartouche {
    #[argp(option, short = 'v', global, default = "0")]
    #[argp(description = "Logging level (0 = Off, 1 = Error, 2 = Warn, 3 = Info, 4 = Debug, 5 = Trace)")]
    pub verbose: usize,

    #[argp(subcommand)]
    pub nested: Modules,
}

/// These are all the commands Cartouche supports via command line.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand)]
#[non_exhaustive]
pub enum Modules {
    Info(InfoOption),
    Registry(RegistryOption),
    Checksum(ChecksumOption),
}
