use argp::FromArgs;

/// Command to list every format in the registry.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "formats")]
#[argp(description = "List every format the registry knows, in dispatch order")]
pub struct RegistryOption {
    #[argp(switch, long = "hints")]
    #[argp(description = "Also print extension and media-type hints")]
    pub hints: bool,
}
