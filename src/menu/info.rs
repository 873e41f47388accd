use argp::FromArgs;

/// Command to identify what a given file is.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "info")]
#[argp(description = "Identify a file and print relevant information")]
pub struct InfoOption {
    #[argp(option, long = "format")]
    #[argp(description = "Only run the probe for this format (short name, e.g. \"bps\")")]
    pub format: Option<String>,

    #[argp(switch, long = "all")]
    #[argp(description = "Print every probe's verdict instead of the best match")]
    pub all: bool,

    //We always need an input file
    #[argp(positional)]
    #[argp(description = "Input file to be probed")]
    pub input: String,
}
