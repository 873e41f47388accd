use argp::FromArgs;

/// Command to checksum a file the way vintage disk tools do.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "checksum")]
#[argp(description = "Print the CRC-16/IBM checksum of a file")]
pub struct ChecksumOption {
    #[argp(positional)]
    #[argp(description = "Input file to be checksummed")]
    pub input: String,
}
