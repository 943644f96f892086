use std::path::PathBuf;

use clap::Args;
use stegopix_core::CodecOptions;

use crate::CliResult;

/// Unveils data from a PNG or BMP image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled data will be stored in this file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stegopix_core::commands::unveil(&self.media, &self.output_file, options)
    }
}
