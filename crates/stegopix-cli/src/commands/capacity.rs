use std::path::PathBuf;

use clap::Args;
use stegopix_core::CodecOptions;

use crate::CliResult;

/// Shows how many bytes an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image to inspect
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media file",
        required = true
    )]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let capacity = stegopix_core::commands::capacity(&self.media, &options)?;
        println!(
            "{} - Size: {} pixels ({}x{}), up to {} bytes can be hidden with padding {} and spacing {}",
            self.media.display(),
            capacity.pixel_count,
            capacity.width,
            capacity.height,
            capacity.max_payload,
            options.padding,
            options.spacing
        );

        Ok(())
    }
}
