use clap::Parser;
use log::debug;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stegopix_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();
    debug!("Using {options:?}");

    match args.command {
        Commands::Hide(args) => args.run(options),
        Commands::Unveil(args) => args.run(options),
        Commands::Capacity(args) => args.run(options),
    }
}
