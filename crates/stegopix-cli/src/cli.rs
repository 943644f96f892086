use clap::{Parser, Subcommand, ValueEnum};
use stegopix_core::{CodecOptions, HeaderByteOrder};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Index of the first pixel that carries data, must match between hide and unveil
    #[arg(long, global = true, default_value_t = 0)]
    pub padding: usize,

    /// Distance in pixels between two hidden bytes, must match between hide and unveil
    #[arg(long, global = true, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub spacing: u64,

    /// Byte order of the length header, `big` reads images of the Qt desktop tool as long as their data did not wrap
    #[arg(long, global = true, value_enum, default_value_t = ByteOrderArg::Little)]
    pub header_byte_order: ByteOrderArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrderArg {
    Little,
    Big,
}

impl From<ByteOrderArg> for HeaderByteOrder {
    fn from(value: ByteOrderArg) -> Self {
        match value {
            ByteOrderArg::Little => HeaderByteOrder::LittleEndian,
            ByteOrderArg::Big => HeaderByteOrder::BigEndian,
        }
    }
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_padding(self.padding)
            .with_spacing(self.spacing as usize)
            .with_header_byte_order(self.header_byte_order.into())
    }
}
