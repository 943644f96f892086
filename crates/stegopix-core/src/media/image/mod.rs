pub mod channel_packing;
pub mod decoder;
pub mod encoder;
pub mod traversal;

pub use decoder::{decode, decode_header};
pub use encoder::{encode, encode_into};
pub use traversal::{PixelPosition, Traversal};
