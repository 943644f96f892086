//! # Stegopix Core API
//!
//! Hides a byte stream in the low bits of the pixels of an image and unveils it again.
//! Every hidden byte occupies one pixel: 3 bits in red, 3 bits in green and 2 bits in blue.
//! The bytes are preceded by a 4 byte length header and spread over the image by
//! two numbers, the `padding` (first pixel) and the `spacing` (distance between pixels),
//! that have to be known for unveiling.
//!
//! The building blocks live in [`media::image`]: [`encode`][enc] and [`decode`][dec]
//! work on plain [`RgbaImage`][img] values, the [`api`] module wraps them with file I/O.
//!
//! # Usage Examples
//!
//! ## Hide data inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//! use stegopix_core::CodecOptions;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbaImage::from_pixel(64, 64, image::Rgba([200, 120, 40, 255]))
//!     .save(&carrier)
//!     .expect("Failed to create carrier image");
//!
//! stegopix_core::api::hide::prepare()
//!     .with_file("Cargo.toml")       // will hide this file inside the image
//!     .with_options(CodecOptions::default().with_padding(7).with_spacing(1))
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-file-inside.png"))
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Unveil data from an image
//!
//! ```rust
//! use tempfile::tempdir;
//! use stegopix_core::CodecOptions;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let secret = temp_dir.path().join("secret.png");
//! let options = || CodecOptions::default().with_padding(3).with_spacing(2);
//!
//! let carrier = image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 0, 255]));
//! stegopix_core::media::image::encode(carrier, b"Hello", &options())
//!     .expect("Failed to hide message")
//!     .save(&secret)
//!     .expect("Failed to save secret image");
//!
//! let unveiled = stegopix_core::api::unveil::prepare()
//!     .from_secret_file(&secret)
//!     .with_options(options())
//!     .execute_to_vec()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(unveiled, b"Hello");
//! ```
//!
//! [enc]: media::image::encode
//! [dec]: media::image::decode
//! [img]: media::RgbaImage

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::error::SteganoError;
pub use crate::media::{CarrierImage, CodecOptions, HeaderByteOrder, Persist};
pub use crate::result::Result;

#[cfg(test)]
mod test_utils {
    use std::path::{Path, PathBuf};

    use image::{ImageBuffer, RgbaImage};

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2, 3 ) | 1,0 -> (4, 5, 6, 7 ) | ...
    /// | 0,1 -> (20,21,22,23) | 1,1 -> (24,25,26,27) | ...
    /// | 0,2 -> (40,41,42,43) | 1,2 -> (44,45,46,47) | ...
    /// y ...
    pub fn prepare_5x5_image() -> RgbaImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            image::Rgba([i, i + 1, i + 2, i + 3])
        })
    }

    pub fn prepare_black_image(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_pixel(width, height, image::Rgba([0, 0, 0, 255]))
    }

    /// fully opaque, so it survives formats with limited alpha support unchanged
    pub fn prepare_opaque_gradient_image(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let i = ((x * 7 + y * 13) % 256) as u8;
            image::Rgba([i, i.wrapping_mul(3), 255 - i, 255])
        })
    }

    pub fn write_png(dir: &Path, name: &str, img: RgbaImage) -> PathBuf {
        let path = dir.join(name);
        img.save(&path).expect("Failed to write test image");
        path
    }
}
