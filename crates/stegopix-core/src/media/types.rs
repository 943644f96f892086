use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use image::RgbaImage;
use image::ImageFormat;
use log::{debug, error};

use crate::error::SteganoError;
use crate::media::frame::max_payload;
use crate::media::CodecOptions;
use crate::result::Result;

use super::Persist;

/// a carrier image for steganography, decoded into a plain pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierImage(RgbaImage);

impl CarrierImage {
    pub fn from_image(img: RgbaImage) -> Self {
        Self(img)
    }

    /// Loads PNG, BMP and JPEG images.
    ///
    /// JPEG is only accepted as a plain carrier, the result has to be saved
    /// in a lossless format or the hidden data is lost.
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = lowercase_extension(f) else {
            return Err(SteganoError::UnsupportedMedia);
        };
        match ext.as_str() {
            "png" | "bmp" | "jpg" | "jpeg" => {
                let img = image::open(f)
                    .map_err(|e| {
                        error!("Error opening image {f:?}: {e}");
                        SteganoError::InvalidImageMedia
                    })?
                    .to_rgba8();
                debug!(
                    "Loaded {f:?} with {}x{} pixels",
                    img.width(),
                    img.height()
                );

                Ok(Self(img))
            }
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.0.width() as usize * self.0.height() as usize
    }

    /// the biggest payload that fits next to the length header
    pub fn max_payload(&self) -> usize {
        max_payload(self.pixel_count())
    }

    pub fn hide_data(&mut self, data: &[u8], opts: &CodecOptions) -> Result<&mut Self> {
        debug!(
            "Hiding {} bytes with padding {} and spacing {}",
            data.len(),
            opts.padding,
            opts.spacing
        );
        super::image::encode_into(&mut self.0, data, opts)?;

        Ok(self)
    }

    pub fn unveil_data(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        let data = super::image::decode(&self.0, opts)?;
        debug!("Unveiled {} bytes", data.len());

        Ok(data)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.0
    }

    pub fn into_image(self) -> RgbaImage {
        self.0
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W, format: ImageFormat) -> Result<()> {
        self.0.write_to(&mut writer, format).map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
    }
}

impl Persist for CarrierImage {
    /// Persists the image in the lossless format given by the file extension (PNG or BMP).
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let format = match lowercase_extension(file).as_deref() {
            Some("png") => ImageFormat::Png,
            Some("bmp") => ImageFormat::Bmp,
            _ => {
                error!("Refusing to save {file:?}, only PNG and BMP keep hidden data intact");
                return Err(SteganoError::UnsupportedMedia);
            }
        };

        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer, format)?;

        writer
            .flush()
            .map_err(|source| SteganoError::WriteError { source })
    }
}

fn lowercase_extension(f: &Path) -> Option<String> {
    f.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
