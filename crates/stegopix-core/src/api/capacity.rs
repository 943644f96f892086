use std::path::Path;

use crate::media::frame::HEADER_LEN;
use crate::media::image::Traversal;
use crate::media::{CarrierImage, CodecOptions};
use crate::SteganoError;

/// How much data an image can carry with the given padding and spacing.
///
/// One byte goes into one pixel, the length header takes 4 of them. Pixels the
/// walk cannot reach, because it runs out of padding or comes back to a pixel
/// it already visited, do not count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
    pub reachable_pixels: usize,
    pub max_payload: usize,
}

impl Capacity {
    pub fn of(carrier: &CarrierImage, options: &CodecOptions) -> Result<Self, SteganoError> {
        let reachable_pixels = Traversal::new(
            carrier.width(),
            carrier.height(),
            options.padding,
            options.spacing,
        )?
        .reach();

        Ok(Self {
            width: carrier.width(),
            height: carrier.height(),
            pixel_count: carrier.pixel_count(),
            reachable_pixels,
            max_payload: reachable_pixels.saturating_sub(HEADER_LEN),
        })
    }

    pub fn fits(&self, payload_len: usize) -> bool {
        payload_len
            .checked_add(HEADER_LEN)
            .is_some_and(|n| n <= self.reachable_pixels)
    }
}

pub fn inspect(image: impl AsRef<Path>, options: &CodecOptions) -> Result<Capacity, SteganoError> {
    let carrier = CarrierImage::from_file(image.as_ref())?;

    Capacity::of(&carrier, options)
}
