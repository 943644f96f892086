use std::collections::HashSet;

use image::RgbaImage;

use super::channel_packing::pack;
use super::traversal::{PixelPosition, Traversal};
use crate::error::SteganoError;
use crate::media::frame::{ensure_capacity, Frame};
use crate::media::CodecOptions;
use crate::result::Result;

/// Hides `payload` in `carrier` and hands the modified image back.
///
/// ## Example of usage
/// ```rust
/// use image::{ImageBuffer, Rgba};
/// use stegopix_core::media::image::{decode, encode};
/// use stegopix_core::CodecOptions;
///
/// let carrier = ImageBuffer::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
/// let opts = CodecOptions::default();
///
/// let secret = encode(carrier, &[0xAB], &opts).expect("payload fits");
/// assert_eq!(decode(&secret, &opts).expect("header is valid"), vec![0xAB]);
/// ```
pub fn encode(mut carrier: RgbaImage, payload: &[u8], options: &CodecOptions) -> Result<RgbaImage> {
    encode_into(&mut carrier, payload, options)?;

    Ok(carrier)
}

/// Hides `payload` in place.
///
/// All pixels are resolved before the first one is touched, so on error the
/// carrier is left unchanged.
pub fn encode_into(carrier: &mut RgbaImage, payload: &[u8], options: &CodecOptions) -> Result<()> {
    let (width, height) = carrier.dimensions();
    let traversal = Traversal::new(width, height, options.padding, options.spacing)?;
    ensure_capacity(payload.len(), traversal.pixel_count())?;

    let frame = Frame::new(payload)?;
    let positions = claim_pixels(traversal, frame.total_len())?;

    for (c, p) in frame.bytes(options.header_byte_order).zip(positions) {
        pack(c).apply_to(carrier.get_pixel_mut(p.x, p.y));
    }

    Ok(())
}

/// takes `count` pixels from the traversal, none of them twice
fn claim_pixels(mut traversal: Traversal, count: usize) -> Result<Vec<PixelPosition>> {
    let mut seen = HashSet::with_capacity(count);
    let mut positions = Vec::with_capacity(count);

    for _ in 0..count {
        let p = traversal.next().ok_or(SteganoError::TraversalExhausted)?;
        if !seen.insert(p.index) {
            return Err(SteganoError::PixelCollision { index: p.index });
        }
        positions.push(p);
    }

    Ok(positions)
}
