use image::RgbaImage;

use super::channel_packing::unpack;
use super::traversal::Traversal;
use crate::error::SteganoError;
use crate::media::frame::{read_length, HEADER_LEN};
use crate::media::{CodecOptions, HeaderByteOrder};
use crate::result::Result;

/// Unveils the payload hidden in `secret`.
///
/// The length header is read first, the payload follows on the very same walk.
/// A negative length or a length beyond the pixel count is reported as
/// [`SteganoError::InvalidMessageSize`] and no payload is read.
pub fn decode(secret: &RgbaImage, options: &CodecOptions) -> Result<Vec<u8>> {
    let mut walk = PixelWalk::new(secret, options)?;
    let message_size = walk.read_message_size(options.header_byte_order)?;

    let mut payload = Vec::with_capacity(message_size);
    for _ in 0..message_size {
        payload.push(walk.read_byte()?);
    }

    Ok(payload)
}

/// Unveils only the length header, useful to inspect an image before unveiling it.
pub fn decode_header(secret: &RgbaImage, options: &CodecOptions) -> Result<usize> {
    PixelWalk::new(secret, options)?.read_message_size(options.header_byte_order)
}

struct PixelWalk<'i> {
    secret: &'i RgbaImage,
    traversal: Traversal,
}

impl<'i> PixelWalk<'i> {
    fn new(secret: &'i RgbaImage, options: &CodecOptions) -> Result<Self> {
        let (width, height) = secret.dimensions();
        Ok(Self {
            secret,
            traversal: Traversal::new(width, height, options.padding, options.spacing)?,
        })
    }

    fn read_byte(&mut self) -> Result<u8> {
        let p = self
            .traversal
            .next()
            .ok_or(SteganoError::TraversalExhausted)?;

        Ok(unpack(self.secret.get_pixel(p.x, p.y)))
    }

    fn read_message_size(&mut self, byte_order: HeaderByteOrder) -> Result<usize> {
        let mut header = [0; HEADER_LEN];
        for b in header.iter_mut() {
            *b = self.read_byte()?;
        }

        let message_size = read_length(&header, byte_order);
        match usize::try_from(message_size) {
            Ok(size) if size <= self.traversal.pixel_count() => Ok(size),
            _ => Err(SteganoError::InvalidMessageSize(message_size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::channel_packing::pack;
    use crate::media::image::encoder::encode;
    use crate::test_utils::{prepare_5x5_image, prepare_black_image};

    /// hides `bytes` pixel by pixel from the top left corner, no header is added
    fn hide_raw(image: &mut RgbaImage, bytes: &[u8]) {
        for (pixel, c) in image.pixels_mut().zip(bytes) {
            pack(*c).apply_to(pixel);
        }
    }

    #[test]
    fn should_unveil_a_single_byte() {
        let opts = CodecOptions::default();
        let secret = encode(prepare_black_image(4, 4), &[0xAB], &opts).unwrap();

        assert_eq!(decode(&secret, &opts).unwrap(), vec![0xAB]);
        assert_eq!(decode_header(&secret, &opts).unwrap(), 1);
    }

    #[test]
    fn should_unveil_an_empty_payload() {
        let opts = CodecOptions::default().with_padding(7).with_spacing(2);
        let secret = encode(prepare_5x5_image(), &[], &opts).unwrap();

        assert_eq!(decode(&secret, &opts).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn should_read_big_endian_headers() {
        let mut secret = prepare_black_image(4, 4);
        hide_raw(&mut secret, &[0, 0, 0, 2, b'o', b'k']);
        let opts = CodecOptions::default().with_header_byte_order(HeaderByteOrder::BigEndian);

        assert_eq!(decode(&secret, &opts).unwrap(), b"ok".to_vec());
    }

    #[test]
    fn should_fail_fast_on_negative_message_size() {
        let mut secret = prepare_black_image(4, 4);
        hide_raw(&mut secret, &[0xFF, 0xFF, 0xFF, 0xFF]);

        assert!(matches!(
            decode(&secret, &CodecOptions::default()),
            Err(SteganoError::InvalidMessageSize(-1))
        ));
    }

    #[test]
    fn should_fail_fast_on_message_size_beyond_pixel_count() {
        let mut secret = prepare_black_image(4, 4);
        hide_raw(&mut secret, &[17, 0, 0, 0]);

        assert!(matches!(
            decode(&secret, &CodecOptions::default()),
            Err(SteganoError::InvalidMessageSize(17))
        ));
    }

    #[test]
    fn should_report_exhausted_traversal_for_plausible_but_unreachable_sizes() {
        let mut secret = prepare_black_image(4, 4);
        hide_raw(&mut secret, &[16, 0, 0, 0]);

        assert!(matches!(
            decode(&secret, &CodecOptions::default()),
            Err(SteganoError::TraversalExhausted)
        ));
    }

    #[test]
    fn should_continue_the_walk_after_the_header() {
        // 3x3 image, padding 4, spacing 4: 4, 8 -> wrap 3, 7 -> wrap 2, 6
        let opts = CodecOptions::default().with_padding(4).with_spacing(4);
        let secret = encode(prepare_black_image(3, 3), b"xy", &opts).unwrap();

        assert_eq!(unpack(secret.get_pixel(2, 0)), b'x');
        assert_eq!(unpack(secret.get_pixel(0, 2)), b'y');
        assert_eq!(decode(&secret, &opts).unwrap(), b"xy".to_vec());
    }
}
