use image::Rgba;

const RED_BITS: u8 = 0b0000_0111;
const GREEN_BITS: u8 = 0b0011_1000;
const BLUE_BITS: u8 = 0b1100_0000;

const RED_KEEP: u8 = 0b1111_1000;
const GREEN_KEEP: u8 = 0b1111_1000;
const BLUE_KEEP: u8 = 0b1111_1100;

/// One byte split into the low bits of the three color channels of a pixel.
///
/// Red and green carry 3 bits each, blue carries the remaining 2 bits,
/// so a pixel changes by at most 7 on red and green and at most 3 on blue.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PackedByte {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PackedByte {
    /// replaces only the low bits of the color channels, alpha and all high bits are kept
    pub fn apply_to(&self, pixel: &mut Rgba<u8>) {
        let [red, green, blue, _] = &mut pixel.0;
        *red = (*red & RED_KEEP) | self.red;
        *green = (*green & GREEN_KEEP) | self.green;
        *blue = (*blue & BLUE_KEEP) | self.blue;
    }
}

/// splits `c` into 3 bits for red, 3 bits for green and 2 bits for blue
pub fn pack(c: u8) -> PackedByte {
    PackedByte {
        red: c & RED_BITS,
        green: (c & GREEN_BITS) >> 3,
        blue: (c & BLUE_BITS) >> 6,
    }
}

/// reassembles the byte hidden in the low bits of `pixel`
pub fn unpack(pixel: &Rgba<u8>) -> u8 {
    let [red, green, blue, _] = pixel.0;
    (red & 0b111) | ((green & 0b111) << 3) | ((blue & 0b11) << 6)
}
