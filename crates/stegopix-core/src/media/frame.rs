use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::SteganoError;
use crate::media::HeaderByteOrder;
use crate::result::Result;

/// size of the length header in bytes
pub const HEADER_LEN: usize = 4;

/// The unit that is actually hidden: a signed 32 bit length header followed by the payload.
///
/// There is no magic number and no checksum, unveiling with the wrong
/// padding or spacing yields garbage rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'p> {
    payload: &'p [u8],
    len: i32,
}

impl<'p> Frame<'p> {
    pub fn new(payload: &'p [u8]) -> Result<Self> {
        let len = i32::try_from(payload.len()).map_err(|_| SteganoError::CapacityExceeded {
            payload: payload.len(),
            capacity: i32::MAX as usize,
        })?;

        Ok(Self { payload, len })
    }

    /// number of bytes of header and payload together
    pub fn total_len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }

    pub fn header(&self, byte_order: HeaderByteOrder) -> [u8; HEADER_LEN] {
        let mut header = [0; HEADER_LEN];
        match byte_order {
            HeaderByteOrder::LittleEndian => LittleEndian::write_i32(&mut header, self.len),
            HeaderByteOrder::BigEndian => BigEndian::write_i32(&mut header, self.len),
        }
        header
    }

    /// all frame bytes in the order they are hidden, header first
    pub fn bytes(&self, byte_order: HeaderByteOrder) -> impl Iterator<Item = u8> + 'p {
        self.header(byte_order)
            .into_iter()
            .chain(self.payload.iter().copied())
    }
}

/// reinterprets an unveiled header as the payload length
pub fn read_length(header: &[u8; HEADER_LEN], byte_order: HeaderByteOrder) -> i32 {
    match byte_order {
        HeaderByteOrder::LittleEndian => LittleEndian::read_i32(header),
        HeaderByteOrder::BigEndian => BigEndian::read_i32(header),
    }
}

/// the biggest payload an image with `pixel_count` pixels can carry
pub fn max_payload(pixel_count: usize) -> usize {
    pixel_count.saturating_sub(HEADER_LEN)
}

pub fn ensure_capacity(payload_len: usize, pixel_count: usize) -> Result<()> {
    let fits = payload_len
        .checked_add(HEADER_LEN)
        .is_some_and(|frame_len| frame_len <= pixel_count);
    if !fits {
        return Err(SteganoError::CapacityExceeded {
            payload: payload_len,
            capacity: pixel_count,
        });
    }

    Ok(())
}
