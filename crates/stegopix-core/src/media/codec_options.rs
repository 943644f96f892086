/// Codec configuration for hiding and unveiling
///
/// `padding` and `spacing` act as a shared key: unveiling only works with the
/// exact values that were used for hiding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Linear pixel index (`y * width + x`) of the first pixel that carries data.
    /// Whenever the walk runs past the end of the image it restarts one pixel
    /// before the previous start.
    pub padding: usize,

    /// Distance in pixels between two consecutive hidden bytes.
    /// Must be at least `1`.
    pub spacing: usize,

    /// Byte order of the 4 byte length header that precedes the payload.
    pub header_byte_order: HeaderByteOrder,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            padding: 0,
            spacing: 1,
            header_byte_order: HeaderByteOrder::default(),
        }
    }
}

impl CodecOptions {
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_header_byte_order(mut self, header_byte_order: HeaderByteOrder) -> Self {
        self.header_byte_order = header_byte_order;
        self
    }
}

/// Byte order of the length header
///
/// `BigEndian` matches images produced by the Qt based desktop tool,
/// which serialized the header through a `QDataStream`.
#[derive(Debug, Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub enum HeaderByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}
