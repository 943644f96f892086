use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a length header that cannot describe a message hidden in this image.
    /// For example a negative length or one larger than the pixel count
    #[error("Invalid message size: {0}")]
    InvalidMessageSize(i32),

    /// Represents a payload that does not fit into the carrier image together with its length header
    #[error(
        "Capacity Error: {payload} bytes of data plus the length header do not fit into {capacity} pixels"
    )]
    CapacityExceeded { payload: usize, capacity: usize },

    /// Represents traversal parameters that can never visit a valid pixel sequence,
    /// for example a spacing of zero or a padding outside of the image
    #[error("Degenerate traversal: {0}")]
    DegenerateTraversal(&'static str),

    /// Represents a traversal that wrapped so often that the padding cursor would drop below zero
    #[error("Traversal exhausted: no more pixels can be visited with the given padding and spacing")]
    TraversalExhausted,

    /// Represents a traversal that visits a pixel a second time within one frame,
    /// which would overwrite data hidden earlier
    #[error("Pixel {index} would be visited twice, choose another padding or spacing")]
    PixelCollision { index: usize },

    /// Represents an unsupported carrier media. For example, a JPEG as output or a text file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message or data file")]
    MissingPayload,
}
