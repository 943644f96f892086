use std::path::Path;

use crate::api::capacity::Capacity;
use crate::media::CodecOptions;
use crate::SteganoError;

pub fn capacity(media: &Path, options: &CodecOptions) -> Result<Capacity, SteganoError> {
    crate::api::capacity::inspect(media, options)
}
