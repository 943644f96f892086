use crate::error::SteganoError;

pub type Result<T, E = SteganoError> = std::result::Result<T, E>;
