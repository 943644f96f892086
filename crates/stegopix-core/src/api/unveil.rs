use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{media::CarrierImage, CodecOptions, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, padding and spacing must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file where the unveiled data will be saved to
    pub fn into_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and keep the data in memory, no destination file is needed
    pub fn execute_to_vec(&self) -> Result<Vec<u8>, SteganoError> {
        let Some(secret_media) = self.secret_media.as_ref() else {
            return Err(SteganoError::CarrierNotSet);
        };

        CarrierImage::from_file(secret_media)?.unveil_data(&self.options)
    }

    /// Execute the unveil process and write the data to the destination file
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(destination_file) = self.destination_file.as_ref() else {
            return Err(SteganoError::TargetNotSet);
        };
        let data = self.execute_to_vec()?;

        let mut destination_file =
            File::create(destination_file).map_err(|source| SteganoError::WriteError { source })?;

        destination_file
            .write_all(data.as_slice())
            .map_err(|source| SteganoError::WriteError { source })
    }
}
