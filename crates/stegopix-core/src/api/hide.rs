use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::media::frame::ensure_capacity;
use crate::media::{CarrierImage, Persist};
use crate::{CodecOptions, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug)]
enum PayloadSource {
    Message(String),
    File(PathBuf),
}

#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<PayloadSource>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Hide the plain bytes of this text, replaces any file set before
    pub fn with_message(mut self, message: &str) -> Self {
        self.payload = Some(PayloadSource::Message(message.to_string()));
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        if let Some(message) = message {
            self.payload = Some(PayloadSource::Message(message.as_ref().to_string()));
        }
        self
    }

    /// Hide the content of this file, replaces any message set before
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.payload = Some(PayloadSource::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(data_file) = data_file {
            self.payload = Some(PayloadSource::File(data_file));
        }
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let data = match self.payload {
            Some(PayloadSource::Message(message)) => message.into_bytes(),
            Some(PayloadSource::File(data_file)) => {
                fs::read(&data_file).map_err(|source| SteganoError::ReadError { source })?
            }
            None => return Err(SteganoError::MissingPayload),
        };

        let mut carrier = CarrierImage::from_file(&image)?;
        ensure_capacity(data.len(), carrier.pixel_count())?;
        debug!(
            "{} of {} payload bytes used",
            data.len(),
            carrier.max_payload()
        );

        carrier.hide_data(&data, &self.options)?.save_as(&output)
    }
}
