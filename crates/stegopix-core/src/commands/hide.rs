use std::path::{Path, PathBuf};

use crate::{CodecOptions, SteganoError};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .use_message(message)
        .use_file(data_file)
        .execute()
}
