use std::path::Path;

use crate::{CodecOptions, SteganoError};

pub fn unveil(
    secret_media: &Path,
    output_file: &Path,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_file(output_file)
        .execute()
}
