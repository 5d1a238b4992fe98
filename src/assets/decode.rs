use std::path::Path;

use image::DynamicImage;

use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Read and decode one frame file. The format is sniffed from the file contents.
pub fn decode_frame(path: &Path) -> FlipbookResult<DynamicImage> {
    let decode_err = |source| FlipbookError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let bytes = std::fs::read(path).map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    decode_frame_bytes(&bytes).map_err(decode_err)
}

pub fn decode_frame_bytes(bytes: &[u8]) -> Result<DynamicImage, image::ImageError> {
    image::load_from_memory(bytes)
}
