use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult};

use crate::image::Image;

/// Guesses the format based on file contents, not the extension.
///
/// Pixels are returned exactly as stored; Exif orientation is not applied.
/// A metadata block that cannot be read is treated as absent.
pub fn decode(file: &Path) -> ImageResult<Image> {
    let reader = ImageReader::open(file)?.with_guessed_format()?;
    let format = reader.format();

    let mut decoder = reader.into_decoder()?;
    let icc = decoder.icc_profile().unwrap_or_else(|e| {
        log::debug!("ignoring unreadable ICC profile in {}: {e}", file.display());
        None
    });
    let exif = decoder.exif_metadata().unwrap_or_else(|e| {
        log::debug!("ignoring unreadable Exif in {}: {e}", file.display());
        None
    });
    let pixels = DynamicImage::from_decoder(decoder)?;

    Ok(Image {
        format,
        exif,
        icc,
        pixels,
    })
}
