use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::{bs_try, error::TransformFailure, image::Image};

/// Lossless. The pixel format is written as-is: no palettization,
/// no dropping of opaque alpha channels, no reduction of 16-bit data.
pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), TransformFailure> {
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    bs_try!(image.pixels.write_with_encoder(encoder));
    Ok(())
}
