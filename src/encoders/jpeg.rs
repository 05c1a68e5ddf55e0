use std::io::Write;

use image::codecs::jpeg::JpegEncoder;

use crate::{bs_try, error::TransformFailure, image::Image};

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), TransformFailure> {
    let encoder = JpegEncoder::new_with_quality(writer, super::QUALITY);
    // alpha and 16-bit pixels are not converted; the encoder rejects them
    bs_try!(image.pixels.write_with_encoder(encoder));
    Ok(())
}
