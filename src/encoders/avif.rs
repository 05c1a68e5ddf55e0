use std::io::Write;

use image::codecs::avif::AvifEncoder;

use crate::{bs_try, error::TransformFailure, image::Image};

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), TransformFailure> {
    let encoder = AvifEncoder::new_with_speed_quality(writer, 4, super::QUALITY);
    // ravif already discards alpha channel automatically if all pixels are opaque,
    // so no need to explicitly convert on our end
    bs_try!(image.pixels.write_with_encoder(encoder));
    Ok(())
}
