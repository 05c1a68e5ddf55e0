//! Metadata stripping by pixel buffer reconstruction.
//!
//! Rather than trusting every format handler to drop Exif, ICC profiles, text chunks
//! and whatever else a container can carry, the decoded pixels are copied into a
//! freshly allocated buffer of the same color type and dimensions, and only that
//! buffer is handed to the encoder. Nothing but pixel values survives the copy.

use std::path::Path;

use image::{DynamicImage, ImageBuffer, Pixel};

use crate::{
    bs_err, bs_try, decode::decode, encode::encode, error::TransformFailure, image::Image,
};

/// Returns a copy of `image` rebuilt from its raw pixels, with no metadata attached.
///
/// Color type, dimensions and every pixel value are identical to the source.
pub fn rebuild(image: &Image) -> Result<Image, TransformFailure> {
    use DynamicImage::*;
    let pixels = match &image.pixels {
        ImageLuma8(buf) => ImageLuma8(copy_pixels(buf)),
        ImageLumaA8(buf) => ImageLumaA8(copy_pixels(buf)),
        ImageRgb8(buf) => ImageRgb8(copy_pixels(buf)),
        ImageRgba8(buf) => ImageRgba8(copy_pixels(buf)),
        ImageLuma16(buf) => ImageLuma16(copy_pixels(buf)),
        ImageLumaA16(buf) => ImageLumaA16(copy_pixels(buf)),
        ImageRgb16(buf) => ImageRgb16(copy_pixels(buf)),
        ImageRgba16(buf) => ImageRgba16(copy_pixels(buf)),
        ImageRgb32F(buf) => ImageRgb32F(copy_pixels(buf)),
        ImageRgba32F(buf) => ImageRgba32F(copy_pixels(buf)),
        other => return Err(bs_err!("unsupported pixel mode {:?}", other.color())),
    };

    Ok(Image {
        format: image.format,
        exif: None,
        icc: None,
        pixels,
    })
}

/// Allocates a blank buffer of the same size and fills it pixel by pixel, in order.
fn copy_pixels<P: Pixel>(
    source: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let (width, height) = source.dimensions();
    let mut clean = ImageBuffer::new(width, height);
    for (dst, src) in clean.pixels_mut().zip(source.pixels()) {
        *dst = *src;
    }
    clean
}

/// Decodes `src`, rebuilds it without metadata and encodes the result to `dest`.
///
/// `dest` is only opened once decoding and rebuilding have succeeded,
/// so an unreadable source never leaves a destination file behind.
pub fn try_strip_and_save(src: &Path, dest: &Path) -> Result<(), TransformFailure> {
    let image = bs_try!(decode(src));
    if image.has_metadata() {
        log::debug!(
            "dropping {} bytes of metadata from {}",
            image.metadata_len(),
            src.display()
        );
    }
    let clean = rebuild(&image)?;
    encode(&clean, dest)
}

/// Same as [`try_strip_and_save`], but catches the failure:
/// the diagnostic is printed and `false` is returned.
pub fn strip_and_save(src: &Path, dest: &Path) -> bool {
    match try_strip_and_save(src, dest) {
        Ok(()) => true,
        Err(e) => {
            println!("Error: {e}");
            false
        }
    }
}
