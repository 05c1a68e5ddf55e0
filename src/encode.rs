use std::{
    ffi::OsStr,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::ImageFormat;

use crate::{bs_err, bs_try, encoders, error::TransformFailure, image::Image};

/// Writes `image` to `path`, picking the encoder from the destination extension.
///
/// The image is written as given; stripping metadata is the caller's job.
pub fn encode(image: &Image, path: &Path) -> Result<(), TransformFailure> {
    let format = choose_encoding_format(image, path)?;
    log::debug!("encoding {} as {format:?}", path.display());

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| bs_err!("unable to open image '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    match format {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, &mut writer)?,
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, &mut writer)?,
        #[cfg(feature = "avif")]
        ImageFormat::Avif => encoders::avif::encode(image, &mut writer)?,
        // everything else has no quality knob in `image`, so the default encoder is used
        _ => bs_try!(image.pixels.write_to(&mut writer, format)),
    }

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    bs_try!(writer.flush());

    Ok(())
}

fn choose_encoding_format(image: &Image, path: &Path) -> Result<ImageFormat, TransformFailure> {
    let extension = path.extension().unwrap_or(OsStr::new(""));
    // `from_extension` is case-insensitive, so `.JPG` and `.Jpeg` land here too
    if let Some(format) = ImageFormat::from_extension(extension) {
        return Ok(format);
    }
    // if that fails, fall back to the format the pixels came from
    if let Some(format) = image.format {
        return Ok(format);
    }
    Err(bs_err!(
        "no encode delegate for this image format `{}'",
        extension.to_ascii_uppercase().to_string_lossy()
    ))
}
