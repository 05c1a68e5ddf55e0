use image::{DynamicImage, ImageFormat};

/// A decoded image along with whatever ancillary metadata its container carried.
#[derive(Debug, Clone)]
pub struct Image {
    /// Container format the pixels were decoded from, if known
    pub format: Option<ImageFormat>,
    pub exif: Option<Vec<u8>>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    /// Total size in bytes of the metadata blocks attached to this image
    pub fn metadata_len(&self) -> usize {
        self.exif.as_ref().map_or(0, Vec::len) + self.icc.as_ref().map_or(0, Vec::len)
    }

    pub fn has_metadata(&self) -> bool {
        self.exif.is_some() || self.icc.is_some()
    }
}
