//! Format-specific encoders for the formats that take a quality setting.
//!
//! None of them write ICC, Exif or XMP; stripped images carry none to write.

#[cfg(feature = "avif")]
pub mod avif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;

/// Quality used for every lossy encode
pub const QUALITY: u8 = 95;
