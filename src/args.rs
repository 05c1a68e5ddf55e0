//! Command-line arguments: `<filename> [species]`.
//!
//! Two positional arguments don't warrant an argument parsing library,
//! and extra arguments are ignored rather than rejected.

use std::ffi::OsString;

use crate::{bs_err, error::TransformFailure};

pub const DEFAULT_SPECIES: &str = "dog";

/// One upload to process. Species is kept as typed and classified later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Name of the file inside the upload directory
    pub filename: String,
    pub species: String,
}

impl UploadRequest {
    pub fn new(filename: impl Into<String>, species: Option<&str>) -> Self {
        Self {
            filename: filename.into(),
            species: species.unwrap_or(DEFAULT_SPECIES).to_owned(),
        }
    }

    /// Parses the full argument list, including `argv[0]`.
    pub fn from_args(args: Vec<OsString>) -> Result<Self, TransformFailure> {
        let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
        let filename = iter
            .next()
            .ok_or_else(|| bs_err!("no image filename provided"))
            .and_then(into_string)?;
        let species = iter.next().map(into_string).transpose()?;
        if iter.next().is_some() {
            log::debug!("ignoring extra command-line arguments");
        }
        Ok(Self::new(filename, species.as_deref()))
    }
}

fn into_string(arg: OsString) -> Result<String, TransformFailure> {
    arg.into_string()
        .map_err(|s| bs_err!("argument is not valid UTF-8: `{}'", s.to_string_lossy()))
}
