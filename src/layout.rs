//! Where uploads are read from and where stripped copies are written.
//!
//! The layout is fixed. The two environment variables exist so the tool can be
//! pointed at a different checkout of the site, or at a scratch directory in tests.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::species::Species;

pub const UPLOAD_DIR_VAR: &str = "BREEDSTRIP_UPLOAD_DIR";
pub const BREEDS_DIR_VAR: &str = "BREEDSTRIP_BREEDS_DIR";

const DEFAULT_UPLOAD_DIR: &str = "upload";
const DEFAULT_BREEDS_DIR: &str = "public/images/breeds";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directory uploaded originals are read from
    pub upload_dir: PathBuf,
    /// Root containing the per-species `cats` and `dogs` directories
    pub breeds_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            breeds_dir: PathBuf::from(DEFAULT_BREEDS_DIR),
        }
    }
}

impl Layout {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var_os(name))
    }

    /// Same as `from_env`, with variables looked up through `get`.
    fn from_vars(get: impl Fn(&str) -> Option<OsString>) -> Self {
        let mut layout = Self::default();
        if let Some(dir) = non_empty(get(UPLOAD_DIR_VAR)) {
            log::debug!("upload directory overridden by {UPLOAD_DIR_VAR}");
            layout.upload_dir = dir;
        }
        if let Some(dir) = non_empty(get(BREEDS_DIR_VAR)) {
            log::debug!("breeds directory overridden by {BREEDS_DIR_VAR}");
            layout.breeds_dir = dir;
        }
        layout
    }

    pub fn species_dir(&self, species: Species) -> PathBuf {
        self.breeds_dir.join(species.dir_name())
    }

    pub fn source_path(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(Path::new(filename))
    }
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
