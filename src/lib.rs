//! `breedstrip` removes metadata from uploaded breed photos.
//!
//! An upload is decoded, its pixels are copied into a fresh buffer that carries
//! no Exif, ICC profile or other ancillary data, and the result is re-encoded
//! into the `cats` or `dogs` directory under a slug derived from the filename.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
pub mod layout;
pub mod plan;
pub mod slug;
pub mod species;
pub mod strip;
mod utils;

pub use args::UploadRequest;
pub use error::TransformFailure;
pub use layout::Layout;
pub use plan::{process_upload, UploadPlan};

/// Sets up `log` output on stderr. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // a second call (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env).try_init();
}
