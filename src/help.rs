use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::{
    args::DEFAULT_SPECIES,
    layout::{Layout, BREEDS_DIR_VAR, UPLOAD_DIR_VAR},
    species::Species,
};

pub fn maybe_print_help_and_exit(bin_name: &str) {
    match std::env::args_os().nth(1) {
        None => print_help_and_exit(bin_name),
        Some(arg) => {
            if arg.as_os_str() == OsStr::new("--help") || arg.as_os_str() == OsStr::new("-help") {
                print_help_and_exit(bin_name)
            }
        }
    }
}

fn print_help_and_exit(bin_name: &str) -> ! {
    print!("{}", help_text(bin_name));
    std::process::exit(0);
}

fn help_text(bin_name: &str) -> String {
    let defaults = Layout::default();
    let species: Vec<&'static str> = Species::VARIANTS.iter().map(|s| s.into()).collect();

    let mut text = String::new();
    text += &format!("Version: {}\n", version_string());
    text += &format!("License: {}\n", env!("CARGO_PKG_LICENSE"));
    text += &format!("Usage: {bin_name} <filename> [species]\n");
    text += "\n";
    text += "Strips all metadata from <filename> in the upload directory and writes\n";
    text += "a re-encoded copy to the breed directory under a slugified name.\n";
    text += "\n";
    text += &format!(
        "Species: {} (default: {DEFAULT_SPECIES}, anything unrecognized is treated as {DEFAULT_SPECIES})\n",
        species.join(", ")
    );
    text += "\n";
    text += "Environment:\n";
    text += &format!(
        "  {UPLOAD_DIR_VAR:22} upload directory (default: {})\n",
        defaults.upload_dir.display()
    );
    text += &format!(
        "  {BREEDS_DIR_VAR:22} breeds directory (default: {})\n",
        defaults.breeds_dir.display()
    );
    text += &format!("  {:22} log filter (default: warn)\n", "RUST_LOG");
    text
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    format!("breedstrip {version} {cpu}")
}
