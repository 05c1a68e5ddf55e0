use std::ffi::OsString;

use breedstrip::{help, init_logging, process_upload, Layout, TransformFailure, UploadRequest};

fn main() {
    init_logging();
    help::maybe_print_help_and_exit("breedstrip");
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// A failed upload is not an error here: it has already been reported,
/// and the process still exits normally.
fn real_main(args: Vec<OsString>) -> Result<(), TransformFailure> {
    let request = UploadRequest::from_args(args)?;
    let layout = Layout::from_env();
    process_upload(&request, &layout);
    Ok(())
}
