#![no_main]

use std::io::Write;

use breedstrip::strip::try_strip_and_save;
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must never panic the stripper, and whenever the input decodes,
// the PNG it writes must decode to exactly the same pixels.
fuzz_target!(|data: &[u8]| {
    let dir = tempfile::tempdir().expect("could not create a temporary directory");
    let src = dir.path().join("upload");
    let dest = dir.path().join("stripped.png");
    let mut file = std::fs::File::create(&src).unwrap();
    file.write_all(data).unwrap();
    drop(file);

    let Ok(original) = image::ImageReader::open(&src)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .decode()
    else {
        assert!(try_strip_and_save(&src, &dest).is_err());
        assert!(!dest.exists());
        return;
    };

    // PNG cannot hold floating-point pixels, so those are allowed to fail
    if try_strip_and_save(&src, &dest).is_ok() {
        let stripped = image::open(&dest).expect("stripped output must decode");
        assert_eq!(original, stripped);
    }
});
