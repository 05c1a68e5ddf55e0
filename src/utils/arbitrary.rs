//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

/// Characters that show up in names of uploaded photos,
/// weighted towards the ones slug derivation treats specially.
const FILENAME_CHARS: &[char] = &[
    'a', 'b', 'z', 'A', 'Q', 'Z', '0', '7', '9', ' ', '_', '-', '.', '!', '(', ')', '\'', '/',
    'é', 'Ü', 'ß', '猫', '\u{212A}',
];

const EXTENSIONS: &[&str] = &["jpg", "JPG", "jpeg", "png", "PNG", "gif", "bmp", "webp", ""];

#[must_use]
pub fn filename_char(gen: &mut quickcheck::Gen) -> char {
    // mostly picked from the interesting set, occasionally anything at all
    if u8::arbitrary(gen) % 8 == 0 {
        char::arbitrary(gen)
    } else {
        *gen.choose(FILENAME_CHARS).unwrap()
    }
}

#[must_use]
pub fn filename(gen: &mut quickcheck::Gen) -> String {
    let len = usize::arbitrary(gen) % 24;
    let mut name: String = (0..len).map(|_| filename_char(gen)).collect();
    let extension = *gen.choose(EXTENSIONS).unwrap();
    if !extension.is_empty() {
        name.push('.');
        name.push_str(extension);
    }
    name
}
