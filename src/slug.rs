//! Filename slugs: lowercase ASCII letters, digits and hyphens only.

#[cfg(test)]
use crate::utils::arbitrary;
#[cfg(test)]
use quickcheck::Arbitrary;

/// Removes the last extension from the final path component.
///
/// Leading dots of the component do not start an extension,
/// so `.hidden` is returned unchanged while `photo.tar.gz` becomes `photo.tar`.
pub fn strip_extension(name: &str) -> &str {
    let base_start = name.rfind('/').map_or(0, |i| i + 1);
    let base = &name[base_start..];
    match base.rfind('.') {
        Some(dot) if base[..dot].chars().any(|c| c != '.') => &name[..base_start + dot],
        _ => name,
    }
}

/// Derives the output name for an uploaded file.
///
/// The order is significant: case folding and separator substitution happen
/// before filtering, so `"My_Dog"` becomes `"my-dog"` rather than `"mydog"`.
pub fn slugify(filename: &str) -> String {
    strip_extension(filename)
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            other => other,
        })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

pub fn is_slug(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
#[derive(Debug, Clone)]
struct Filename(String);

#[cfg(test)]
impl Arbitrary for Filename {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(arbitrary::filename(g))
    }
}
