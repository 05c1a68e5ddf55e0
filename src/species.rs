use strum::{Display, IntoStaticStr, VariantArray};

/// Which breed folder an upload belongs in.
#[derive(Display, IntoStaticStr, VariantArray, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Species {
    Cat,
    #[default]
    Dog,
}

impl Species {
    /// Case-insensitive match on `"cat"`. Anything else, including garbage
    /// and the empty string, is a dog.
    pub fn classify(value: &str) -> Self {
        if value.to_lowercase() == "cat" {
            Species::Cat
        } else {
            Species::Dog
        }
    }

    /// Name of the directory under the breeds root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Species::Cat => "cats",
            Species::Dog => "dogs",
        }
    }
}
