use std::fmt::{Debug, Display};

/// The one failure kind of the tool: decode, encode and filesystem errors
/// during a strip-and-save all end up here and are reported the same way.
pub struct TransformFailure(pub String);

impl Display for TransformFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for TransformFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TransformFailure").field(&self.0).finish()
    }
}

impl std::error::Error for TransformFailure {}

#[macro_export]
macro_rules! bs_err {
    ($msg:expr) => {
        $crate::error::TransformFailure(format!(
            "breedstrip: {} @ {}:{}:{}",
            $msg,
            file!(),
            line!(),
            column!()
        ))
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::bs_err!(format!($fmt, $($arg)+))
    };
}

#[macro_export]
macro_rules! bs_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::bs_err!(err));
            }
        }
    };
}
