// MIT/Apache2 License

use std::fmt;

/// Sum error type for easel operations.
///
/// Drawing itself never fails; errors only come out of the persistence layer and out of building textures
/// from raw bytes.
#[derive(Debug)]
pub enum Error {
    /// A string message.
    Msg(String),
    /// A shape record named a kind of shape we do not know about.
    UnknownShape(String),
    /// A shape record could not be turned back into a shape.
    InvalidRecord {
        /// Position of the record in the list it was loaded from.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// A byte slice did not have the length the image format and dimensions call for.
    InvalidTexture { expected: usize, actual: usize },
    /// The JSON document could not be parsed or produced.
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(json) => Some(json),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msg(s) => f.write_str(s),
            Self::UnknownShape(kind) => write!(f, "Unknown shape type \"{}\"", kind),
            Self::InvalidRecord { index, reason } => {
                write!(f, "Shape record #{} is invalid: {}", index, reason)
            }
            Self::InvalidTexture { expected, actual } => write!(
                f,
                "Expected {} bytes of image data, found {}",
                expected, actual
            ),
            #[cfg(feature = "serde")]
            Self::Json(json) => fmt::Display::fmt(json, f),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    #[inline]
    fn from(json: serde_json::Error) -> Self {
        Self::Json(json)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
