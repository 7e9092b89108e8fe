use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;

use serde_json::Error as JsonError;

use crate::http::HttpError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one type, rather than the
/// usual 2 (`Result<T, Error>`). This is because all functions that return a result return
/// herald's [`Error`], so this is implied, and a "simpler" result is used.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A common error enum returned by most of the library's functionality within a custom
/// [`Result`].
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An error while decoding or encoding a JSON payload.
    Json(JsonError),
    /// An error from the [`http`] module.
    ///
    /// [`http`]: crate::http
    Http(HttpError),
    /// An `std::io` error.
    Io(IoError),
    /// A response payload could not be lowered into a request body, e.g. an attachment without a
    /// filename.
    Encoding(&'static str),
    /// A required configuration value was missing or malformed.
    Config(String),
    /// An error from the `url` crate.
    Url(String),
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

impl From<HttpError> for Error {
    fn from(e: HttpError) -> Error {
        Error::Http(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(HttpError::Request(e))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(inner) => fmt::Display::fmt(&inner, f),
            Self::Http(inner) => fmt::Display::fmt(&inner, f),
            Self::Io(inner) => fmt::Display::fmt(&inner, f),
            Self::Encoding(msg) => write!(f, "payload encoding failed: {msg}"),
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Url(msg) => write!(f, "invalid url: {msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Json(inner) => Some(inner),
            Self::Http(inner) => Some(inner),
            Self::Io(inner) => Some(inner),
            _ => None,
        }
    }
}
