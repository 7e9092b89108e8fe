use std::error::Error as StdError;
use std::fmt;

use reqwest::header::InvalidHeaderValue;
use reqwest::{Response, StatusCode, Url};

use super::LightMethod;

/// A non-success response from Discord, with its body read as text.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ErrorResponse {
    pub status_code: StatusCode,
    pub url: Url,
    pub method: LightMethod,
    pub body: String,
}

impl ErrorResponse {
    // We need a freestanding from-function since we cannot implement an async From-trait.
    pub async fn from_response(r: Response, method: LightMethod) -> Self {
        ErrorResponse {
            status_code: r.status(),
            url: r.url().clone(),
            method,
            body: r.text().await.unwrap_or_else(|_| "[herald] No body to be read".to_string()),
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum HttpError {
    /// When a non-successful status code was received for a request.
    UnsuccessfulRequest(ErrorResponse),
    /// Reqwest's Error contain information on why sending a request failed.
    Request(reqwest::Error),
    /// When parsing an URL failed due to invalid input.
    Url(url::ParseError),
    /// Header value contains invalid input.
    InvalidHeader(InvalidHeaderValue),
}

impl HttpError {
    /// Returns true when the error is caused by an unsuccessful request
    #[must_use]
    pub fn is_unsuccessful_request(&self) -> bool {
        matches!(self, Self::UnsuccessfulRequest(_))
    }

    /// Returns the status code if the error is an unsuccessful request
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::UnsuccessfulRequest(res) => Some(res.status_code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> HttpError {
        HttpError::Request(error)
    }
}

impl From<url::ParseError> for HttpError {
    fn from(error: url::ParseError) -> HttpError {
        HttpError::Url(error)
    }
}

impl From<InvalidHeaderValue> for HttpError {
    fn from(error: InvalidHeaderValue) -> HttpError {
        HttpError::InvalidHeader(error)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsuccessfulRequest(e) => {
                write!(f, "{} {} answered {}: {}", e.method.reqwest_method(), e.url, e.status_code, e.body)
            },
            Self::Request(_) => f.write_str("Error while sending HTTP request."),
            Self::Url(_) => f.write_str("Provided URL is incorrect."),
            Self::InvalidHeader(_) => f.write_str("Provided value is an invalid header value."),
        }
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Request(inner) => Some(inner),
            Self::Url(inner) => Some(inner),
            Self::InvalidHeader(inner) => Some(inner),
            Self::UnsuccessfulRequest(_) => None,
        }
    }
}
