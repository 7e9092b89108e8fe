//! The HTTP module which provides functions for performing requests to endpoints in Discord's
//! API.
//!
//! An interactions endpoint talks to Discord's REST API for two reasons:
//!
//! - follow-up calls against an interaction's webhook, which are authorized by the interaction
//!   token embedded in the path and need no credentials of their own;
//! - bot calls (channel messages, member roles, command registration), which require a bot token.
//!
//! Every request is attempted exactly once. [`Http::send`] and the convenience wrappers built on
//! it are best-effort: failures are logged and reported as `None` rather than as errors, because
//! nobody is waiting for a follow-up's outcome. [`Http::fire`] is the fallible primitive.

#[macro_use]
mod macros;

mod client;
mod error;
mod multipart;
mod request;
mod routing;

use reqwest::Method;

pub use reqwest::{Response, StatusCode};

pub use self::client::*;
pub use self::error::*;
pub use self::multipart::*;
pub use self::request::*;
pub use self::routing::*;

/// A method used for routes.
///
/// This is needed because `reqwest`'s `Method` enum does not derive Copy.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LightMethod {
    /// Indicates that a route is for the `DELETE` method only.
    Delete,
    /// Indicates that a route is for the `GET` method only.
    Get,
    /// Indicates that a route is for the `PATCH` method only.
    Patch,
    /// Indicates that a route is for the `POST` method only.
    Post,
    /// Indicates that a route is for the `PUT` method only.
    Put,
}

impl LightMethod {
    #[must_use]
    pub fn reqwest_method(self) -> Method {
        match self {
            Self::Delete => Method::DELETE,
            Self::Get => Method::GET,
            Self::Patch => Method::PATCH,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
        }
    }
}
