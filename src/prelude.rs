//! A set of exports which can be helpful to use.
//!
//! Note that the `HeraldError` re-export is equivalent to [`herald::Error`], although is
//! re-exported as a separate name to remove likely ambiguity with other crate error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use herald::prelude::*;
//! ```
//!
//! [`herald::Error`]: crate::Error

pub use crate::dispatch::{CommandHandler, Context, Dispatcher, Outcome};
pub use crate::error::Error as HeraldError;
pub use crate::http::{FollowUpTarget, Http, HttpError};
pub use crate::model::user::Mention;
