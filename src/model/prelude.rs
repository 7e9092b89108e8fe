//! The model prelude re-exports all types in the model sub-modules.
//!
//! This allows for quick and easy access to all of the model types.
//!
//! # Examples
//!
//! Import all model types into scope:
//!
//! ```rust,no_run
//! use herald::model::prelude::*;
//! ```

#[doc(inline)]
pub use super::{application::*, id::*, user::*};
