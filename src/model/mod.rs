//! Mappings of objects received from the API, with optional helper methods for ease of use.
//!
//! Only the part of Discord's object model an interactions endpoint needs is mapped here: the
//! inbound interaction payload, the users and members it references, and the enums that make up
//! the interaction response schema.

#[macro_use]
pub(crate) mod utils;

pub mod application;
pub mod id;
pub mod user;

pub mod prelude;

pub use self::application::*;
pub use self::id::*;
pub use self::user::*;
