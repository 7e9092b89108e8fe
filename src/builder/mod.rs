//! A set of builders used to make using methods on certain structs simpler to use.
//!
//! These are used when not all parameters are required, all parameters are optional, and/or sane
//! default values for required parameters can be applied by a builder.
//!
//! The free functions [`acknowledge`], [`reply`], [`defer_reply`] and [`deferred_update`] cover
//! the outcomes an interaction handler produces; the builder types underneath can be used
//! directly when more control is needed.

mod create_attachment;
mod create_command;
mod create_components;
mod create_embed;
mod create_interaction_response;
mod create_interaction_response_followup;
mod create_message;

pub use create_attachment::*;
pub use create_command::*;
pub use create_components::*;
pub use create_embed::*;
pub use create_interaction_response::*;
pub use create_interaction_response_followup::*;
pub use create_message::*;
