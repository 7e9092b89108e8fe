//! Models about Discord applications and the interactions they receive.

mod command;
mod command_interaction;
mod component;
mod interaction;
mod ping_interaction;

pub use command::*;
pub use command_interaction::*;
pub use component::*;
pub use interaction::*;
pub use ping_interaction::*;
