//! Herald is a webhook-driven dispatcher for Discord interactions.
//!
//! Discord delivers slash command invocations to an "interactions endpoint URL" as signed HTTP
//! requests and expects an answer within three seconds. Herald verifies the signature, routes the
//! interaction to a [`CommandHandler`], and returns the handler's response. Handlers that need
//! longer answer with a deferred placeholder and finish their work in the background, delivering
//! the result through the interaction's follow-up webhook.
//!
//! The pieces can be used on their own:
//!
//! - [`interactions_endpoint`] verifies request signatures;
//! - [`builder`] creates response, embed, component and command payloads;
//! - [`http`] sends follow-ups and bot requests, encoding attachments as multipart bodies;
//! - [`dispatch`] routes interactions and supervises deferred work;
//! - [`server`] (feature `server`) wires all of it into an axum router.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use herald::builder::{reply, ReplyOptions};
//! use herald::dispatch::{CommandHandler, Context, Dispatcher, Outcome};
//! use herald::http::Http;
//! use herald::async_trait;
//!
//! struct Hello;
//!
//! #[async_trait]
//! impl CommandHandler for Hello {
//!     fn name(&self) -> &str {
//!         "hello"
//!     }
//!
//!     async fn invoke(&self, _ctx: Context) -> Outcome {
//!         reply("Hello!", ReplyOptions::default()).into()
//!     }
//! }
//!
//! # fn main() -> herald::Result<()> {
//! let http = Arc::new(Http::new(herald::constants::API_BASE, None)?);
//! let dispatcher = Dispatcher::builder(http).command(Hello).build();
//! # Ok(())
//! # }
//! ```
//!
//! [`CommandHandler`]: crate::dispatch::CommandHandler
#![doc(html_root_url = "https://docs.rs/herald/*")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::unreadable_literal,
    clippy::wildcard_imports,
    clippy::doc_markdown,
    clippy::missing_panics_doc,
    clippy::new_without_default
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
extern crate serde;

#[macro_use]
mod internal;

pub mod builder;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod http;
pub mod interactions_endpoint;
pub mod model;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

mod error;

pub use crate::error::{Error, Result};

// Re-exports of crates used internally which are already publically exposed.
pub use async_trait::async_trait;
pub use {futures, secrecy};
