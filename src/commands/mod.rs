//! The bundled slash commands and their registration payload.
//!
//! Commands that answer from data already in the interaction reply synchronously. The ones that
//! fetch a file first defer and deliver their message through the follow-up webhook.

mod basic;
mod upload;

use std::sync::Arc;

use rand::Rng;

pub use self::basic::{Button, Embed, Number, Ship, Text};
pub use self::upload::{Combined, UploadFile, DEFAULT_IMAGE_URL};
use crate::builder::{
    CreateActionRow,
    CreateButton,
    CreateCommand,
    CreateCommandOption,
    CreateEmbed,
    CreateEmbedAuthor,
};
use crate::dispatch::{Dispatcher, DispatcherBuilder};
use crate::http::Http;
use crate::model::prelude::*;

/// Colour of every embed the bundled commands send.
pub const EMBED_COLOUR: u32 = 0xFB05EF;

/// Starts a dispatcher with every bundled command registered; attachments are fetched from
/// `image_url`.
pub fn dispatcher(http: Arc<Http>, image_url: &str) -> DispatcherBuilder {
    Dispatcher::builder(http)
        .command(Text)
        .command(Number)
        .command(Embed)
        .command(Button)
        .command(UploadFile::new(image_url))
        .command(Combined::new(image_url))
        .command(Ship)
}

/// The command definitions to register with Discord, matching [`dispatcher`].
#[must_use]
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("string").description("command description.").add_option(
            CreateCommandOption::new(CommandOptionType::String, "text", "field description.")
                .required(true),
        ),
        CreateCommand::new("number").description("Get a random number between 0 and 100."),
        CreateCommand::new("embed").description("command description."),
        CreateCommand::new("button").description("command description."),
        CreateCommand::new("files").description("command description."),
        CreateCommand::new("combined").description("combined options example."),
        CreateCommand::new("ship")
            .description(
                "Ship two users together, shows their love compatibility percentage and their \
                 ship name.",
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user1", "First user.")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user2", "User to ship")
                    .required(true),
            ),
    ]
}

/// A uniformly chosen integer in `min..=max`.
#[must_use]
pub fn get_random(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

fn example_embed() -> CreateEmbed {
    CreateEmbed::new()
        .colour(EMBED_COLOUR)
        .author(CreateEmbedAuthor::new("Author name").icon_url(""))
        .title("Title")
        .url("https://example.com")
        .description("Description")
}

fn example_buttons() -> Vec<CreateActionRow> {
    vec![CreateActionRow::buttons(vec![
        CreateButton::new_link("https://example.com").label("Open Browser"),
    ])]
}
