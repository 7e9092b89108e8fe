use super::{CreateActionRow, CreateAttachment, CreateEmbed};
use crate::http::Payload;
use crate::internal::prelude::*;

/// A builder to specify the contents of a message sent through the bot's channel endpoints.
///
/// Used by [`Http::send_message`] and [`Http::edit_message`]; on edits, fields left unset are
/// not touched.
///
/// [`Http::send_message`]: crate::http::Http::send_message
/// [`Http::edit_message`]: crate::http::Http::edit_message
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#create-message)
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[must_use]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embeds: Option<Vec<CreateEmbed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Vec<CreateActionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tts: Option<bool>,

    #[serde(skip)]
    files: Vec<CreateAttachment>,
}

impl CreateMessage {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content of the message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    #[inline]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Adds an embed to the message.
    pub fn add_embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    /// Sets the components of this message.
    pub fn components(mut self, components: Vec<CreateActionRow>) -> Self {
        self.components = Some(components);
        self
    }

    /// Set whether the message is text-to-speech.
    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = Some(tts);
        self
    }

    /// Appends a file to the message.
    pub fn add_file(mut self, file: CreateAttachment) -> Self {
        self.files.push(file);
        self
    }

    /// Lowers the builder into a request body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if an attachment has no filename.
    pub fn into_payload(mut self) -> Result<Payload> {
        let files = std::mem::take(&mut self.files);
        Payload::from_body(&self, files)
    }
}
