use super::{CreateActionRow, CreateAttachment, CreateEmbed};
use crate::http::Payload;
use crate::internal::prelude::*;
use crate::model::prelude::*;

/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#create-followup-message)
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[must_use]
pub struct CreateInteractionResponseFollowup {
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<InteractionResponseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embeds: Option<Vec<CreateEmbed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Vec<CreateActionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<MessageFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tts: Option<bool>,

    #[serde(skip)]
    files: Vec<CreateAttachment>,
}

impl CreateInteractionResponseFollowup {
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

    /// Set whether the message is text-to-speech.
    ///
    /// Think carefully before setting this to `true`.
    ///
    /// Defaults to `false`.
    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = Some(tts);
        self
    }

    /// Appends a file to the message.
    pub fn add_file(mut self, file: CreateAttachment) -> Self {
        self.files.push(file);
        self
    }

    /// Appends a list of files to the message.
    pub fn add_files(mut self, files: impl IntoIterator<Item = CreateAttachment>) -> Self {
        self.files.extend(files);
        self
    }

    /// Adds an embed to the message.
    pub fn add_embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    /// Sets the embeds for the message, replacing any that were previously set.
    pub fn embeds(mut self, embeds: Vec<CreateEmbed>) -> Self {
        self.embeds = Some(embeds);
        self
    }

    /// Sets the flags for the message.
    pub fn flags(mut self, flags: MessageFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Adds or removes the ephemeral flag
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        let mut flags = self.flags.unwrap_or_else(MessageFlags::empty);

        if ephemeral {
            flags |= MessageFlags::EPHEMERAL;
        } else {
            flags &= !MessageFlags::EPHEMERAL;
        }

        self.flags = Some(flags);
        self
    }

    /// Sets the components of this message.
    pub fn components(mut self, components: Vec<CreateActionRow>) -> Self {
        self.components = Some(components);
        self
    }

    /// The interaction response `type` this follow-up is tagged with, if any.
    #[must_use]
    pub fn kind(&self) -> Option<InteractionResponseType> {
        self.kind
    }

    /// The files that will be uploaded with this message.
    #[must_use]
    pub fn files(&self) -> &[CreateAttachment] {
        &self.files
    }

    /// Lowers the builder into a request body, separating the attachments from the JSON part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if an attachment has no filename.
    pub fn into_payload(mut self) -> Result<Payload> {
        let files = std::mem::take(&mut self.files);
        Payload::from_body(&self, files)
    }
}

/// Optional parts of a [`deferred_update`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FollowupOptions {
    pub embeds: Option<Vec<CreateEmbed>>,
    pub components: Option<Vec<CreateActionRow>>,
    pub attachments: Vec<CreateAttachment>,
}

/// The message that replaces a deferred placeholder once the slow work is done.
///
/// The body is tagged `"type": 6` and is meant to be posted to the interaction's follow-up
/// webhook, see [`Http::create_followup_message`].
///
/// [`Http::create_followup_message`]: crate::http::Http::create_followup_message
pub fn deferred_update(
    content: impl Into<String>,
    options: FollowupOptions,
) -> CreateInteractionResponseFollowup {
    let FollowupOptions {
        embeds,
        components,
        attachments,
    } = options;

    CreateInteractionResponseFollowup {
        kind: Some(InteractionResponseType::DeferredUpdateMessage),
        content: Some(content.into()),
        embeds,
        components,
        flags: None,
        tts: None,
        files: attachments,
    }
}
