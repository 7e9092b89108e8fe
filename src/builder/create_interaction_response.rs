use super::{CreateActionRow, CreateEmbed};
use crate::model::prelude::*;

/// The synchronous answer to an inbound interaction, returned as the body of the webhook
/// response.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object).
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum CreateInteractionResponse {
    /// Acknowledges a Ping (only valid in Ping interactions).
    ///
    /// Corresponds to Discord's `PONG`.
    Pong,
    /// Responds to an interaction with a message.
    ///
    /// Corresponds to Discord's `CHANNEL_MESSAGE_WITH_SOURCE`.
    Message(CreateInteractionResponseMessage),
    /// Acknowledges the interaction in order to edit a response later. The user sees a loading
    /// state.
    ///
    /// Only `flags` of the message data are sent.
    ///
    /// Corresponds to Discord's `DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE`.
    Defer(CreateInteractionResponseMessage),
    /// For components, acknowledges the interaction in order to edit the original message later;
    /// the user does not see a loading state.
    ///
    /// Corresponds to Discord's `DEFERRED_UPDATE_MESSAGE`.
    DeferredUpdate,
    /// For components, edits the message the component was attached to.
    ///
    /// Corresponds to Discord's `UPDATE_MESSAGE`.
    UpdateMessage(CreateInteractionResponseMessage),
}

impl CreateInteractionResponse {
    /// The wire `type` of this response.
    #[must_use]
    pub fn kind(&self) -> InteractionResponseType {
        match self {
            Self::Pong => InteractionResponseType::Pong,
            Self::Message(_) => InteractionResponseType::ChannelMessageWithSource,
            Self::Defer(_) => InteractionResponseType::DeferredChannelMessageWithSource,
            Self::DeferredUpdate => InteractionResponseType::DeferredUpdateMessage,
            Self::UpdateMessage(_) => InteractionResponseType::UpdateMessage,
        }
    }
}

impl serde::Serialize for CreateInteractionResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap as _;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind())?;

        match self {
            Self::Pong | Self::DeferredUpdate => {},
            Self::Message(data) | Self::UpdateMessage(data) => map.serialize_entry("data", data)?,
            Self::Defer(data) => map.serialize_entry("data", &DeferData {
                flags: data.flags,
            })?,
        }

        map.end()
    }
}

#[derive(Serialize)]
struct DeferData {
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<MessageFlags>,
}

/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-messages).
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[must_use]
pub struct CreateInteractionResponseMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    tts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embeds: Option<Vec<CreateEmbed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<MessageFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Vec<CreateActionRow>>,
}

impl CreateInteractionResponseMessage {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
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

    /// Set the content of the message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    #[inline]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Adds an embed to the message.
    ///
    /// Calling this while editing a message will overwrite existing embeds.
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

    /// Adds or removes the ephemeral flag.
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
}

/// Optional parts of a [`reply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplyOptions {
    pub embeds: Option<Vec<CreateEmbed>>,
    pub components: Option<Vec<CreateActionRow>>,
    pub flags: Option<MessageFlags>,
}

/// The answer to a Ping.
pub fn acknowledge() -> CreateInteractionResponse {
    CreateInteractionResponse::Pong
}

/// A message shown to the invoking user as the response to their command.
///
/// Options left as `None` are omitted from the payload rather than sent as `null`.
pub fn reply(content: impl Into<String>, options: ReplyOptions) -> CreateInteractionResponse {
    let ReplyOptions {
        embeds,
        components,
        flags,
    } = options;

    CreateInteractionResponse::Message(CreateInteractionResponseMessage {
        tts: None,
        content: Some(content.into()),
        embeds,
        flags,
        components,
    })
}

/// A placeholder that shows a loading state until a follow-up replaces it.
///
/// Without flags this is exactly `{"type":5,"data":{}}`.
pub fn defer_reply(flags: Option<MessageFlags>) -> CreateInteractionResponse {
    CreateInteractionResponse::Defer(CreateInteractionResponseMessage {
        flags,
        ..Default::default()
    })
}
