use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

use super::{CommandInteraction, PingInteraction};
use crate::internal::prelude::*;
use crate::model::id::ApplicationId;

/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object)
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Interaction {
    Ping(PingInteraction),
    Command(CommandInteraction),
    /// Component, autocomplete and modal interactions, as well as types Discord adds later. The
    /// payload is kept as-is, since nothing in this crate routes them.
    Unsupported(InteractionType, Value),
}

impl Interaction {
    /// Gets the interaction type
    #[must_use]
    pub fn kind(&self) -> InteractionType {
        match self {
            Self::Ping(_) => InteractionType::Ping,
            Self::Command(_) => InteractionType::Command,
            Self::Unsupported(kind, _) => *kind,
        }
    }

    /// Gets the interaction application Id, if the payload carried one.
    #[must_use]
    pub fn application_id(&self) -> Option<ApplicationId> {
        match self {
            Self::Ping(i) => i.application_id,
            Self::Command(i) => Some(i.application_id),
            Self::Unsupported(_, value) => {
                value.get("application_id").and_then(|id| serde_json::from_value(id.clone()).ok())
            },
        }
    }

    /// Converts this to an [`CommandInteraction`]
    #[must_use]
    pub fn as_command(&self) -> Option<&CommandInteraction> {
        match self {
            Self::Command(i) => Some(i),
            _ => None,
        }
    }

    /// Converts this to an [`CommandInteraction`]
    #[must_use]
    pub fn into_command(self) -> Option<CommandInteraction> {
        match self {
            Self::Command(i) => Some(i),
            _ => None,
        }
    }
}

// Manual impl needed to emulate integer enum tags
impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let map = JsonMap::deserialize(deserializer)?;

        let raw_kind = map.get("type").ok_or_else(|| DeError::missing_field("type"))?.clone();
        let kind: InteractionType = serde_json::from_value(raw_kind).map_err(DeError::custom)?;
        let value = Value::from(map);

        match kind {
            InteractionType::Ping => Ok(Interaction::Ping(PingInteraction::lenient(&value))),
            InteractionType::Command => {
                serde_json::from_value(value).map(Interaction::Command).map_err(DeError::custom)
            },
            kind => Ok(Interaction::Unsupported(kind, value)),
        }
    }
}

impl Serialize for Interaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        match self {
            Self::Ping(i) => i.serialize(serializer),
            Self::Command(i) => i.serialize(serializer),
            Self::Unsupported(_, value) => value.serialize(serializer),
        }
    }
}

enum_number! {
    /// The type of an Interaction.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-type).
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum InteractionType {
        Ping = 1,
        Command = 2,
        Component = 3,
        Autocomplete = 4,
        Modal = 5,
        _ => Unknown(u8),
    }
}

enum_number! {
    /// The type of an interaction response.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-interaction-callback-type).
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum InteractionResponseType {
        /// ACK a ping.
        Pong = 1,
        /// Respond to an interaction with a message.
        ChannelMessageWithSource = 4,
        /// ACK an interaction and edit a response later, the user sees a loading state.
        DeferredChannelMessageWithSource = 5,
        /// For components, ACK an interaction and edit the original message later.
        DeferredUpdateMessage = 6,
        /// For components, edit the message the component was attached to.
        UpdateMessage = 7,
        _ => Unknown(u8),
    }
}

bitflags::bitflags! {
    /// The flags for an interaction response message.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object-message-flags)
    /// ([only some are valid in this context](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-messages))
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// Do not include any embeds when serializing this message.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Interaction message will only be visible to sender and will
        /// be quickly deleted.
        const EPHEMERAL = 1 << 6;
        /// Does not trigger push notifications or desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
    }
}

impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        Ok(Self::from_bits_truncate(u64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ping_ignores_extra_fields() {
        let interaction: Interaction = serde_json::from_value(json!({
            "type": 1,
            "id": "1",
            "application_id": "2",
            "token": "tok",
            "data": {"whatever": true},
            "version": 1,
        }))
        .unwrap();

        assert_eq!(interaction.kind(), InteractionType::Ping);
        assert_eq!(interaction.application_id(), Some(ApplicationId::new(2)));
    }

    #[test]
    fn ping_needs_nothing_but_its_type() {
        for body in [
            json!({"type": 1}),
            json!({"type": 1, "id": "1", "application_id": "x", "token": "t"}),
            json!({"type": 1, "id": "1", "application_id": "2", "token": null}),
        ] {
            let interaction: Interaction = serde_json::from_value(body).unwrap();
            assert_eq!(interaction.kind(), InteractionType::Ping);
        }

        let bare: Interaction = serde_json::from_value(json!({"type": 1})).unwrap();
        assert_eq!(bare.application_id(), None);
    }

    #[test]
    fn unknown_types_are_kept_not_rejected() {
        let interaction: Interaction =
            serde_json::from_value(json!({"type": 42, "application_id": "9"})).unwrap();

        assert_eq!(interaction.kind(), InteractionType::Unknown(42));
        assert!(interaction.as_command().is_none());
        assert_eq!(interaction.application_id(), Some(ApplicationId::new(9)));

        let component: Interaction = serde_json::from_value(json!({"type": 3})).unwrap();
        assert_eq!(component.kind(), InteractionType::Component);
    }

    #[test]
    fn missing_type_is_an_error() {
        assert!(serde_json::from_value::<Interaction>(json!({"id": "1"})).is_err());
    }

    #[test]
    fn response_type_round_trips_through_u8() {
        assert_eq!(u8::from(InteractionResponseType::DeferredChannelMessageWithSource), 5);
        assert_eq!(InteractionResponseType::from(6), InteractionResponseType::DeferredUpdateMessage);
        assert_eq!(InteractionResponseType::from(99), InteractionResponseType::Unknown(99));
        assert_eq!(serde_json::to_value(MessageFlags::EPHEMERAL).unwrap(), json!(64));
    }
}
