use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{CommandOptionType, CommandType};
use crate::internal::prelude::*;
use crate::model::id::{
    ApplicationId,
    ChannelId,
    CommandId,
    GuildId,
    InteractionId,
    RoleId,
    UserId,
};
use crate::model::user::{Member, User};

/// An interaction when a user invokes a slash command.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CommandInteraction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    pub application_id: ApplicationId,
    /// The data of the interaction which was triggered.
    pub data: CommandData,
    /// The guild Id this interaction was sent from, if there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<GuildId>,
    /// The channel Id this interaction was sent from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    /// The `member` data for the invoking user.
    ///
    /// **Note**: It is only present if the interaction is triggered in a guild.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Box<Member>>,
    /// The `user` object for the invoking user.
    ///
    /// **Note**: Only present when the command was invoked in a DM. Use [`Self::actor`] to get the
    /// invoking user regardless of where the command ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// A continuation token for responding to the interaction.
    pub token: String,
    /// The selected language of the invoking user.
    #[serde(default)]
    pub locale: String,
}

impl CommandInteraction {
    /// The user who invoked the command: `member.user` inside a guild, `user` in a DM.
    #[must_use]
    pub fn actor(&self) -> Option<&User> {
        self.member.as_ref().and_then(|m| m.user.as_ref()).or(self.user.as_ref())
    }
}

/// The command data payload.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-data-structure).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CommandData {
    /// The Id of the invoked command.
    pub id: CommandId,
    /// The name of the invoked command.
    pub name: String,
    /// The application command type of the triggered application command.
    #[serde(rename = "type", default)]
    pub kind: CommandType,
    /// The parameters and the given values. The converted objects from the given options.
    #[serde(default)]
    pub resolved: CommandDataResolved,
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
    /// The Id of the guild the command is registered to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<GuildId>,
}

impl CommandData {
    /// Looks up the value of the first top-level option named `name`.
    ///
    /// Returns `None` when no such option was sent, which is how Discord represents optional
    /// parameters the user left empty.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.options.iter().find(|opt| opt.name == name).and_then(|opt| opt.value.as_ref())
    }

    /// Resolves a user option through [`Self::resolved`].
    #[must_use]
    pub fn get_user(&self, name: &str) -> Option<&User> {
        let id = self.get_value(name)?.as_str()?.parse::<UserId>().ok()?;
        self.resolved.users.get(&id)
    }
}

/// The resolved data of a command data interaction payload. It contains the objects of
/// [`CommandDataOption`]s.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-resolved-data-structure).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CommandDataResolved {
    /// The resolved users.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub users: HashMap<UserId, User>,
    /// The resolved partial members.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub members: HashMap<UserId, Member>,
    /// The resolved roles, left as raw JSON.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<RoleId, Value>,
    /// The resolved partial channels, left as raw JSON.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub channels: HashMap<ChannelId, Value>,
}

/// A set of a parameter and a value from the user.
///
/// All options have names and an option can either be a parameter and input `value` or it can
/// denote a sub-command or group, in which case it will contain a top-level key and another vector
/// of `options`.
///
/// Their resolved objects can be found on [`CommandData::resolved`].
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-interaction-data-option-structure).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[non_exhaustive]
pub struct CommandDataOption {
    /// The name of the parameter.
    pub name: String,
    /// The option type.
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    /// The given value: a string, number or boolean. Ids of users, channels and roles arrive as
    /// strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Nested options of a sub-command or sub-command group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandDataOption>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ship_data() -> CommandData {
        serde_json::from_value(json!({
            "id": "100",
            "name": "ship",
            "type": 1,
            "options": [
                {"name": "user1", "type": 6, "value": "11"},
                {"name": "user2", "type": 6, "value": "22"},
                {"name": "text", "type": 3, "value": "hello"},
            ],
            "resolved": {
                "users": {
                    "11": {"id": "11", "username": "alice"},
                    "22": {"id": "22", "username": "bob"},
                },
            },
        }))
        .unwrap()
    }

    #[test]
    fn get_value_finds_options_by_name() {
        let data = ship_data();

        assert_eq!(data.get_value("text"), Some(&json!("hello")));
        assert_eq!(data.get_value("missing"), None);
    }

    #[test]
    fn get_user_goes_through_resolved() {
        let data = ship_data();

        assert_eq!(data.get_user("user1").map(|u| u.name.as_str()), Some("alice"));
        assert_eq!(data.get_user("user2").map(|u| u.name.as_str()), Some("bob"));
        assert!(data.get_user("text").is_none());
    }

    #[test]
    fn actor_prefers_member_user() {
        let interaction: CommandInteraction = serde_json::from_value(json!({
            "id": "1",
            "application_id": "2",
            "token": "tok",
            "data": {"id": "3", "name": "number"},
            "member": {"user": {"id": "77", "username": "guildie"}, "roles": []},
            "guild_id": "5",
        }))
        .unwrap();
        assert_eq!(interaction.actor().map(|u| u.id), Some(UserId::new(77)));

        let dm: CommandInteraction = serde_json::from_value(json!({
            "id": "1",
            "application_id": "2",
            "token": "tok",
            "data": {"id": "3", "name": "number"},
            "user": {"id": "88", "username": "dm-er"},
        }))
        .unwrap();
        assert_eq!(dm.actor().map(|u| u.id), Some(UserId::new(88)));
    }
}
