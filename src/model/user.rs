//! User information-related models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::{RoleId, UserId};

/// Information about a user.
///
/// [Discord docs](https://discord.com/developers/docs/resources/user#user-object).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct User {
    /// The unique Id of the user. Can be used to calculate the account's creation date.
    pub id: UserId,
    /// The account's username. Changing username will trigger a discriminator change if the
    /// username+discriminator pair becomes non-unique.
    #[serde(rename = "username")]
    pub name: String,
    /// The user's display name, if it is set. For bots, this is the application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    /// Optional avatar hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Indicator of whether the user is a bot.
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Returns a mention string for the user, in the form `<@id>`.
    #[must_use]
    pub fn mention(&self) -> Mention {
        Mention(self.id)
    }

    /// The name shown in clients: the global name if one is set, the username otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.name)
    }
}

/// A user mention, formatted as `<@id>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mention(pub UserId);

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<@{}>", self.0)
    }
}

impl From<UserId> for Mention {
    fn from(id: UserId) -> Self {
        Self(id)
    }
}

/// Information about a member of a guild, as attached to an interaction.
///
/// [Discord docs](https://discord.com/developers/docs/resources/guild#guild-member-object).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Member {
    /// Attached User struct. Absent from the `resolved` members map, where the user lives in the
    /// sibling `users` map instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// The member's nickname, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Vector of Ids of [`Role`]s given to the member.
    ///
    /// [`Role`]: https://discord.com/developers/docs/topics/permissions#role-object
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mention_and_display_name() {
        let mut user = User {
            id: UserId::new(42),
            name: "ferris".into(),
            ..Default::default()
        };

        assert_eq!(user.mention().to_string(), "<@42>");
        assert_eq!(user.display_name(), "ferris");

        user.global_name = Some("Ferris the Crab".into());
        assert_eq!(user.display_name(), "Ferris the Crab");
    }
}
