use std::borrow::Cow;

use crate::model::id::*;

/// A macro for defining routes as well as the kind of authorization they need. Takes as input a
/// list of route definitions, and generates a definition for the `Route` enum and implements
/// methods on it.
macro_rules! routes {
    ($lt:lifetime, {
        $(
            $name:ident $({ $($field_name:ident: $field_type:ty),* })?,
            $path:expr,
            $bot_auth:expr;
        )+
    }) => {
        #[derive(Clone, Copy, Debug)]
        pub enum Route<$lt> {
            $(
                $name $({ $($field_name: $field_type),* })?,
            )+
        }

        impl<$lt> Route<$lt> {
            /// The path of this route relative to the API base, starting with a `/`.
            #[must_use]
            pub fn path(self) -> Cow<'static, str> {
                match self {
                    $(
                        Self::$name $({ $($field_name),* })? => $path.into(),
                    )+
                }
            }

            /// The name of the route, for logging without leaking interaction tokens.
            #[must_use]
            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        Self::$name {..} => stringify!($name),
                    )+
                }
            }

            /// Whether requests to this route carry the bot token.
            ///
            /// Interaction webhooks are authorized by the token in their path instead.
            #[must_use]
            pub fn requires_bot_auth(&self) -> bool {
                match self {
                    $(
                        Self::$name {..} => $bot_auth,
                    )+
                }
            }
        }
    };
}

// This macro takes as input a list of route definitions, represented in the following way:
// 1. The first line defines an enum variant representing an endpoint.
// 2. The second line provides the path for that endpoint.
// 3. The third line indicates whether the endpoint needs the bot token.
routes! ('a, {
    ChannelMessage { channel_id: ChannelId, message_id: MessageId },
    api!("/channels/{}/messages/{}", channel_id, message_id),
    true;

    ChannelMessages { channel_id: ChannelId },
    api!("/channels/{}/messages", channel_id),
    true;

    GuildMemberRole { guild_id: GuildId, user_id: UserId, role_id: RoleId },
    api!("/guilds/{}/members/{}/roles/{}", guild_id, user_id, role_id),
    true;

    Commands { application_id: ApplicationId },
    api!("/applications/{}/commands", application_id),
    true;

    WebhookOriginalInteractionResponse { application_id: ApplicationId, token: &'a str },
    api!("/webhooks/{}/{}/messages/@original", application_id, token),
    false;

    WebhookFollowupMessage { application_id: ApplicationId, token: &'a str, message_id: MessageId },
    api!("/webhooks/{}/{}/messages/{}", application_id, token, message_id),
    false;

    WebhookFollowupMessages { application_id: ApplicationId, token: &'a str },
    api!("/webhooks/{}/{}", application_id, token),
    false;
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        let application_id = ApplicationId::new(1);

        assert_eq!(
            Route::WebhookFollowupMessages {
                application_id,
                token: "tok",
            }
            .path(),
            "/webhooks/1/tok"
        );
        assert_eq!(
            Route::WebhookFollowupMessage {
                application_id,
                token: "tok",
                message_id: MessageId::new(9),
            }
            .path(),
            "/webhooks/1/tok/messages/9"
        );
        assert_eq!(
            Route::WebhookOriginalInteractionResponse {
                application_id,
                token: "tok",
            }
            .path(),
            "/webhooks/1/tok/messages/@original"
        );
        assert_eq!(
            Route::GuildMemberRole {
                guild_id: GuildId::new(2),
                user_id: UserId::new(3),
                role_id: RoleId::new(4),
            }
            .path(),
            "/guilds/2/members/3/roles/4"
        );
        assert_eq!(
            Route::Commands {
                application_id,
            }
            .path(),
            "/applications/1/commands"
        );
    }

    #[test]
    fn name_hides_token() {
        let route = Route::WebhookFollowupMessages {
            application_id: ApplicationId::new(1),
            token: "tok",
        };

        assert_eq!(route.name(), "WebhookFollowupMessages");
    }

    #[test]
    fn only_webhooks_skip_bot_auth() {
        let application_id = ApplicationId::new(1);

        assert!(!Route::WebhookFollowupMessages {
            application_id,
            token: "tok",
        }
        .requires_bot_auth());
        assert!(Route::ChannelMessages {
            channel_id: ChannelId::new(5),
        }
        .requires_bot_auth());
        assert!(Route::Commands {
            application_id,
        }
        .requires_bot_auth());
    }
}
