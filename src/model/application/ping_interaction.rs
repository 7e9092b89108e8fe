use serde::{Deserialize, Serialize};

use crate::internal::prelude::*;
use crate::model::id::{ApplicationId, InteractionId};

/// A ping interaction, which can only be received through an endpoint url.
///
/// Discord sends one when the endpoint URL is saved in the developer portal, and periodically
/// afterwards. It must be answered with a pong.
///
/// A ping is answered no matter what else it carries, so every field is optional and a
/// malformed one is treated as absent.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-structure).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[non_exhaustive]
pub struct PingInteraction {
    /// Id of the interaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InteractionId>,
    /// Id of the application this interaction is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<ApplicationId>,
    /// A continuation token for responding to the interaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl PingInteraction {
    /// Reads whatever fields of `value` parse, leaving the rest empty.
    pub(crate) fn lenient(value: &Value) -> Self {
        let field = |name: &str| value.get(name).cloned().unwrap_or(Value::Null);

        Self {
            id: serde_json::from_value(field("id")).ok().flatten(),
            application_id: serde_json::from_value(field("application_id")).ok().flatten(),
            token: field("token").as_str().map(str::to_owned),
        }
    }
}
