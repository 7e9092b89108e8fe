use std::fmt;

use reqwest::header::{HeaderMap as Headers, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, ClientBuilder, Response, Url};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use super::request::{Payload, WireRequest};
use super::routing::Route;
use super::{ErrorResponse, HttpError, LightMethod};
use crate::builder::{CreateCommand, CreateInteractionResponseFollowup, CreateMessage};
use crate::constants;
use crate::internal::prelude::*;
use crate::model::prelude::*;

/// Where follow-ups for one interaction are sent: the application that received it and the
/// interaction's token.
///
/// The token stays valid for [`INTERACTION_TOKEN_LIFETIME`].
///
/// [`INTERACTION_TOKEN_LIFETIME`]: crate::constants::INTERACTION_TOKEN_LIFETIME
#[derive(Clone)]
pub struct FollowUpTarget {
    pub application_id: ApplicationId,
    pub token: String,
}

impl FollowUpTarget {
    #[must_use]
    pub fn new(application_id: ApplicationId, token: impl Into<String>) -> Self {
        Self {
            application_id,
            token: token.into(),
        }
    }

    #[must_use]
    pub fn from_interaction(interaction: &CommandInteraction) -> Self {
        Self::new(interaction.application_id, interaction.token.clone())
    }
}

impl fmt::Debug for FollowUpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FollowUpTarget")
            .field("application_id", &self.application_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    #[cfg(feature = "rustls_backend")]
    let builder = builder.use_rustls_tls();

    #[cfg(all(feature = "native_tls_backend", not(feature = "rustls_backend")))]
    let builder = builder.use_native_tls();

    builder.user_agent(constants::USER_AGENT)
}

/// **Note**: For all member functions that return a [`Result`], the Error kind will be either
/// [`Error::Http`] or [`Error::Json`].
pub struct Http {
    pub(crate) client: Client,
    base: Url,
    token: Option<SecretString>,
}

impl fmt::Debug for Http {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Http").field("base", &self.base.as_str()).finish_non_exhaustive()
    }
}

impl Http {
    /// Creates a client for the API at `base_url`, e.g. [`constants::API_BASE`].
    ///
    /// Without a bot token only the interaction webhook routes can be used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if `base_url` is not an absolute URL, or [`Error::Http`] if the TLS
    /// backend cannot be initialised.
    pub fn new(base_url: &str, token: Option<SecretString>) -> Result<Self> {
        let client = configure_client_backend(Client::builder()).build()?;
        Self::with_client(client, base_url, token)
    }

    /// Like [`Self::new`], reusing an existing `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if `base_url` is not an absolute URL.
    pub fn with_client(client: Client, base_url: &str, token: Option<SecretString>) -> Result<Self> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|_| Error::Url(base_url.to_string()))?;

        if base.cannot_be_a_base() {
            return Err(Error::Url(base_url.to_string()));
        }

        Ok(Self {
            client,
            base,
            token,
        })
    }

    /// The API base every route is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Resolves a route against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] if the joined URL is invalid.
    pub fn route_url(&self, route: Route<'_>) -> Result<Url> {
        let url = format!("{}{}", self.base.as_str().trim_end_matches('/'), route.path());
        Url::parse(&url).map_err(|e| Error::Http(HttpError::Url(e)))
    }

    /// Performs a single request and fails on anything but a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the payload cannot be encoded, [`Error::Config`] if the
    /// route needs a bot token and none was configured, and [`Error::Http`] if the request cannot
    /// be sent or Discord answers with a non-success status.
    #[instrument(skip(self, route, payload), fields(route = route.name()))]
    pub async fn fire(
        &self,
        route: Route<'_>,
        method: LightMethod,
        payload: Option<Payload>,
    ) -> Result<Response> {
        let url = self.route_url(route)?;
        let mut builder = self.client.request(method.reqwest_method(), url);

        let mut headers = Headers::with_capacity(3);
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));

        if route.requires_bot_auth() {
            let token = self
                .token
                .as_ref()
                .ok_or_else(|| Error::Config(format!("{} requires a bot token", route.name())))?;
            let mut value = HeaderValue::from_str(&format!("Bot {}", token.expose_secret()))
                .map_err(HttpError::InvalidHeader)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        match payload.as_ref().map(Payload::encode).transpose()? {
            Some(WireRequest::Json(body)) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                builder = builder.body(body);
            },
            // Setting multipart adds the content-type header with the boundary
            Some(WireRequest::Multipart(multipart)) => {
                builder = builder.multipart(multipart.build_form()?);
            },
            None => {},
        }

        let response = builder.headers(headers).send().await?;
        debug!("Response status: {}", response.status());

        if response.status().is_success() {
            Ok(response)
        } else {
            let error = ErrorResponse::from_response(response, method).await;
            Err(Error::Http(HttpError::UnsuccessfulRequest(error)))
        }
    }

    /// Best-effort version of [`Self::fire`]: any failure is logged and reported as `None`.
    ///
    /// There is no retry.
    pub async fn send(
        &self,
        route: Route<'_>,
        method: LightMethod,
        payload: Option<Payload>,
    ) -> Option<Response> {
        self.deliver(route, method, Ok(payload)).await
    }

    async fn deliver(
        &self,
        route: Route<'_>,
        method: LightMethod,
        payload: Result<Option<Payload>>,
    ) -> Option<Response> {
        let result = match payload {
            Ok(payload) => self.fire(route, method, payload).await,
            Err(why) => Err(why),
        };

        match result {
            Ok(response) => Some(response),
            Err(why) => {
                warn!(?method, route = route.name(), "Request was not delivered: {why}");
                None
            },
        }
    }

    /// Posts a follow-up message to an interaction, e.g. one built with [`deferred_update`].
    ///
    /// [`deferred_update`]: crate::builder::deferred_update
    pub async fn create_followup_message(
        &self,
        target: &FollowUpTarget,
        followup: CreateInteractionResponseFollowup,
    ) -> Option<Response> {
        let route = Route::WebhookFollowupMessages {
            application_id: target.application_id,
            token: &target.token,
        };

        self.deliver(route, LightMethod::Post, followup.into_payload().map(Some)).await
    }

    /// Edits a follow-up message previously sent to an interaction.
    pub async fn edit_followup_message(
        &self,
        target: &FollowUpTarget,
        message_id: MessageId,
        followup: CreateInteractionResponseFollowup,
    ) -> Option<Response> {
        let route = Route::WebhookFollowupMessage {
            application_id: target.application_id,
            token: &target.token,
            message_id,
        };

        self.deliver(route, LightMethod::Patch, followup.into_payload().map(Some)).await
    }

    /// Replaces the deferred placeholder (or earlier reply) of an interaction.
    pub async fn edit_original_interaction_response(
        &self,
        target: &FollowUpTarget,
        followup: CreateInteractionResponseFollowup,
    ) -> Option<Response> {
        let route = Route::WebhookOriginalInteractionResponse {
            application_id: target.application_id,
            token: &target.token,
        };

        self.deliver(route, LightMethod::Patch, followup.into_payload().map(Some)).await
    }

    /// Sends a message to a channel as the bot.
    pub async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Option<Response> {
        let route = Route::ChannelMessages {
            channel_id,
        };

        self.deliver(route, LightMethod::Post, message.into_payload().map(Some)).await
    }

    /// Edits a message the bot sent to a channel.
    pub async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: CreateMessage,
    ) -> Option<Response> {
        let route = Route::ChannelMessage {
            channel_id,
            message_id,
        };

        self.deliver(route, LightMethod::Patch, message.into_payload().map(Some)).await
    }

    /// Adds a single [`RoleId`] to a member of a guild.
    ///
    /// **Note**: Requires the Manage Roles permission and respect of role hierarchy.
    pub async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Option<Response> {
        let route = Route::GuildMemberRole {
            guild_id,
            user_id,
            role_id,
        };

        self.send(route, LightMethod::Put, None).await
    }

    /// Removes a single [`RoleId`] from a member of a guild.
    ///
    /// **Note**: Requires the Manage Roles permission and respect of role hierarchy.
    pub async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Option<Response> {
        let route = Route::GuildMemberRole {
            guild_id,
            user_id,
            role_id,
        };

        self.send(route, LightMethod::Delete, None).await
    }

    /// Overwrites all global commands of the application with the given list.
    ///
    /// Unlike the other calls this one reports failures, since it is run by an operator.
    ///
    /// # Errors
    ///
    /// See [`Self::fire`].
    pub async fn create_global_commands(
        &self,
        application_id: ApplicationId,
        commands: &[CreateCommand],
    ) -> Result<Vec<Value>> {
        let route = Route::Commands {
            application_id,
        };
        let payload = Payload::from_body(&commands, Vec::new())?;

        let response = self.fire(route, LightMethod::Put, Some(payload)).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl AsRef<Http> for Http {
    fn as_ref(&self) -> &Http {
        self
    }
}
