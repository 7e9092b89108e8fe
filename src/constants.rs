//! A set of constants used by the library.

use std::time::Duration;

/// The base URL of the versioned Discord REST API.
pub const API_BASE: &str = "https://discord.com/api/v10";

/// The [UserAgent] sent along with every request.
///
/// [UserAgent]: ::reqwest::header::USER_AGENT
pub const USER_AGENT: &str =
    concat!("DiscordBot (https://github.com/herald-rs/herald, ", env!("CARGO_PKG_VERSION"), ")");

/// Header carrying the hex encoded Ed25519 signature of an inbound interaction.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";

/// Header carrying the timestamp that was signed together with the request body.
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Body of the 401 response sent for requests that fail signature verification.
pub const BAD_SIGNATURE_BODY: &str = "Bad request signature.";

/// Value of the `error` field sent for interactions nobody handles.
pub const UNKNOWN_TYPE_ERROR: &str = "Unknown Type";

/// Time Discord waits for the initial interaction response before showing a failure.
pub const INITIAL_RESPONSE_DEADLINE: Duration = Duration::from_secs(3);

/// How long an interaction token can be used for follow-up calls.
pub const INTERACTION_TOKEN_LIFETIME: Duration = Duration::from_secs(15 * 60);

