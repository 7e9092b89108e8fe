//! Runtime configuration, read from the process environment.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `DISCORD_APPLICATION_ID` | yes | |
//! | `DISCORD_PUBLIC_KEY` | yes | |
//! | `DISCORD_TOKEN` | for bot calls and registration | |
//! | `BIND_ADDR` | no | `0.0.0.0:8787` |
//! | `DISCORD_API_BASE` | no | [`API_BASE`] |
//! | `SHUTDOWN_GRACE_SECS` | no | `15` |
//!
//! [`API_BASE`]: crate::constants::API_BASE

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use secrecy::SecretString;

use crate::constants;
use crate::internal::prelude::*;
use crate::interactions_endpoint::Verifier;
use crate::model::id::ApplicationId;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct Config {
    pub application_id: ApplicationId,
    /// Hex encoded Ed25519 key from the developer portal.
    pub public_key: String,
    pub token: Option<SecretString>,
    pub bind_addr: SocketAddr,
    pub api_base: String,
    /// How long shutdown waits for outstanding follow-ups.
    pub shutdown_grace: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("application_id", &self.application_id)
            .field("public_key", &self.public_key)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("bind_addr", &self.bind_addr)
            .field("api_base", &self.api_base)
            .field("shutdown_grace", &self.shutdown_grace)
            .finish()
    }
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first variable that is missing or malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first variable that is missing or malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &str| get(key).ok_or_else(|| Error::Config(format!("{key} is not set")));

        let application_id = require("DISCORD_APPLICATION_ID")?
            .parse::<u64>()
            .map(ApplicationId::new)
            .map_err(|_| Error::Config("DISCORD_APPLICATION_ID must be a snowflake".into()))?;

        let public_key = require("DISCORD_PUBLIC_KEY")?;
        Verifier::from_hex(&public_key)
            .map_err(|why| Error::Config(format!("DISCORD_PUBLIC_KEY: {why}")))?;

        let bind_addr = get("BIND_ADDR")
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|_| Error::Config("BIND_ADDR must be an ip:port pair".into()))?;

        let shutdown_grace = match get("SHUTDOWN_GRACE_SECS") {
            Some(secs) => Duration::from_secs(secs.parse().map_err(|_| {
                Error::Config("SHUTDOWN_GRACE_SECS must be a whole number of seconds".into())
            })?),
            None => DEFAULT_SHUTDOWN_GRACE,
        };

        Ok(Self {
            application_id,
            public_key,
            token: get("DISCORD_TOKEN").map(SecretString::new),
            bind_addr,
            api_base: get("DISCORD_API_BASE").unwrap_or_else(|| constants::API_BASE.to_string()),
            shutdown_grace,
        })
    }

    /// The verifier for [`Self::public_key`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the key is not a valid Ed25519 public key.
    pub fn verifier(&self) -> Result<Verifier> {
        Verifier::from_hex(&self.public_key)
            .map_err(|why| Error::Config(format!("DISCORD_PUBLIC_KEY: {why}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::interactions_endpoint::tests::{signing_key, to_hex};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn public_key() -> String {
        to_hex(signing_key().verifying_key().as_bytes())
    }

    #[test]
    fn defaults() {
        let key = public_key();
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_APPLICATION_ID", "123"),
            ("DISCORD_PUBLIC_KEY", key.as_str()),
        ]))
        .unwrap();

        assert_eq!(config.application_id, ApplicationId::new(123));
        assert!(config.token.is_none());
        assert_eq!(config.bind_addr, "0.0.0.0:8787".parse().unwrap());
        assert_eq!(config.api_base, constants::API_BASE);
        assert_eq!(config.shutdown_grace, Duration::from_secs(15));
        assert!(config.verifier().is_ok());
    }

    #[test]
    fn overrides() {
        let key = public_key();
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_APPLICATION_ID", "123"),
            ("DISCORD_PUBLIC_KEY", key.as_str()),
            ("DISCORD_TOKEN", "bot-token"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DISCORD_API_BASE", "http://localhost:1234/api"),
            ("SHUTDOWN_GRACE_SECS", "3"),
        ]))
        .unwrap();

        assert!(config.token.is_some());
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.api_base, "http://localhost:1234/api");
        assert_eq!(config.shutdown_grace, Duration::from_secs(3));
        assert!(!format!("{config:?}").contains("bot-token"));
    }

    #[test]
    fn missing_and_malformed() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("DISCORD_APPLICATION_ID"));

        let err = Config::from_lookup(lookup(&[
            ("DISCORD_APPLICATION_ID", "123"),
            ("DISCORD_PUBLIC_KEY", "zz"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let key = public_key();
        let err = Config::from_lookup(lookup(&[
            ("DISCORD_APPLICATION_ID", "123"),
            ("DISCORD_PUBLIC_KEY", key.as_str()),
            ("SHUTDOWN_GRACE_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("SHUTDOWN_GRACE_SECS"));
    }
}
