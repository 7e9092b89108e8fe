//! Contains tools related to Discord's Interactions Endpoint URL feature.
//!
//! "You can optionally configure an interactions endpoint to receive interactions via HTTP POSTs
//! rather than over Gateway with a bot user."
//!
//! Every POST Discord sends carries an `X-Signature-Ed25519` and an `X-Signature-Timestamp`
//! header. The signature covers the timestamp followed by the raw request body, and must be
//! checked against the application's public key before the body is looked at.
//!
//! <https://discord.com/developers/docs/interactions/overview#setting-up-an-endpoint-validating-security-request-headers>
//!
//! See [`Verifier`] for example usage.

use std::fmt;

/// Parses a hex string into an array of `[u8]`
fn parse_hex<const N: usize>(s: &str) -> Option<[u8; N]> {
    if s.len() != N * 2 {
        return None;
    }

    let mut res = [0; N];
    for (i, byte) in res.iter_mut().enumerate() {
        *byte = u8::from_str_radix(s.get(2 * i..2 * (i + 1))?, 16).ok()?;
    }
    Some(res)
}

/// The public key couldn't be turned into a usable verifying key.
#[derive(Debug)]
pub enum InvalidKey {
    /// The key was not a 64 digit hex string.
    Hex,
    /// The 32 bytes don't describe a valid point on the curve.
    Signature(ed25519_dalek::SignatureError),
}

impl fmt::Display for InvalidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("invalid bot public key: expected a 64 digit hex string"),
            Self::Signature(e) => write!(f, "invalid bot public key: {e}"),
        }
    }
}

impl std::error::Error for InvalidKey {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hex => None,
            Self::Signature(e) => Some(e),
        }
    }
}

/// Used to cryptographically verify incoming interactions HTTP request for authenticity.
///
/// If incoming requests are not verified, Discord will reject the URL for security reasons.
///
/// ```rust
/// use herald::interactions_endpoint::Verifier;
///
/// let verifier =
///     Verifier::from_hex("67c6bd767ca099e79efac9fcce4d2022a63bf7dea780e7f3d813f694c1597089")
///         .expect("valid key");
///
/// // When receiving an HTTP request:
/// # let http_headers = std::collections::HashMap::from([("X-Signature-Ed25519", ""), ("X-Signature-Timestamp", "")]);
/// # let request_body = &[];
/// let signature = http_headers["X-Signature-Ed25519"];
/// let timestamp = http_headers["X-Signature-Timestamp"];
/// if !verifier.verify(signature, timestamp, request_body) {
///     // Send HTTP 401 Unauthorized response
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Verifier {
    public_key: ed25519_dalek::VerifyingKey,
}

impl Verifier {
    /// Creates a new [`Verifier`] from the given public key hex string, as shown in the
    /// application's developer portal.
    ///
    /// # Errors
    ///
    /// [`InvalidKey::Hex`] if the string isn't 64 hex digits, [`InvalidKey::Signature`] if the
    /// decoded bytes aren't a valid key.
    pub fn from_hex(public_key: &str) -> Result<Self, InvalidKey> {
        Self::try_new(parse_hex(public_key.trim()).ok_or(InvalidKey::Hex)?)
    }

    /// Creates a new [`Verifier`] from the public key bytes.
    ///
    /// # Errors
    ///
    /// [`InvalidKey`] if the key isn't cryptographically valid.
    pub fn try_new(public_key: [u8; 32]) -> Result<Self, InvalidKey> {
        Ok(Self {
            public_key: ed25519_dalek::VerifyingKey::from_bytes(&public_key)
                .map_err(InvalidKey::Signature)?,
        })
    }

    /// Verifies a Discord request for authenticity, given the `X-Signature-Ed25519` HTTP header,
    /// `X-Signature-Timestamp` HTTP headers and request body.
    ///
    /// Malformed headers count as a failed verification.
    #[must_use]
    pub fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> bool {
        use ed25519_dalek::Verifier as _;

        let Some(signature_bytes) = parse_hex(signature) else {
            return false;
        };
        let signature = ed25519_dalek::Signature::from_bytes(&signature_bytes);

        let message_to_verify = [timestamp.as_bytes(), body].concat();
        self.public_key.verify(&message_to_verify, &signature).is_ok()
    }
}

/// One-shot verification against raw public key bytes.
///
/// Returns `false` for a public key that is not exactly 32 valid bytes, as well as for any
/// signature mismatch. Prefer building a [`Verifier`] once when handling many requests.
#[must_use]
pub fn verify(body: &[u8], signature: &str, timestamp: &str, public_key: &[u8]) -> bool {
    let Ok(key) = <[u8; 32]>::try_from(public_key) else {
        return false;
    };

    Verifier::try_new(key).is_ok_and(|verifier| verifier.verify(signature, timestamp, body))
}

#[cfg(test)]
pub(crate) mod tests {
    use ed25519_dalek::{Signer, SigningKey};

    use super::*;

    pub(crate) fn signing_key() -> SigningKey {
        SigningKey::from_bytes(&[7; 32])
    }

    pub(crate) fn to_hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    pub(crate) fn sign(key: &SigningKey, timestamp: &str, body: &[u8]) -> String {
        let message = [timestamp.as_bytes(), body].concat();
        to_hex(&key.sign(&message).to_bytes())
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex::<4>("bf7dea78"), Some([0xBF, 0x7D, 0xEA, 0x78]));
        assert_eq!(parse_hex::<4>("bf7dea7"), None);
        assert_eq!(parse_hex::<4>("bf7dea789"), None);
        assert_eq!(parse_hex::<4>("bf7dea7x"), None);
        assert_eq!(parse_hex(""), Some([]));
        assert_eq!(
            parse_hex("67c6bd767ca099e79efac9fcce4d2022a63bf7dea780e7f3d813f694c1597089"),
            Some([
                0x67, 0xC6, 0xBD, 0x76, 0x7C, 0xA0, 0x99, 0xE7, 0x9E, 0xFA, 0xC9, 0xFC, 0xCE, 0x4D,
                0x20, 0x22, 0xA6, 0x3B, 0xF7, 0xDE, 0xA7, 0x80, 0xE7, 0xF3, 0xD8, 0x13, 0xF6, 0x94,
                0xC1, 0x59, 0x70, 0x89
            ])
        );
    }

    #[test]
    fn accepts_valid_signature() {
        let key = signing_key();
        let verifier = Verifier::from_hex(&to_hex(key.verifying_key().as_bytes())).unwrap();
        let body = br#"{"type":1}"#;
        let signature = sign(&key, "1700000000", body);

        assert!(verifier.verify(&signature, "1700000000", body));
        assert!(verify(body, &signature, "1700000000", key.verifying_key().as_bytes()));
    }

    #[test]
    fn rejects_tampering() {
        let key = signing_key();
        let verifier = Verifier::try_new(key.verifying_key().to_bytes()).unwrap();
        let body = br#"{"type":1}"#;
        let signature = sign(&key, "1700000000", body);

        assert!(!verifier.verify(&signature, "1700000001", body));
        assert!(!verifier.verify(&signature, "1700000000", br#"{"type":2}"#));
    }

    #[test]
    fn malformed_input_is_a_failure_not_a_panic() {
        let key = signing_key();
        let verifier = Verifier::try_new(key.verifying_key().to_bytes()).unwrap();

        assert!(!verifier.verify("", "", b""));
        assert!(!verifier.verify("not hex at all", "1", b"{}"));
        assert!(!verifier.verify(&"zz".repeat(64), "1", b"{}"));
        assert!(!verify(b"{}", &"00".repeat(64), "1", &[1, 2, 3]));
        assert!(matches!(Verifier::from_hex("abc"), Err(InvalidKey::Hex)));
    }
}
