use serde::Serialize;

use super::multipart::Multipart;
use crate::builder::CreateAttachment;
use crate::internal::prelude::*;

/// The body of an outbound request, before it is lowered to bytes.
///
/// Attachments are kept beside the JSON value rather than inside it, so the caller's builder is
/// never modified by encoding and the JSON part of a multipart request never mentions them.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// Sent as `application/json`.
    Json(Value),
    /// Sent as `multipart/form-data`: one `files[n]` part per attachment followed by a
    /// `payload_json` part.
    Multipart { payload_json: Value, files: Vec<CreateAttachment> },
}

impl Payload {
    /// Picks the body shape for the given JSON body: plain JSON without attachments, multipart
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `body` cannot be represented as JSON.
    pub fn from_body(body: &impl Serialize, files: Vec<CreateAttachment>) -> Result<Self> {
        let mut value = serde_json::to_value(body)
            .map_err(|_| Error::Encoding("request body could not be serialized as JSON"))?;

        if files.is_empty() {
            return Ok(Self::Json(value));
        }

        if let Value::Object(map) = &mut value {
            map.remove("attachments");
            map.remove("files");
        }

        Ok(Self::Multipart {
            payload_json: value,
            files,
        })
    }

    /// Whether the payload will be sent as multipart form data.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }

    /// Lowers the payload to what goes on the wire.
    ///
    /// Encoding the same payload twice yields identical output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if an attachment has an empty filename or the JSON body cannot
    /// be serialized.
    pub fn encode(&self) -> Result<WireRequest> {
        match self {
            Self::Json(value) => serde_json::to_vec(value)
                .map(WireRequest::Json)
                .map_err(|_| Error::Encoding("request body could not be serialized as JSON")),
            Self::Multipart {
                payload_json,
                files,
            } => {
                if files.iter().any(|file| file.filename.is_empty()) {
                    return Err(Error::Encoding("attachment has an empty filename"));
                }

                let payload_json = serde_json::to_string(payload_json)
                    .map_err(|_| Error::Encoding("payload_json could not be serialized"))?;

                Ok(WireRequest::Multipart(Multipart {
                    files: files.clone(),
                    payload_json,
                }))
            },
        }
    }
}

/// An encoded request body.
#[derive(Clone, Debug, PartialEq)]
pub enum WireRequest {
    /// Serialized JSON, sent with `Content-Type: application/json`.
    Json(Vec<u8>),
    Multipart(Multipart),
}
