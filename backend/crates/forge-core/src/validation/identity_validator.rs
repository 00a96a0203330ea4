//! Server-side validation of identity submissions.
//!
//! Checks run in a fixed order and the first failure wins:
//! JSON parse, `schema_version`, `consent`, email length, handle length,
//! `token_sha256` format.

use crate::{IdentityEvent, IdentityRejection, RedactedIdentity, SCHEMA_VERSION};

use chrono::{DateTime, Utc};
use serde_json::Value;

pub const MAX_EMAIL_LENGTH: usize = 320;
pub const MAX_HANDLE_LENGTH: usize = 160;

const TOKEN_SHA256_LENGTH: usize = 64;

/// A submission that passed every check, with fields normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedIdentity {
    pub identity: RedactedIdentity,
    pub captured_at_utc: Option<String>,
}

impl ValidatedIdentity {
    /// Stamp the server-owned fields and produce the sink event.
    pub fn into_event(self, received_at: DateTime<Utc>) -> IdentityEvent {
        IdentityEvent::new(self.identity, self.captured_at_utc, received_at)
    }
}

/// Decode a request body.
///
/// An empty body decodes to `null`. A body whose JSON value is a string is
/// decoded a second time, so a double-encoded payload is accepted.
pub fn parse_body(bytes: &[u8]) -> Result<Value, IdentityRejection> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::String(raw)) => {
            serde_json::from_str(&raw).map_err(|_| IdentityRejection::InvalidJson)
        }
        Ok(value) => Ok(value),
        Err(_) => Err(IdentityRejection::InvalidJson),
    }
}

/// Validate a decoded submission and normalise its identity fields.
///
/// Non-string identity fields are treated as absent and a non-object
/// `identity` as empty. Blank strings skip the length and format checks.
pub fn validate_submission(body: &Value) -> Result<ValidatedIdentity, IdentityRejection> {
    if body.get("schema_version").and_then(Value::as_str) != Some(SCHEMA_VERSION) {
        return Err(IdentityRejection::SchemaVersionInvalid);
    }

    if body.get("consent") != Some(&Value::Bool(true)) {
        return Err(IdentityRejection::ConsentRequired);
    }

    let identity = body.get("identity");
    let email = string_field(identity, "email").map(|s| s.trim().to_lowercase());
    let handle = string_field(identity, "handle").map(|s| s.trim().to_string());
    let token_sha256 = string_field(identity, "token_sha256").map(|s| s.trim().to_string());

    if let Some(ref email) = email
        && utf16_len(email) > MAX_EMAIL_LENGTH
    {
        return Err(IdentityRejection::EmailTooLong);
    }

    if let Some(ref handle) = handle
        && utf16_len(handle) > MAX_HANDLE_LENGTH
    {
        return Err(IdentityRejection::HandleTooLong);
    }

    if let Some(ref token) = token_sha256
        && !token.is_empty()
        && !is_token_sha256(token)
    {
        return Err(IdentityRejection::TokenSha256Invalid);
    }

    let captured_at_utc = body
        .get("captured_at_utc")
        .and_then(Value::as_str)
        .map(String::from);

    Ok(ValidatedIdentity {
        identity: RedactedIdentity {
            email,
            handle,
            token_sha256,
        },
        captured_at_utc,
    })
}

/// Length in UTF-16 code units, so a character outside the BMP counts twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn string_field<'a>(identity: Option<&'a Value>, name: &str) -> Option<&'a str> {
    identity.and_then(|id| id.get(name)).and_then(Value::as_str)
}

/// True for exactly 64 hex digits, either case.
pub fn is_token_sha256(candidate: &str) -> bool {
    candidate.len() == TOKEN_SHA256_LENGTH && hex::decode(candidate).is_ok()
}
