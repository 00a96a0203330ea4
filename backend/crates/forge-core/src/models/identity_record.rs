use crate::{RedactedIdentity, sha256_hex};

use serde::{Deserialize, Serialize};

/// Identity captured from the access form and persisted client-side.
///
/// The raw `token` stays on the client. Anything that leaves the client
/// goes through [`IdentityRecord::redacted`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityRecord {
    pub email: Option<String>,
    pub handle: Option<String>,
    pub token: Option<String>,
}

impl IdentityRecord {
    /// Build a record from raw form values. Whitespace is trimmed and
    /// blank values become `None`.
    pub fn from_form(email: &str, handle: &str, token: &str) -> Self {
        Self {
            email: normalize_field(email),
            handle: normalize_field(handle),
            token: normalize_field(token),
        }
    }

    /// Network-safe copy: email and handle pass through, the token is
    /// replaced by its SHA-256 hex digest.
    pub fn redacted(&self) -> RedactedIdentity {
        RedactedIdentity {
            email: self.email.clone(),
            handle: self.handle.clone(),
            token_sha256: self.token.as_deref().map(sha256_hex),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.handle.is_none() && self.token.is_none()
    }
}

fn normalize_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
