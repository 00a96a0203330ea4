use crate::{RedactedIdentity, SCHEMA_VERSION};

use serde::{Deserialize, Serialize};

/// Body the client POSTs to the identity relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySubmission {
    pub schema_version: String,
    pub captured_at_utc: Option<String>,
    pub consent: bool,
    pub identity: RedactedIdentity,
}

impl IdentitySubmission {
    /// Submissions are only built once consent has been given, so
    /// `consent` is always `true`.
    pub fn new(identity: RedactedIdentity, captured_at_utc: String) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            captured_at_utc: Some(captured_at_utc),
            consent: true,
            identity,
        }
    }
}
