use crate::{RedactedIdentity, SCHEMA_VERSION};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Value the server always writes into `source`.
pub const EVENT_SOURCE: &str = "forge";

/// Canonical event forwarded to the identity sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityEvent {
    pub schema_version: String,
    pub source: String,
    pub received_at_utc: String,
    pub captured_at_utc: Option<String>,
    pub identity: RedactedIdentity,
}

impl IdentityEvent {
    pub fn new(
        identity: RedactedIdentity,
        captured_at_utc: Option<String>,
        received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            source: EVENT_SOURCE.to_string(),
            received_at_utc: format_utc(received_at),
            captured_at_utc,
            identity,
        }
    }
}

/// RFC 3339 in UTC with millisecond precision and a `Z` suffix,
/// e.g. `2026-01-01T12:00:00.000Z`.
pub fn format_utc(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
