use serde::{Deserialize, Serialize};

/// Identity fields as they appear on the wire. Never carries a raw token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactedIdentity {
    pub email: Option<String>,
    pub handle: Option<String>,
    pub token_sha256: Option<String>,
}
