use crate::StatusLine;

use serde::Serialize;

/// What happened to an identity submission. The local save has succeeded
/// in every variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BindOutcome {
    /// No relay endpoint configured; nothing left the client
    BoundLocally,
    /// Relay endpoint accepted the redacted identity
    BoundAndPosted,
    /// Relay endpoint configured but consent was not given
    ConsentRequired,
    /// Relay endpoint rejected the POST or could not be reached
    PostFailed { reason: String },
}

impl BindOutcome {
    pub fn status_line(&self) -> StatusLine {
        match self {
            Self::BoundLocally => StatusLine::info("bound locally (no network calls)"),
            Self::BoundAndPosted => StatusLine::info("bound locally + posted to endpoint"),
            Self::ConsentRequired => StatusLine::error("consent required to post identity"),
            Self::PostFailed { .. } => StatusLine::error("bound locally; endpoint post failed"),
        }
    }
}
