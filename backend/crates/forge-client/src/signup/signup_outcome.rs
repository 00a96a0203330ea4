use crate::StatusLine;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SignupOutcome {
    /// Email field was blank; nothing happens and the form stays open
    Ignored,
    /// No signup endpoint configured
    NotConfigured,
    Subscribed,
    Failed { reason: String },
}

impl SignupOutcome {
    /// `None` when the status element should be left untouched.
    pub fn status_line(&self) -> Option<StatusLine> {
        match self {
            Self::Ignored => None,
            Self::NotConfigured => Some(StatusLine::info(
                "Email signup not configured. Set EMAIL_SIGNUP_URL in config.js to enable server integration.",
            )),
            Self::Subscribed => Some(StatusLine::info(
                "Success! Check your email for your first dispatch.",
            )),
            Self::Failed { .. } => Some(StatusLine::error(
                "Something went wrong. Please try again.",
            )),
        }
    }

    /// Only a successful subscription resets the form.
    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Subscribed)
    }
}
