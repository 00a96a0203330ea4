pub mod error;
pub mod hashing;
pub mod html;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use hashing::sha256_hex;
pub use html::escape_html;
pub use models::asset_descriptor::AssetDescriptor;
pub use models::asset_registry::AssetRegistry;
pub use models::identity_event::{EVENT_SOURCE, IdentityEvent, format_utc};
pub use models::identity_record::IdentityRecord;
pub use models::identity_submission::IdentitySubmission;
pub use models::lifecycle_status::LifecycleStatus;
pub use models::redacted_identity::RedactedIdentity;
pub use validation::identity_rejection::IdentityRejection;
pub use validation::identity_validator::{
    MAX_EMAIL_LENGTH, MAX_HANDLE_LENGTH, ValidatedIdentity, is_token_sha256, parse_body,
    validate_submission,
};

/// Wire schema version shared by the client submission and the sink event.
pub const SCHEMA_VERSION: &str = "v1";
