use thiserror::Error;

/// Reasons the identity endpoint refuses a submission with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentityRejection {
    #[error("request body is not valid JSON")]
    InvalidJson,

    #[error("schema_version must be \"v1\"")]
    SchemaVersionInvalid,

    #[error("consent must be true")]
    ConsentRequired,

    #[error("identity.email exceeds 320 characters")]
    EmailTooLong,

    #[error("identity.handle exceeds 160 characters")]
    HandleTooLong,

    #[error("identity.token_sha256 is not a 64 character hex digest")]
    TokenSha256Invalid,
}

impl IdentityRejection {
    /// Machine-readable code returned in the `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::SchemaVersionInvalid => "schema_version_invalid",
            Self::ConsentRequired => "consent_required",
            Self::EmailTooLong => "email_too_long",
            Self::HandleTooLong => "handle_too_long",
            Self::TokenSha256Invalid => "token_sha256_invalid",
        }
    }
}
