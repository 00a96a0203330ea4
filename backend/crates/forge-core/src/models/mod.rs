pub mod asset_descriptor;
pub mod asset_registry;
pub mod identity_event;
pub mod identity_record;
pub mod identity_submission;
pub mod lifecycle_status;
pub mod redacted_identity;
