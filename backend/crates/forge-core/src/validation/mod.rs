pub mod identity_rejection;
pub mod identity_validator;
