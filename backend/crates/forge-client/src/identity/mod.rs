pub(crate) mod bind_outcome;
pub(crate) mod identity_form;
pub(crate) mod identity_relay;
pub(crate) mod identity_store;
pub(crate) mod load_result;

pub use bind_outcome::BindOutcome;
pub use identity_form::IdentityForm;
pub use identity_relay::IdentityRelay;
pub use identity_store::{IDENTITY_STORAGE_KEY, IdentityStore};
pub use load_result::LoadResult;
