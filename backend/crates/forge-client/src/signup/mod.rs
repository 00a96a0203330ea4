pub(crate) mod signup_outcome;
pub(crate) mod signup_relay;
pub(crate) mod utm_params;

pub use signup_outcome::SignupOutcome;
pub use signup_relay::{SIGNUP_TAG, SignupRelay};
pub use utm_params::UtmParams;
