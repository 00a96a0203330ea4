pub(crate) mod endpoint;
pub(crate) mod error;

pub use endpoint::resolve_url;
pub use error::{ClientError, Result as ClientResult};
