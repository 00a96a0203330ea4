pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod sink;


pub use api::{
    identity::identity_handler,
    response::{CONTENT_TYPE_JSON, DISABLED_HINT, IdentityResponse},
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
pub use sink::{HttpSink, IdentitySink, SinkError};
