//! Downstream delivery of identity events.

mod error;
mod http_sink;

pub use error::{Result as SinkResult, SinkError};
pub use http_sink::HttpSink;

use async_trait::async_trait;
use forge_core::IdentityEvent;

/// Where accepted identity events go. One delivery attempt per call.
#[async_trait]
pub trait IdentitySink: Send + Sync {
    async fn deliver(&self, event: &IdentityEvent) -> SinkResult<()>;
}
