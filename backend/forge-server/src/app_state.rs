use crate::sink::{HttpSink, IdentitySink};

use std::sync::Arc;

use forge_config::Config;

/// Shared state handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    /// `None` keeps identity capture disabled (every POST answers 501)
    pub sink: Option<Arc<dyn IdentitySink>>,
    pub cors_enabled: bool,
}

impl AppState {
    pub fn new(sink: Option<Arc<dyn IdentitySink>>) -> Self {
        Self {
            sink,
            cors_enabled: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let sink = config
            .identity
            .sink_url()
            .map(|url| Arc::new(HttpSink::new(url)) as Arc<dyn IdentitySink>);

        Self {
            sink,
            cors_enabled: config.server.cors_enabled,
        }
    }

    pub fn identity_capture_enabled(&self) -> bool {
        self.sink.is_some()
    }
}
