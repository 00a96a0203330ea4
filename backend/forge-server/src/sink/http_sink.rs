use crate::sink::{IdentitySink, SinkError, SinkResult};

use async_trait::async_trait;
use forge_core::IdentityEvent;
use log::debug;

/// POSTs each event as JSON to a webhook URL.
#[derive(Debug, Clone)]
pub struct HttpSink {
    url: String,
    http: reqwest::Client,
}

impl HttpSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }
}

#[async_trait]
impl IdentitySink for HttpSink {
    async fn deliver(&self, event: &IdentityEvent) -> SinkResult<()> {
        let response = self.http.post(&self.url).json(event).send().await?;
        let status = response.status();
        debug!("Sink responded with {status}");

        if !status.is_success() {
            return Err(SinkError::rejected(status.as_u16()));
        }

        Ok(())
    }
}
