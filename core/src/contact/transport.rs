//! Transport that delivers a contact submission

use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Delivers form-encoded fields to an endpoint
///
/// Only transport failures count: whatever the endpoint answers is accepted.
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn post_form(
        &self,
        endpoint: &str,
        fields: &[(&'static str, String)],
    ) -> Result<(), TransportError>;
}

/// `application/x-www-form-urlencoded` POST over reqwest
#[derive(Debug, Clone, Default)]
pub struct HttpFormTransport {
    client: Client,
}

impl HttpFormTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FormTransport for HttpFormTransport {
    async fn post_form(&self, endpoint: &str, fields: &[(&'static str, String)]) -> Result<(), TransportError> {
        let response = self
            .client
            .post(endpoint)
            .form(fields)
            .send()
            .await
            .inspect_err(|e| warn!("Contact submission failed: {}", e))?;

        // The endpoint replies opaquely; its status is informational.
        debug!("Contact endpoint answered {}", response.status());
        Ok(())
    }
}
