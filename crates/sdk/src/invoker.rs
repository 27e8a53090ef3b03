//! Generic tool invoker for catalog endpoints.

use crate::config::{ApiKey, ClientConfig, DEFAULT_TIMEOUT};
use crate::error::{InvokeError, InvokeResult};
use crate::transport::HttpTransport;
use realestate_core::{EndpointDescriptor, QueryParams};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Runs one catalog endpoint per call: filter and validate the arguments,
/// serialize the query, send a single GET, decode the JSON body.
///
/// Holds no mutable state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ToolInvoker {
    config: Arc<ClientConfig>,
    http: HttpTransport,
}

impl ToolInvoker {
    /// Create a new invoker builder.
    pub fn builder() -> ToolInvokerBuilder {
        ToolInvokerBuilder::new()
    }

    /// Create an invoker from configuration.
    pub fn from_config(config: ClientConfig) -> InvokeResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Invoke `endpoint` with the caller's arguments.
    ///
    /// Validation failures return before any network I/O.
    pub async fn invoke(&self, endpoint: &EndpointDescriptor, arguments: &Value) -> InvokeResult<Value> {
        let query = QueryParams::build(endpoint, arguments).inspect_err(|e| {
            debug!(tool = endpoint.name, error = %e, "Rejected tool arguments");
        })?;

        debug!(
            tool = endpoint.name,
            method = %endpoint.method,
            path = endpoint.path,
            query = %query.encode(),
            "Invoking upstream endpoint"
        );

        self.http.get(endpoint.path, &query).await
    }
}

/// Builder for creating a ToolInvoker.
pub struct ToolInvokerBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl ToolInvokerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the upstream base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the RapidAPI key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the invoker.
    pub fn build(self) -> InvokeResult<ToolInvoker> {
        let api_key = self
            .api_key
            .ok_or_else(|| InvokeError::Configuration("api_key is required".to_string()))?;

        let mut config = ClientConfig::new(ApiKey::new(api_key)?).with_timeout(self.timeout);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(&base_url)?;
        }

        ToolInvoker::from_config(config)
    }
}

impl Default for ToolInvokerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
