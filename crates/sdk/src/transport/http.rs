//! HTTP transport layer for the upstream API.

use crate::config::ClientConfig;
use crate::error::{InvokeError, InvokeResult};
use realestate_core::catalog::UPSTREAM_HOST;
use realestate_core::QueryParams;
use reqwest::{header, Client};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";
const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> InvokeResult<Self> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::HeaderName::from_static(RAPIDAPI_HOST_HEADER),
            header::HeaderValue::from_static(UPSTREAM_HOST),
        );

        let mut key = header::HeaderValue::from_str(config.api_key.expose()).map_err(|_| {
            InvokeError::Configuration("API key contains characters not allowed in a header".to_string())
        })?;
        key.set_sensitive(true);
        headers.insert(header::HeaderName::from_static(RAPIDAPI_KEY_HEADER), key);

        let client = Client::builder()
            .user_agent(concat!("us-real-estate-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| InvokeError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given endpoint path.
    fn build_url(&self, path: &str) -> InvokeResult<url::Url> {
        self.config
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| InvokeError::Configuration(format!("invalid endpoint path '{}': {}", path, e)))
    }

    /// Execute a GET request and decode the body as JSON.
    ///
    /// Exactly one request is sent; failures are not retried.
    pub async fn get(&self, path: &str, query: &QueryParams) -> InvokeResult<Value> {
        let url = self.build_url(path)?;
        debug!(url = %url, params = query.len(), "GET request");

        let response = self.client.get(url).query(query.pairs()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), path = path, "Upstream returned failure status");
            return Err(InvokeError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(status = status.as_u16(), path = path, "Upstream body is not JSON");
            InvokeError::Upstream {
                status: status.as_u16(),
                message: format!("response body is not valid JSON: {}", e),
                body,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use realestate_core::{EndpointDescriptor, ParamDescriptor, ParamKind};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SUGGEST: EndpointDescriptor = EndpointDescriptor::get(
        "location_suggest",
        "location/suggest",
        "",
        &[ParamDescriptor::required("input", ParamKind::String, "")],
    );

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(
            ClientConfig::new(ApiKey::new("test-key").unwrap())
                .with_base_url(base_url)
                .unwrap(),
        )
    }

    fn query(input: &str) -> QueryParams {
        QueryParams::build(&SUGGEST, &json!({ "input": input })).unwrap()
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/location/suggest"))
            .and(query_param("input", "Detroit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"city": "Detroit"}]})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result = transport.get("location/suggest", &query("Detroit")).await.unwrap();
        assert_eq!(result, json!({"data": [{"city": "Detroit"}]}));
    }

    #[tokio::test]
    async fn test_rapidapi_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("x-rapidapi-host", "us-real-estate.p.rapidapi.com"))
            .and(header("x-rapidapi-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result = transport.get("location/suggest", &query("x")).await.unwrap();
        assert_eq!(result["ok"], true);
    }

    #[tokio::test]
    async fn test_error_on_500() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        match transport.get("location/suggest", &query("x")).await {
            Err(InvokeError::Upstream { status, body, .. }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_on_403_extracts_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({"message": "You are not subscribed to this API."})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        match transport.get("location/suggest", &query("x")).await {
            Err(InvokeError::Upstream { status, message, .. }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "You are not subscribed to this API.");
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        match transport.get("location/suggest", &query("x")).await {
            Err(InvokeError::Upstream { status, body, .. }) => {
                assert_eq!(status, 200);
                assert_eq!(body, "<html>maintenance</html>");
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = Arc::new(
            ClientConfig::new(ApiKey::new("test-key").unwrap())
                .with_base_url(&server.uri())
                .unwrap()
                .with_timeout(Duration::from_millis(100)),
        );
        let transport = HttpTransport::new(config).unwrap();

        let err = transport.get("location/suggest", &query("x")).await.unwrap_err();
        assert_eq!(err.kind(), "transport");
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Nothing listens on the discard port
        let transport = HttpTransport::new(create_config("http://127.0.0.1:9")).unwrap();

        let err = transport.get("location/suggest", &query("x")).await.unwrap_err();
        assert!(matches!(err, InvokeError::Transport(_)));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_build_url() {
        let transport = HttpTransport::new(create_config("http://localhost:8080")).unwrap();

        let url = transport.build_url("v3/property-detail").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v3/property-detail");
    }

    #[test]
    fn test_build_url_with_prefix() {
        let transport = HttpTransport::new(create_config("http://localhost:8080/mock")).unwrap();

        let url = transport.build_url("/location/suggest").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/mock/location/suggest");
    }

    #[test]
    fn test_invalid_header_key_rejected() {
        let config = Arc::new(ClientConfig::new(ApiKey::new("bad\nkey").unwrap()));

        let err = HttpTransport::new(config).unwrap_err();
        assert!(matches!(err, InvokeError::Configuration(_)));
    }
}
