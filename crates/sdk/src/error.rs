//! Error types for tool invocation.

use realestate_core::ValidationError;
use serde::Deserialize;
use serde_json::{json, Value};

/// Result type for client operations.
pub type InvokeResult<T> = Result<T, InvokeError>;

/// Everything that can go wrong between receiving a call and returning the
/// upstream payload.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// Missing credential or unusable client settings. Fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Arguments did not match the tool's schema. No request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a failure status or an undecodable body.
    #[error("Upstream error (status {status}): {message}")]
    Upstream {
        status: u16,
        message: String,
        body: String,
    },
}

impl InvokeError {
    /// Short, stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
            Self::Upstream { .. } => "upstream",
        }
    }

    /// Whether the request was abandoned because the client timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Create an upstream error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(error_response) => error_response.message,
            Err(_) if body.trim().is_empty() => reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("request failed")
                .to_string(),
            Err(_) => body.trim().to_string(),
        };

        Self::Upstream {
            status,
            message,
            body: body.to_string(),
        }
    }

    /// Structured rendering handed back to the calling model.
    pub fn to_payload(&self) -> Value {
        let mut error = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });

        match self {
            Self::Validation(e) => {
                if let Some(parameter) = e.parameter() {
                    error["parameter"] = json!(parameter);
                }
            }
            Self::Transport(_) => {
                error["timed_out"] = json!(self.is_timeout());
            }
            Self::Upstream { status, body, .. } => {
                error["status"] = json!(status);
                // Keep JSON bodies structured, everything else verbatim
                error["body"] = serde_json::from_str::<Value>(body)
                    .unwrap_or_else(|_| Value::String(body.clone()));
            }
            Self::Configuration(_) => {}
        }

        json!({ "error": error })
    }
}

/// Error body shape returned by the upstream gateway.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(alias = "error")]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_json_message() {
        let err = InvokeError::from_response(403, r#"{"message":"You are not subscribed to this API."}"#);

        match err {
            InvokeError::Upstream { status, ref message, .. } => {
                assert_eq!(status, 403);
                assert_eq!(message, "You are not subscribed to this API.");
            }
            _ => panic!("Expected Upstream error"),
        }
    }

    #[test]
    fn test_from_response_error_alias() {
        let err = InvokeError::from_response(400, r#"{"error":"bad zipcode"}"#);
        assert!(err.to_string().ends_with("bad zipcode"));
    }

    #[test]
    fn test_from_response_plain_text_and_empty() {
        let err = InvokeError::from_response(502, "Bad Gateway\n");
        assert!(err.to_string().contains("Bad Gateway"));

        let err = InvokeError::from_response(500, "");
        assert_eq!(err.to_string(), "Upstream error (status 500): Internal Server Error");
    }

    #[test]
    fn test_payload_upstream_keeps_json_body() {
        let payload = InvokeError::from_response(429, r#"{"message":"Too many requests"}"#).to_payload();

        assert_eq!(payload["error"]["kind"], "upstream");
        assert_eq!(payload["error"]["status"], 429);
        assert_eq!(payload["error"]["body"]["message"], "Too many requests");
    }

    #[test]
    fn test_payload_upstream_plain_body() {
        let payload = InvokeError::from_response(500, "oops").to_payload();
        assert_eq!(payload["error"]["body"], "oops");
    }

    #[test]
    fn test_payload_validation_names_parameter() {
        let err = InvokeError::from(ValidationError::MissingRequired { name: "zipcode" });
        let payload = err.to_payload();

        assert_eq!(payload["error"]["kind"], "validation");
        assert_eq!(payload["error"]["parameter"], "zipcode");
        assert_eq!(
            payload["error"]["message"],
            "Validation error: missing required parameter 'zipcode'"
        );
    }

    #[test]
    fn test_payload_configuration() {
        let payload = InvokeError::Configuration("RAPID_API_KEY is not set".to_string()).to_payload();
        assert_eq!(payload["error"]["kind"], "configuration");
        assert!(payload["error"].get("status").is_none());
    }
}
