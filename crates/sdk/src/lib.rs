//! # US Real Estate SDK
//!
//! Client for the US Real Estate API on RapidAPI, driven by the endpoint
//! catalog in `realestate-core`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use realestate_sdk::{catalog, InvokeResult, ToolInvoker};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> InvokeResult<()> {
//!     let invoker = ToolInvoker::builder()
//!         .api_key("your-rapidapi-key")
//!         .build()?;
//!
//!     let endpoint = catalog::find("location_suggest").expect("known tool");
//!     let suggestions = invoker.invoke(endpoint, &json!({ "input": "Detroit" })).await?;
//!     println!("{}", suggestions);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod invoker;
pub mod transport;

pub use config::{ApiKey, ClientConfig, API_KEY_ENV};
pub use error::{InvokeError, InvokeResult};
pub use invoker::{ToolInvoker, ToolInvokerBuilder};

// Re-export core types for convenience
pub use realestate_core::{
    catalog, EndpointDescriptor, HttpMethod, ParamDescriptor, ParamKind, QueryParams,
    ValidationError,
};
