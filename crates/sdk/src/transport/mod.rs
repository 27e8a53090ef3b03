//! Transport layer for the US Real Estate client.

pub mod http;

pub use http::HttpTransport;
