// Core types for the US Real Estate tool catalog

pub mod catalog;
pub mod query;
pub mod schema;

pub use query::QueryParams;
pub use schema::{EndpointDescriptor, HttpMethod, ParamDescriptor, ParamKind, ValidationError};
