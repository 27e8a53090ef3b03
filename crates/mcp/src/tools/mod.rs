pub mod endpoint;
mod registry;

pub use endpoint::{catalog_registry, EndpointTool};
pub use registry::{Tool, ToolRegistry};
