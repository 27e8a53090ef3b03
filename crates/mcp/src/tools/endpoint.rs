// Catalog endpoints exposed as MCP tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{Tool, ToolRegistry};
use anyhow::Result;
use realestate_core::{catalog, EndpointDescriptor};
use realestate_sdk::ToolInvoker;
use std::sync::Arc;

/// One upstream endpoint, callable as a tool
pub struct EndpointTool {
    endpoint: &'static EndpointDescriptor,
    invoker: ToolInvoker,
}

impl EndpointTool {
    pub fn new(endpoint: &'static EndpointDescriptor, invoker: ToolInvoker) -> Self {
        Self { endpoint, invoker }
    }
}

#[async_trait::async_trait]
impl Tool for EndpointTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.endpoint.name.to_string(),
            description: self.endpoint.description.to_string(),
            input_schema: self.endpoint.input_schema(),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.invoker.invoke(self.endpoint, &arguments).await {
            Ok(payload) => Ok(CallToolResult::json(payload)),
            Err(e) => {
                tracing::warn!(
                    tool = self.endpoint.name,
                    kind = e.kind(),
                    error = %e,
                    "Tool call failed"
                );
                Ok(CallToolResult::error(e.to_payload()))
            }
        }
    }
}

/// Registry holding every catalog endpoint, in catalog order
pub fn catalog_registry(invoker: ToolInvoker) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for endpoint in catalog::endpoints() {
        registry.register(Arc::new(EndpointTool::new(endpoint, invoker.clone())));
    }
    registry
}
