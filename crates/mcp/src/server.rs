// MCP server: newline-delimited JSON-RPC over stdio

use crate::codec::{Frame, RequestCodec, MAX_LINE_BYTES};
use crate::protocol::{
    negotiate_protocol_version, CallToolParams, CancelledParams, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, error, info, warn};

/// In-flight tool calls, keyed by the JSON text of their request id
type InFlight = Arc<Mutex<HashMap<String, AbortHandle>>>;

pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: ServerInfo,
    instructions: Option<String>,
    max_line_bytes: usize,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            info: ServerInfo {
                name: realestate_core::catalog::SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: None,
            max_line_bytes: MAX_LINE_BYTES,
        }
    }

    /// Text returned to clients in the `initialize` result
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Cap on a single request line; longer lines are answered with an error and skipped
    pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }

    /// Serve on the process's stdin/stdout until stdin closes
    pub async fn start(&self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve requests read from `reader`, writing responses to `writer`.
    ///
    /// Returns once the reader hits EOF and every in-flight call has
    /// answered or been cancelled.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut frames = FramedRead::new(reader, RequestCodec::new(self.max_line_bytes));
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer_task = tokio::spawn(async move {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(response) = rx.recv().await {
                let line = match serde_json::to_string(&response) {
                    Ok(line) => line,
                    Err(e) => {
                        error!("Failed to serialize response: {}", e);
                        continue;
                    }
                };
                if let Err(e) = sink.send(line).await {
                    error!("stdout write error: {}", e);
                    break;
                }
            }
        });

        let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));

        info!(tools = self.registry.len(), "MCP server started");

        while let Some(frame) = frames.next().await {
            let bytes = match frame {
                Ok(Frame::Line(bytes)) => bytes,
                Ok(Frame::Oversized) => {
                    warn!(limit = self.max_line_bytes, "Dropping oversized request line");
                    send(&tx, JsonRpcResponse::error(Value::Null, JsonRpcError::invalid_request()));
                    continue;
                }
                Err(e) => {
                    error!("stdin read error: {}", e);
                    break;
                }
            };

            let line = match std::str::from_utf8(&bytes) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Request line is not valid UTF-8: {}", e);
                    send(&tx, JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match parse_request(line) {
                Ok(request) => self.dispatch(request, &tx, &in_flight).await,
                Err(response) => send(&tx, response),
            }
        }

        info!("stdin closed, waiting for in-flight calls");
        drop(tx);
        writer_task.await?;

        Ok(())
    }

    async fn dispatch(
        &self,
        request: JsonRpcRequest,
        tx: &mpsc::UnboundedSender<JsonRpcResponse>,
        in_flight: &InFlight,
    ) {
        let Some(id) = request.id else {
            handle_notification(&request.method, request.params, in_flight).await;
            return;
        };

        debug!(method = %request.method, id = %id, "Request");

        match request.method.as_str() {
            "initialize" => send(tx, self.initialize(id, request.params)),
            "ping" => send(tx, JsonRpcResponse::success(id, json!({}))),
            "tools/list" => {
                let result = ListToolsResult {
                    tools: self.registry.list_schemas(),
                };
                send(tx, JsonRpcResponse::from_result(id, &result));
            }
            "tools/call" => self.call_tool(id, request.params, tx, in_flight).await,
            other => send(tx, JsonRpcResponse::error(id, JsonRpcError::method_not_found(other))),
        }
    }

    fn initialize(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: InitializeParams = params
            .and_then(|p| serde_json::from_value(p).ok())
            .unwrap_or_default();

        if let Some(client) = &params.client_info {
            info!(client = %client.name, version = %client.version, "Client connected");
        }

        let result = InitializeResult {
            protocol_version: negotiate_protocol_version(params.protocol_version.as_deref()).to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: self.info.clone(),
            instructions: self.instructions.clone(),
        };

        JsonRpcResponse::from_result(id, &result)
    }

    /// Run a tool on its own task so slow upstream calls don't block the loop
    async fn call_tool(
        &self,
        id: Value,
        params: Option<Value>,
        tx: &mpsc::UnboundedSender<JsonRpcResponse>,
        in_flight: &InFlight,
    ) {
        let params = match params.map(serde_json::from_value::<CallToolParams>) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                let error = JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e));
                send(tx, JsonRpcResponse::error(id, error));
                return;
            }
            None => {
                let error = JsonRpcError::invalid_params("Missing tools/call params");
                send(tx, JsonRpcResponse::error(id, error));
                return;
            }
        };

        let Some(tool) = self.registry.get(&params.name) else {
            let error = JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name));
            send(tx, JsonRpcResponse::error(id, error));
            return;
        };

        let key = id.to_string();

        // Hold the lock across spawn so the task cannot deregister before it is registered
        let mut guard = in_flight.lock().await;
        if guard.contains_key(&key) {
            warn!(request_id = %key, "Request id is already in flight");
            let error = JsonRpcError::invalid_request()
                .with_message(format!("Request id {} is already in use", key));
            send(tx, JsonRpcResponse::error(id, error));
            return;
        }

        let tx = tx.clone();
        let tasks = in_flight.clone();
        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            debug!(tool = %params.name, "Calling tool");
            let response = match tool.execute(params.arguments).await {
                Ok(result) => JsonRpcResponse::from_result(id, &result),
                Err(e) => {
                    error!(tool = %params.name, "Tool execution failed: {:#}", e);
                    JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
                }
            };
            tasks.lock().await.remove(&task_key);
            send(&tx, response);
        });
        guard.insert(key, handle.abort_handle());
    }
}

async fn handle_notification(method: &str, params: Option<Value>, in_flight: &InFlight) {
    match method {
        "notifications/initialized" => debug!("Client initialized"),
        "notifications/cancelled" => {
            let Some(params) = params.and_then(|p| serde_json::from_value::<CancelledParams>(p).ok()) else {
                warn!("Ignoring malformed cancellation");
                return;
            };
            let key = params.request_id.to_string();
            if let Some(handle) = in_flight.lock().await.remove(&key) {
                handle.abort();
                info!(request_id = %key, reason = ?params.reason, "Cancelled tool call");
            } else {
                debug!(request_id = %key, "Cancellation for unknown or finished request");
            }
        }
        other => debug!(method = %other, "Ignoring notification"),
    }
}

/// Parse one line into a request, or the error response owed for it
fn parse_request(line: &str) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_str(line).map_err(|e| {
        warn!("Parse error: {}", e);
        JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error())
    })?;

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| {
        warn!("Invalid request: {}", e);
        JsonRpcResponse::error(id, JsonRpcError::invalid_request())
    })
}

fn send(tx: &mpsc::UnboundedSender<JsonRpcResponse>, response: JsonRpcResponse) {
    if tx.send(response).is_err() {
        error!("Response writer has shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{CallToolResult, ToolSchema};
    use crate::tools::Tool;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    struct EchoTool;

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "echo".to_string(),
                description: "Echo arguments".to_string(),
                input_schema: json!({"type": "object"}),
            }
        }

        async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
            Ok(CallToolResult::json(arguments))
        }
    }

    struct SlowTool;

    #[async_trait::async_trait]
    impl Tool for SlowTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "slow".to_string(),
                description: "Never finishes in time".to_string(),
                input_schema: json!({"type": "object"}),
            }
        }

        async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok(CallToolResult::json(json!({})))
        }
    }

    struct BrokenTool;

    #[async_trait::async_trait]
    impl Tool for BrokenTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "broken".to_string(),
                description: String::new(),
                input_schema: json!({"type": "object"}),
            }
        }

        async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
            anyhow::bail!("internal fault")
        }
    }

    fn server() -> McpServer {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(SlowTool));
        registry.register(Arc::new(BrokenTool));
        McpServer::new(registry).with_instructions("test instructions")
    }

    /// Feed `lines` to a fresh server and collect every response line
    async fn exchange(lines: &[String]) -> Vec<Value> {
        let mut input = Vec::new();
        for line in lines {
            input.extend_from_slice(line.as_bytes());
            input.push(b'\n');
        }
        exchange_raw(server(), &input).await
    }

    /// Feed raw bytes to `server` and collect every response line
    async fn exchange_raw(server: McpServer, input: &[u8]) -> Vec<Value> {
        let (mut client, server_io) = tokio::io::duplex(1024 * 1024);
        let (reader, writer) = tokio::io::split(server_io);

        let task = tokio::spawn(async move { server.serve(reader, writer).await });

        client.write_all(input).await.unwrap();
        client.shutdown().await.unwrap();

        let mut output = String::new();
        client.read_to_string(&mut output).await.unwrap();
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap()
            .unwrap();

        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn request(id: i64, method: &str, params: Value) -> String {
        serde_json::to_string(&JsonRpcRequest::new(id, method, params)).unwrap()
    }

    fn notification(method: &str, params: Value) -> String {
        serde_json::to_string(&JsonRpcRequest::notification(method, params)).unwrap()
    }

    fn by_id(responses: &[Value], id: i64) -> &Value {
        responses
            .iter()
            .find(|r| r["id"] == json!(id))
            .unwrap_or_else(|| panic!("no response for id {}", id))
    }

    #[tokio::test]
    async fn test_initialize() {
        let responses = exchange(&[request(
            1,
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test-client", "version": "1.0"}
            }),
        )])
        .await;

        let result = &by_id(&responses, 1)["result"];
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "us-real-estate");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
        assert_eq!(result["instructions"], "test instructions");
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let responses = exchange(&[
            notification("notifications/initialized", json!({})),
            request(2, "ping", json!({})),
        ])
        .await;

        assert_eq!(responses.len(), 1);
        assert_eq!(by_id(&responses, 2)["result"], json!({}));
    }

    #[tokio::test]
    async fn test_tools_list_in_registration_order() {
        let responses = exchange(&[request(3, "tools/list", json!({}))]).await;

        let tools = by_id(&responses, 3)["result"]["tools"].as_array().unwrap().clone();
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["echo", "slow", "broken"]);
        assert!(tools[0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn test_tools_call() {
        let responses = exchange(&[request(
            4,
            "tools/call",
            json!({"name": "echo", "arguments": {"zipcode": "10001"}}),
        )])
        .await;

        let result = &by_id(&responses, 4)["result"];
        assert_eq!(result["structuredContent"], json!({"zipcode": "10001"}));
        assert!(result.get("isError").is_none());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let responses = exchange(&[request(5, "tools/call", json!({"name": "nope", "arguments": {}}))]).await;

        let error = &by_id(&responses, 5)["error"];
        assert_eq!(error["code"], JsonRpcError::INVALID_PARAMS);
        assert_eq!(error["message"], "Unknown tool: nope");
    }

    #[tokio::test]
    async fn test_missing_call_params_is_invalid_params() {
        let line = r#"{"jsonrpc":"2.0","id":6,"method":"tools/call"}"#.to_string();
        let responses = exchange(&[line]).await;

        assert_eq!(by_id(&responses, 6)["error"]["code"], JsonRpcError::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_internal_tool_fault() {
        let responses = exchange(&[request(7, "tools/call", json!({"name": "broken"}))]).await;

        let error = &by_id(&responses, 7)["error"];
        assert_eq!(error["code"], JsonRpcError::INTERNAL_ERROR);
        assert_eq!(error["message"], "internal fault");
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let responses = exchange(&[request(8, "resources/list", json!({}))]).await;
        assert_eq!(by_id(&responses, 8)["error"]["code"], JsonRpcError::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_parse_error_and_invalid_request() {
        let responses = exchange(&[
            "{not json".to_string(),
            r#"{"jsonrpc":"2.0","id":9}"#.to_string(),
            request(10, "ping", json!({})),
        ])
        .await;

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["error"]["code"], JsonRpcError::PARSE_ERROR);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(by_id(&responses, 9)["error"]["code"], JsonRpcError::INVALID_REQUEST);
        assert!(by_id(&responses, 10).get("result").is_some());
    }

    #[tokio::test]
    async fn test_cancelled_call_never_answers() {
        let responses = exchange(&[
            request(11, "tools/call", json!({"name": "slow", "arguments": {}})),
            notification("notifications/cancelled", json!({"requestId": 11, "reason": "user abort"})),
            request(12, "ping", json!({})),
        ])
        .await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 12);
    }

    #[tokio::test]
    async fn test_calls_run_concurrently() {
        // The slow call would block the echo for minutes if calls were serialized
        let responses = tokio::time::timeout(
            Duration::from_secs(5),
            exchange(&[
                request(13, "tools/call", json!({"name": "slow"})),
                request(14, "tools/call", json!({"name": "echo", "arguments": {"n": 1}})),
                notification("notifications/cancelled", json!({"requestId": 13})),
            ]),
        )
        .await
        .unwrap();

        assert_eq!(responses.len(), 1);
        assert_eq!(by_id(&responses, 14)["result"]["structuredContent"], json!({"n": 1}));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_parse_error() {
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(request(20, "ping", json!({})).as_bytes());
        input.push(b'\n');

        let responses = exchange_raw(server(), &input).await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], JsonRpcError::PARSE_ERROR);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(by_id(&responses, 20)["result"], json!({}));
    }

    #[tokio::test]
    async fn test_oversized_line_is_skipped() {
        let mut input = vec![b'x'; 200];
        input.push(b'\n');
        input.extend_from_slice(request(21, "ping", json!({})).as_bytes());
        input.push(b'\n');

        let responses = exchange_raw(server().with_max_line_bytes(64), &input).await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], JsonRpcError::INVALID_REQUEST);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(by_id(&responses, 21)["result"], json!({}));
    }

    #[tokio::test]
    async fn test_reused_in_flight_id_is_rejected() {
        let responses = exchange(&[
            request(15, "tools/call", json!({"name": "slow"})),
            request(15, "tools/call", json!({"name": "echo", "arguments": {}})),
            notification("notifications/cancelled", json!({"requestId": 15})),
        ])
        .await;

        // The duplicate is refused and the original call stays cancellable
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 15);
        assert_eq!(responses[0]["error"]["code"], JsonRpcError::INVALID_REQUEST);
        assert_eq!(responses[0]["error"]["message"], "Request id 15 is already in use");
    }
}
