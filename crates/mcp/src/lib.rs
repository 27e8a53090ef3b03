// MCP (Model Context Protocol) server exposing the US Real Estate API
// catalog as tools to agent clients

pub mod codec;
pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
