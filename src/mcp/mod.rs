//! MCP (Model Context Protocol) Server Core
//!
//! This module provides the static tool and resource catalogs for the
//! example server along with the dispatch logic that executes them.
//! Transport and JSON-RPC framing are intentionally out of scope; the
//! server is a library-style component for an external transport layer.


pub mod errors;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;
pub mod validation;

pub use errors::{McpError, McpResult};
pub use protocol::{
    CallToolResult, Resource, ResourceContent, ServerInfo, StartupSummary, Tool, ToolContent,
};
pub use server::McpServer;
