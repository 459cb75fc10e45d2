//! MCP Protocol Types
//!
//! This module defines the payload shapes the server exchanges with MCP
//! clients: tool and resource descriptors, tool call results, and resource
//! contents. Field names follow the MCP wire conventions (`inputSchema`,
//! `mimeType`), so an external transport layer can serialize these types
//! directly.

use serde::{Deserialize, Serialize};

/// MCP protocol version advertised by this server.
pub const PROTOCOL_VERSION: &str = "0.1.0";

/// Static server identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub protocol_version: String,
}

impl ServerInfo {
    /// Create the identity record from the package metadata.
    #[inline]
    pub fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            protocol_version: PROTOCOL_VERSION.to_string(),
        }
    }
}

impl Default for ServerInfo {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Tool definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Resource definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub uri: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
}

/// Tool call result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
}

/// Tool content types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

/// Contents returned when reading a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceContent {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub text: String,
}

/// Summary of the server state printed as JSON on startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupSummary {
    pub status: String,
    pub server: ServerInfo,
    pub tools: usize,
    pub resources: usize,
}
