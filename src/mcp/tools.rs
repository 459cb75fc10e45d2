//! MCP Tools Implementation
//!
//! This module provides the static tool catalog along with the concrete
//! tool implementations. Tools are identified by a closed enum, so adding
//! a tool is a compile-checked change rather than a string comparison.

use crate::mcp::errors::McpResult;
use crate::mcp::protocol::{CallToolResult, Tool, ToolContent};
use crate::mcp::validation::parse_arguments;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use tracing::debug;

/// Identifier for a tool in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolId {
    Echo,
    Hello,
}

impl ToolId {
    /// Every tool this server exposes, in catalog order.
    pub const ALL: [Self; 2] = [Self::Echo, Self::Hello];

    /// Look up a tool by its advertised name.
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "echo" => Some(Self::Echo),
            "hello" => Some(Self::Hello),
            _ => None,
        }
    }

    /// The name this tool is advertised under.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Echo => "echo",
            Self::Hello => "hello",
        }
    }

    /// Create the tool definition advertised to clients.
    #[inline]
    pub fn definition(self) -> Tool {
        match self {
            Self::Echo => Tool {
                name: self.name().to_string(),
                description: Some("Echo back the input text".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "Text to echo back"
                        }
                    },
                    "required": ["text"]
                }),
            },
            Self::Hello => Tool {
                name: self.name().to_string(),
                description: Some("Say hello with an optional name".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Name to greet (optional)"
                        }
                    }
                }),
            },
        }
    }

    /// Execute the tool against the provided arguments.
    #[inline]
    pub fn invoke(self, arguments: Option<HashMap<String, Value>>) -> McpResult<CallToolResult> {
        debug!("Invoking tool: {}", self.name());

        match self {
            Self::Echo => {
                let args: EchoArgs = parse_arguments(self, arguments)?;
                Ok(text_result(format!("Echo: {}", args.text)))
            }
            Self::Hello => {
                let args: HelloArgs = parse_arguments(self, arguments)?;
                let name = args.name.unwrap_or_else(|| "World".to_string());
                Ok(text_result(format!("Hello, {}!", name)))
            }
        }
    }
}

/// Arguments accepted by the `echo` tool.
#[derive(Debug, Default, Deserialize)]
pub struct EchoArgs {
    /// Text to echo back. A missing value echoes the empty string.
    #[serde(default)]
    pub text: String,
}

/// Arguments accepted by the `hello` tool.
#[derive(Debug, Default, Deserialize)]
pub struct HelloArgs {
    /// Name to greet. A missing value greets "World".
    #[serde(default)]
    pub name: Option<String>,
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult {
        content: vec![ToolContent::Text { text }],
    }
}
