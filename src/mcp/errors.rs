//! MCP Error Handling
//!
//! This module defines the errors surfaced by tool and resource dispatch.
//! Every failure is fatal to the single call that produced it; there is no
//! retry policy and no partial result.

use thiserror::Error;
use tracing::error;

/// MCP-specific errors that can occur during dispatch
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Tool not found: {name}")]
    ToolNotFound { name: String },

    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },

    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidToolArguments { tool: String, message: String },
}

impl McpError {
    /// Log the error with appropriate level
    #[inline]
    pub fn log(&self) {
        match self {
            Self::ToolNotFound { .. } | Self::ResourceNotFound { .. } => {
                error!("Not found error: {}", self);
            }
            Self::InvalidToolArguments { .. } => {
                error!("Client error: {}", self);
            }
        }
    }
}

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;
