//! MCP Resources Implementation
//!
//! This module provides the static resource catalog and the read
//! implementation for each resource. Like tools, resources are identified
//! by a closed enum dispatched with exhaustive matching.

use crate::mcp::protocol::{Resource, ResourceContent, ServerInfo};
use tracing::debug;

/// Identifier for a resource in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceId {
    /// Basic server information, addressed as `example://info`.
    Info,
}

impl ResourceId {
    /// Every resource this server exposes, in catalog order.
    pub const ALL: [Self; 1] = [Self::Info];

    /// Look up a resource by its URI.
    #[inline]
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "example://info" => Some(Self::Info),
            _ => None,
        }
    }

    /// The URI this resource is addressed by.
    #[inline]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Info => "example://info",
        }
    }

    /// Create the resource definition advertised to clients.
    #[inline]
    pub fn definition(self) -> Resource {
        match self {
            Self::Info => Resource {
                uri: self.uri().to_string(),
                name: "Server Information".to_string(),
                description: Some("Basic server information and capabilities".to_string()),
                mime_type: Some("text/plain".to_string()),
            },
        }
    }

    /// Read the resource contents.
    #[inline]
    pub fn read(self, server_info: &ServerInfo) -> ResourceContent {
        debug!("Reading resource: {}", self.uri());

        match self {
            Self::Info => {
                let text = format!(
                    "MCP Server: {} v{}\nDescription: {}\nProtocol Version: {}",
                    server_info.name,
                    server_info.version,
                    server_info.description,
                    server_info.protocol_version
                );

                ResourceContent {
                    uri: self.uri().to_string(),
                    mime_type: "text/plain".to_string(),
                    text,
                }
            }
        }
    }
}
