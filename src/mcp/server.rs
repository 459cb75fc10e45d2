//! MCP Server Core
//!
//! This module provides the server component that owns the static tool and
//! resource catalogs and executes the single operation each name supports.
//! All operations are synchronous one-shot lookups against immutable
//! state, so they are safe to call from concurrent request handlers if the
//! server is ever embedded in a real transport loop.

use crate::mcp::errors::{McpError, McpResult};
use crate::mcp::protocol::{
    CallToolResult, Resource, ResourceContent, ServerInfo, StartupSummary, Tool,
};
use crate::mcp::resources::ResourceId;
use crate::mcp::tools::ToolId;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// MCP server state: the identity record plus the advertised catalogs.
///
/// Catalogs are built once at construction and never mutated. They are kept
/// in insertion order so repeated listings are order-stable.
pub struct McpServer {
    server_info: ServerInfo,
    tools: Vec<Tool>,
    resources: Vec<Resource>,
}

impl McpServer {
    /// Create a new MCP server with the built-in tools and resources.
    #[inline]
    pub fn new() -> Self {
        let tools: Vec<Tool> = ToolId::ALL.iter().map(|tool| tool.definition()).collect();
        let resources: Vec<Resource> = ResourceId::ALL
            .iter()
            .map(|resource| resource.definition())
            .collect();

        for tool in &tools {
            debug!("Registered tool: {}", tool.name);
        }
        for resource in &resources {
            debug!("Registered resource: {}", resource.uri);
        }

        Self {
            server_info: ServerInfo::new(),
            tools,
            resources,
        }
    }

    /// Get the server identity record.
    #[inline]
    pub fn server_info(&self) -> &ServerInfo {
        &self.server_info
    }

    /// List the advertised tools in catalog order.
    #[inline]
    pub fn list_tools(&self) -> &[Tool] {
        &self.tools
    }

    /// List the advertised resources in catalog order.
    #[inline]
    pub fn list_resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Execute a tool call.
    ///
    /// Fails with [`McpError::ToolNotFound`] for names outside the catalog
    /// and [`McpError::InvalidToolArguments`] for arguments that do not
    /// match the tool's declared parameters.
    #[inline]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<HashMap<String, Value>>,
    ) -> McpResult<CallToolResult> {
        let tool = ToolId::from_name(name).ok_or_else(|| McpError::ToolNotFound {
            name: name.to_string(),
        })?;

        tool.invoke(arguments)
    }

    /// Read a resource by URI.
    ///
    /// Fails with [`McpError::ResourceNotFound`] for URIs outside the
    /// catalog.
    #[inline]
    pub fn read_resource(&self, uri: &str) -> McpResult<ResourceContent> {
        let resource = ResourceId::from_uri(uri).ok_or_else(|| McpError::ResourceNotFound {
            uri: uri.to_string(),
        })?;

        Ok(resource.read(&self.server_info))
    }

    /// Summarize the server state for the startup banner.
    #[inline]
    pub fn startup_summary(&self) -> StartupSummary {
        StartupSummary {
            status: "initialized".to_string(),
            server: self.server_info.clone(),
            tools: self.tools.len(),
            resources: self.resources.len(),
        }
    }
}

impl Default for McpServer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
