//! MCP Argument Validation
//!
//! This module converts the untyped argument map of a tool call into the
//! tool's typed parameter struct. Validation against the declared schema
//! happens here, before dispatch, and defaulting of missing optional
//! fields lives on the parameter structs themselves.

use crate::mcp::errors::{McpError, McpResult};
use crate::mcp::tools::ToolId;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// Parse the raw argument map of a tool call into typed parameters.
///
/// An absent map is treated as an empty object, so parameter structs with
/// serde defaults accept a bare call. Arguments that do not match the
/// declared parameter types fail with [`McpError::InvalidToolArguments`].
#[inline]
pub fn parse_arguments<T>(tool: ToolId, arguments: Option<HashMap<String, Value>>) -> McpResult<T>
where
    T: DeserializeOwned,
{
    let map = arguments.unwrap_or_default();
    let value = Value::Object(map.into_iter().collect());

    serde_json::from_value(value).map_err(|e| McpError::InvalidToolArguments {
        tool: tool.name().to_string(),
        message: e.to_string(),
    })
}
