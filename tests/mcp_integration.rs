#![expect(
    clippy::tests_outside_test_module,
    reason = "integration tests are only compiled in test mode"
)]

//! MCP Server Integration Tests
//!
//! Integration tests for the complete server surface: catalog discovery,
//! tool invocation, resource reads, wire-shape serialization, and the
//! startup summary.

use example_mcp_server::mcp::{McpError, McpServer, ToolContent};
use serde_json::{Value, json};
use std::collections::HashMap;

fn args_from(value: Value) -> Option<HashMap<String, Value>> {
    serde_json::from_value(value).expect("should convert to argument map")
}

fn single_text(result: &example_mcp_server::mcp::CallToolResult) -> String {
    assert_eq!(result.content.len(), 1);
    let ToolContent::Text { text } = &result.content[0];
    text.clone()
}

/// Test server construction and identity record
#[test]
fn server_initialization() {
    let server = McpServer::new();
    let info = server.server_info();

    assert_eq!(info.name, "example-mcp-server");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert!(!info.description.is_empty());
    assert_eq!(info.protocol_version, "0.1.0");

    assert_eq!(server.list_tools().len(), 2);
    assert_eq!(server.list_resources().len(), 1);
}

/// Test capability discovery is deterministic across calls
#[test]
fn catalog_discovery_is_idempotent() {
    let server = McpServer::new();

    let names: Vec<&str> = server.list_tools().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["echo", "hello"]);

    for _ in 0..3 {
        let again: Vec<&str> = server.list_tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, again);
    }

    let uris: Vec<&str> = server
        .list_resources()
        .iter()
        .map(|r| r.uri.as_str())
        .collect();
    assert_eq!(uris, vec!["example://info"]);
}

/// Test the full set of tool invocation behaviors
#[test]
fn tool_invocation() {
    let server = McpServer::new();

    let result = server
        .call_tool("echo", args_from(json!({"text": "hi"})))
        .expect("echo should succeed");
    assert_eq!(single_text(&result), "Echo: hi");

    let result = server
        .call_tool("echo", args_from(json!({})))
        .expect("echo should default missing text");
    assert_eq!(single_text(&result), "Echo: ");

    let result = server
        .call_tool("hello", args_from(json!({"name": "Ada"})))
        .expect("hello should succeed");
    assert_eq!(single_text(&result), "Hello, Ada!");

    let result = server
        .call_tool("hello", args_from(json!({})))
        .expect("hello should default missing name");
    assert_eq!(single_text(&result), "Hello, World!");
}

/// Test error handling for unknown tool names
#[test]
fn error_handling_unknown_tool() {
    let server = McpServer::new();

    let error = server
        .call_tool("nonexistent", args_from(json!({})))
        .expect_err("unknown tool should fail");

    match error {
        McpError::ToolNotFound { name } => assert_eq!(name, "nonexistent"),
        other => panic!("unexpected error: {other}"),
    }

    // The server stays functional after an error
    let result = server
        .call_tool("echo", args_from(json!({"text": "still here"})))
        .expect("echo should still succeed");
    assert_eq!(single_text(&result), "Echo: still here");
}

/// Test error handling for arguments that fail schema validation
#[test]
fn error_handling_invalid_arguments() {
    let server = McpServer::new();

    let error = server
        .call_tool("echo", args_from(json!({"text": 42})))
        .expect_err("mistyped arguments should fail");

    match error {
        McpError::InvalidToolArguments { tool, .. } => assert_eq!(tool, "echo"),
        other => panic!("unexpected error: {other}"),
    }
}

/// Test the info resource read
#[test]
fn resource_read() {
    let server = McpServer::new();

    let content = server
        .read_resource("example://info")
        .expect("info resource should be readable");

    assert_eq!(content.uri, "example://info");
    assert_eq!(content.mime_type, "text/plain");
    assert!(content.text.starts_with("MCP Server: example-mcp-server v"));
    assert!(content.text.contains("Description: "));
    assert!(content.text.ends_with("Protocol Version: 0.1.0"));
}

/// Test error handling for unknown resource URIs
#[test]
fn error_handling_unknown_resource() {
    let server = McpServer::new();

    let error = server
        .read_resource("bogus://x")
        .expect_err("unknown resource should fail");

    match error {
        McpError::ResourceNotFound { uri } => assert_eq!(uri, "bogus://x"),
        other => panic!("unexpected error: {other}"),
    }
}

/// Test tool descriptors serialize with the MCP wire field names
#[test]
fn tool_wire_shape() {
    let server = McpServer::new();
    let tools = server.list_tools();

    let value = serde_json::to_value(tools).expect("tools should serialize");
    let echo = &value[0];

    assert_eq!(echo["name"], "echo");
    assert!(echo.get("inputSchema").is_some());
    assert!(echo.get("input_schema").is_none());
    assert_eq!(echo["inputSchema"]["type"], "object");
}

/// Test resource descriptors and contents serialize with the MCP wire field names
#[test]
fn resource_wire_shape() {
    let server = McpServer::new();

    let value =
        serde_json::to_value(server.list_resources()).expect("resources should serialize");
    assert_eq!(value[0]["uri"], "example://info");
    assert_eq!(value[0]["mimeType"], "text/plain");
    assert!(value[0].get("mime_type").is_none());

    let content = server
        .read_resource("example://info")
        .expect("info resource should be readable");
    let value = serde_json::to_value(&content).expect("contents should serialize");
    assert_eq!(value["mimeType"], "text/plain");
}

/// Test tool content serializes as tagged text items
#[test]
fn tool_content_wire_shape() {
    let server = McpServer::new();
    let result = server
        .call_tool("hello", None)
        .expect("hello should succeed");

    let value = serde_json::to_value(&result).expect("result should serialize");
    assert_eq!(value["content"][0]["type"], "text");
    assert_eq!(value["content"][0]["text"], "Hello, World!");
}

/// Test the startup summary JSON shape
#[test]
fn startup_summary_shape() {
    let server = McpServer::new();
    let summary = server.startup_summary();

    let value = serde_json::to_value(&summary).expect("summary should serialize");
    assert_eq!(value["status"], "initialized");
    assert_eq!(value["server"]["name"], "example-mcp-server");
    assert_eq!(value["server"]["protocol_version"], "0.1.0");
    assert_eq!(value["tools"], 2);
    assert_eq!(value["resources"], 1);
}

/// Test that every valid tool accepts a bare call with no arguments
#[test]
fn valid_tools_never_fail_without_arguments() {
    let server = McpServer::new();

    for tool in server.list_tools() {
        let result = server.call_tool(&tool.name, None);
        assert!(result.is_ok(), "tool {} failed a bare call", tool.name);

        let result = server.call_tool(&tool.name, args_from(json!({})));
        assert!(result.is_ok(), "tool {} failed an empty call", tool.name);
    }
}
