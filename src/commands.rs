use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

use crate::mcp::{McpError, McpServer, ToolContent};

/// Start the example server: print the startup summary and the catalogs
#[inline]
pub fn serve() -> Result<()> {
    let server = McpServer::new();
    let server_info = server.server_info();
    info!("Starting {} v{}", server_info.name, server_info.version);

    let summary = serde_json::to_string_pretty(&server.startup_summary())
        .context("Failed to serialize startup summary")?;
    println!("{}", summary);

    println!();
    println!("MCP Example Server is ready to accept connections.");
    println!("This is a basic implementation for demonstration purposes.");

    println!();
    println!("Available tools:");
    for tool in server.list_tools() {
        println!(
            "  - {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("")
        );
    }

    println!();
    println!("Available resources:");
    for resource in server.list_resources() {
        println!(
            "  - {}: {}",
            resource.uri,
            resource.description.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

/// List the advertised tools with their declared parameters
#[inline]
pub fn list_tools() -> Result<()> {
    let server = McpServer::new();
    let tools = server.list_tools();

    println!("Available Tools ({} total):", tools.len());
    println!();

    for tool in tools {
        println!("🔧 {}", tool.name);
        if let Some(description) = &tool.description {
            println!("   {}", description);
        }

        if let Some(properties) = tool.input_schema["properties"].as_object() {
            let required: Vec<&str> = tool.input_schema["required"]
                .as_array()
                .map(|values| values.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();

            for (name, property) in properties {
                let kind = property["type"].as_str().unwrap_or("any");
                let marker = if required.contains(&name.as_str()) {
                    "required"
                } else {
                    "optional"
                };
                println!("   - {} ({}, {})", name, kind, marker);
            }
        }

        println!();
    }

    Ok(())
}

/// List the advertised resources
#[inline]
pub fn list_resources() -> Result<()> {
    let server = McpServer::new();
    let resources = server.list_resources();

    println!("Available Resources ({} total):", resources.len());
    println!();

    for resource in resources {
        println!("📄 {} ({})", resource.name, resource.uri);
        if let Some(description) = &resource.description {
            println!("   {}", description);
        }
        if let Some(mime_type) = &resource.mime_type {
            println!("   MIME type: {}", mime_type);
        }
        println!();
    }

    Ok(())
}

/// Invoke a tool by name and print its text content
#[inline]
pub fn call_tool(name: &str, arguments: Option<String>) -> Result<()> {
    let arguments: Option<HashMap<String, Value>> = arguments
        .map(|raw| {
            serde_json::from_str(&raw).context("Failed to parse arguments as a JSON object")
        })
        .transpose()?;

    let server = McpServer::new();
    let result = server
        .call_tool(name, arguments)
        .inspect_err(McpError::log)?;

    for item in result.content {
        let ToolContent::Text { text } = item;
        println!("{}", text);
    }

    Ok(())
}

/// Read a resource by URI and print its text
#[inline]
pub fn read_resource(uri: &str) -> Result<()> {
    let server = McpServer::new();
    let content = server.read_resource(uri).inspect_err(McpError::log)?;

    info!("Read resource {} ({})", content.uri, content.mime_type);
    println!("{}", content.text);

    Ok(())
}
