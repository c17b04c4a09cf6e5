//! MCP server handler backed by the tool catalog.

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool, ToolAnnotations,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;

use crate::tools::{ToolCatalog, ToolDescriptor, ToolHost};
use crate::types::Error;

/// Server name advertised during MCP initialization.
pub const SERVER_NAME: &str = "airflow-mcp";

/// MCP server exposing registered Airflow tools.
///
/// Tools are added through [`ToolHost`] before the server starts; once
/// serving, the catalog is shared read-only between sessions.
#[derive(Debug, Clone, Default)]
pub struct AirflowMcpServer {
    catalog: Arc<ToolCatalog>,
}

impl AirflowMcpServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// MCP tool definitions, in registration order.
    pub fn mcp_tools(&self) -> Vec<Tool> {
        self.catalog.list_entries().iter().map(to_mcp_tool).collect()
    }

    /// Run one tool call, mapping failures to MCP results.
    ///
    /// Unknown tools and invalid arguments are protocol errors; Airflow and
    /// HTTP failures are tool results flagged `isError` so the model can
    /// see them.
    pub async fn call(&self, name: &str, args: Value) -> Result<CallToolResult, ErrorData> {
        let tool = self
            .catalog
            .get(name)
            .ok_or_else(|| Error::not_found(format!("Unknown tool: {}", name)))?;

        tracing::debug!(tool = %name, "Calling tool");
        match tool.invoke(args).await {
            Ok(value) => {
                let text = serde_json::to_string_pretty(&value).map_err(Error::from)?;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) if e.is_client_error() => Err(e.into()),
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "Tool call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

impl ToolHost for AirflowMcpServer {
    fn add_tool(&mut self, tool: ToolDescriptor) {
        Arc::make_mut(&mut self.catalog).add_tool(tool);
    }
}

fn to_mcp_tool(tool: &ToolDescriptor) -> Tool {
    let mut mcp_tool = Tool::new(
        tool.name.clone(),
        tool.description.clone(),
        Arc::new(tool.input_schema()),
    );
    mcp_tool.annotations = Some(ToolAnnotations {
        read_only_hint: Some(tool.read_only),
        destructive_hint: Some(tool.destructive),
        open_world_hint: Some(true),
        ..Default::default()
    });
    mcp_tool
}

impl ServerHandler for AirflowMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                title: Some("Apache Airflow MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Tools for inspecting and operating an Apache Airflow deployment through its REST API."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.mcp_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        self.call(&request.name, args).await
    }
}
