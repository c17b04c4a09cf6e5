//! Registration pipeline: turns a category selection into registered tools.

use crate::airflow::AirflowClient;
use crate::types::{ApiCategory, Result};

use super::catalog::ToolHost;
use super::descriptor::ToolDescriptor;
use super::registry::{CapabilityRegistry, ProviderOutput};

/// Categories to expose and whether to restrict them to read-only tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    apis: Vec<ApiCategory>,
    read_only: bool,
}

impl SelectionRequest {
    /// Build a selection. An empty `apis` list selects every category;
    /// repeated categories are collapsed, first occurrence wins.
    pub fn new(apis: Vec<ApiCategory>, read_only: bool) -> Self {
        let apis = if apis.is_empty() {
            ApiCategory::ALL.to_vec()
        } else {
            let mut unique = Vec::with_capacity(apis.len());
            for api in apis {
                if !unique.contains(&api) {
                    unique.push(api);
                }
            }
            unique
        };
        Self { apis, read_only }
    }

    pub fn apis(&self) -> &[ApiCategory] {
        &self.apis
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self::new(Vec::new(), false)
    }
}

/// Keep only read-only tools, preserving order.
pub fn filter_read_only(tools: Vec<ToolDescriptor>) -> Vec<ToolDescriptor> {
    tools.into_iter().filter(|t| t.read_only).collect()
}

/// Apply the read-only filter when `read_only` is set.
pub fn select_tools(tools: Vec<ToolDescriptor>, read_only: bool) -> Vec<ToolDescriptor> {
    if read_only {
        filter_read_only(tools)
    } else {
        tools
    }
}

/// Register the tools of every category in `apis` with `host`.
///
/// Categories are processed in order. A provider reporting
/// [`ProviderOutput::Unsupported`] contributes nothing; any provider error
/// aborts immediately and later categories are never resolved.
///
/// Returns the number of tools registered.
pub fn setup_tools<H, R>(
    host: &mut H,
    registry: &R,
    client: &AirflowClient,
    apis: &[ApiCategory],
    read_only: bool,
) -> Result<usize>
where
    H: ToolHost + ?Sized,
    R: CapabilityRegistry + ?Sized,
{
    let mut registered = 0;

    for &api in apis {
        tracing::debug!(api = %api, "Adding API");
        let provider = registry.resolve(api);

        let tools = match provider(client)? {
            ProviderOutput::Tools(tools) => tools,
            ProviderOutput::Unsupported => {
                tracing::debug!(api = %api, "API not supported by this Airflow, skipping");
                continue;
            }
        };

        for tool in select_tools(tools, read_only) {
            host.add_tool(tool);
            registered += 1;
        }
    }

    tracing::info!(registered, read_only, "Tool registration complete");
    Ok(registered)
}
