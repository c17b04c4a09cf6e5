//! Airflow health and version endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::ProviderOutput;
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_health",
            "health",
            "Get instance status: metadatabase, scheduler and triggerer health",
        ),
        Endpoint::get("get_version", "version", "Get version information"),
    ]
}
