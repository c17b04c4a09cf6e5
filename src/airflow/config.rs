//! Airflow configuration endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_config", "config", "Get current configuration").query(
            "section",
            ParamType::String,
            "If given, only return config of this section",
        ),
        Endpoint::get(
            "get_config_value",
            "config/section/{section}/option/{option}",
            "Get a specific option from configuration",
        )
        .path_param("section", ParamType::String, "The configuration section")
        .path_param("option", ParamType::String, "The option name within the section"),
    ]
}
