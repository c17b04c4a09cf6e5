//! Airflow DAG import error endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_import_errors", "importErrors", "List import errors")
            .paged()
            .ordered(),
        Endpoint::get(
            "get_import_error",
            "importErrors/{import_error_id}",
            "Get a specific import error by ID",
        )
        .path_param("import_error_id", ParamType::Int, "The import error ID"),
    ]
}
