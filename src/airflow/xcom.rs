//! Airflow XCom endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

const ENTRIES: &str = "dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances/{task_id}/xcomEntries";

fn task_instance(endpoint: Endpoint) -> Endpoint {
    endpoint
        .path_param("dag_id", ParamType::String, "The DAG ID")
        .path_param("dag_run_id", ParamType::String, "The DAG run ID")
        .path_param("task_id", ParamType::String, "The task ID")
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        task_instance(Endpoint::get("get_xcom_entries", ENTRIES, "Get all XCom entries"))
            .query("map_index", ParamType::Int, "Filter on map index for mapped task")
            .query("xcom_key", ParamType::String, "Only filter the XCom entries with the provided key")
            .paged(),
        task_instance(Endpoint::get(
            "get_xcom_entry",
            "dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances/{task_id}/xcomEntries/{xcom_key}",
            "Get an XCom entry",
        ))
        .path_param("xcom_key", ParamType::String, "The XCom key")
        .query("map_index", ParamType::Int, "Filter on map index for mapped task")
        .query("deserialize", ParamType::Bool, "Whether to deserialize an XCom value when using a custom XCom backend")
        .query("stringify", ParamType::Bool, "Whether to convert the XCom value to be a string"),
    ]
}
