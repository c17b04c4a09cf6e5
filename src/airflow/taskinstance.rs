//! Airflow task instance endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

const INSTANCE: &str = "dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances/{task_id}";

fn dag_run(endpoint: Endpoint) -> Endpoint {
    endpoint
        .path_param("dag_id", ParamType::String, "The DAG ID")
        .path_param("dag_run_id", ParamType::String, "The DAG run ID")
}

fn instance(endpoint: Endpoint) -> Endpoint {
    dag_run(endpoint).path_param("task_id", ParamType::String, "The task ID")
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        instance(Endpoint::get("get_task_instance", INSTANCE, "Get a task instance by DAG ID, task ID, and DAG run ID")),
        dag_run(Endpoint::get(
            "list_task_instances",
            "dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances",
            "List task instances by DAG ID and DAG run ID",
        ))
        .query("execution_date_gte", ParamType::DateTime, "Returns objects greater or equal to the specified date")
        .query("execution_date_lte", ParamType::DateTime, "Returns objects less than or equal to the specified date")
        .query("start_date_gte", ParamType::DateTime, "Returns objects greater or equal the specified date")
        .query("start_date_lte", ParamType::DateTime, "Returns objects less or equal the specified date")
        .query("end_date_gte", ParamType::DateTime, "Returns objects greater or equal the specified date")
        .query("end_date_lte", ParamType::DateTime, "Returns objects less than or equal to the specified date")
        .query("duration_gte", ParamType::Float, "Returns objects greater than or equal to the specified values")
        .query("duration_lte", ParamType::Float, "Returns objects less than or equal to the specified values")
        .query("state", ParamType::StringList, "The value can be repeated to retrieve multiple matching values")
        .query("pool", ParamType::StringList, "The value can be repeated to retrieve multiple matching values")
        .query("queue", ParamType::StringList, "The value can be repeated to retrieve multiple matching values")
        .paged(),
        instance(Endpoint::patch("update_task_instance", INSTANCE, "Update a task instance by DAG ID, DAG run ID, and task ID"))
            .body(
                "new_state",
                ParamType::enumeration(&["success", "failed", "skipped"]),
                "Expected new state",
            )
            .body("dry_run", ParamType::Bool, "If set, don't actually run this operation"),
        instance(Endpoint::get(
            "get_log",
            "dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances/{task_id}/logs/{task_try_number}",
            "Get logs for a specific task instance",
        ))
        .path_param("task_try_number", ParamType::Int, "The task try number")
        .query("full_content", ParamType::Bool, "Whether to return the full log content")
        .query("map_index", ParamType::Int, "Filter on map index for mapped task")
        .query("token", ParamType::String, "A token that allows you to continue fetching logs"),
        instance(Endpoint::get(
            "list_task_instance_tries",
            "dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances/{task_id}/tries",
            "List task instance tries",
        ))
        .paged()
        .ordered(),
    ]
}
