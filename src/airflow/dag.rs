//! Airflow DAG endpoints.

use serde_json::json;

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn dag(endpoint: Endpoint) -> Endpoint {
    endpoint.path_param("dag_id", ParamType::String, "The DAG ID")
}

/// Options shared by the clear and set-state task instance endpoints.
fn relatives(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("include_upstream", ParamType::Bool, "If set to true, upstream tasks are also affected")
        .body("include_downstream", ParamType::Bool, "If set to true, downstream tasks are also affected")
        .body("include_future", ParamType::Bool, "If set to true, also tasks from future DAG runs are affected")
        .body("include_past", ParamType::Bool, "If set to true, also tasks from past DAG runs are affected")
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("fetch_dags", "dags", "Fetch all DAGs")
            .paged()
            .ordered()
            .query("tags", ParamType::StringList, "List of tags to filter results")
            .query("only_active", ParamType::Bool, "Only filter active DAGs")
            .query("paused", ParamType::Bool, "Only filter paused/unpaused DAGs")
            .query(
                "dag_id_pattern",
                ParamType::String,
                "If set, only return DAGs with dag_ids matching this pattern",
            ),
        dag(Endpoint::get("get_dag", "dags/{dag_id}", "Get a DAG by ID")),
        dag(Endpoint::get(
            "get_dag_details",
            "dags/{dag_id}/details",
            "Get a simplified representation of DAG",
        ))
        .query("fields", ParamType::StringList, "List of field for return"),
        Endpoint::get("get_dag_source", "dagSources/{file_token}", "Get a source code using file token")
            .path_param(
                "file_token",
                ParamType::String,
                "The key containing the encrypted path to the file",
            ),
        dag(Endpoint::patch("pause_dag", "dags/{dag_id}", "Pause a DAG by ID"))
            .fixed_query("update_mask", "is_paused")
            .fixed_body("is_paused", json!(true)),
        dag(Endpoint::patch("unpause_dag", "dags/{dag_id}", "Unpause a DAG by ID"))
            .fixed_query("update_mask", "is_paused")
            .fixed_body("is_paused", json!(false)),
        dag(Endpoint::get("get_dag_tasks", "dags/{dag_id}/tasks", "Get tasks for DAG")).ordered(),
        dag(Endpoint::get(
            "get_task",
            "dags/{dag_id}/tasks/{task_id}",
            "Get a simplified representation of a task",
        ))
        .path_param("task_id", ParamType::String, "The task ID"),
        dag(Endpoint::patch("patch_dag", "dags/{dag_id}", "Update a DAG"))
            .update_mask()
            .body("is_paused", ParamType::Bool, "Whether the DAG is paused"),
        Endpoint::patch("patch_dags", "dags", "Update multiple DAGs")
            .required_query(
                "dag_id_pattern",
                ParamType::String,
                "Only update DAGs with dag_ids matching this pattern",
            )
            .query("tags", ParamType::StringList, "List of tags to filter DAGs")
            .query("only_active", ParamType::Bool, "Only update active DAGs")
            .update_mask()
            .body("is_paused", ParamType::Bool, "Whether the DAGs are paused"),
        dag(Endpoint::delete("delete_dag", "dags/{dag_id}", "Delete a DAG")),
        relatives(
            dag(Endpoint::post(
                "clear_task_instances",
                "dags/{dag_id}/clearTaskInstances",
                "Clear a set of task instances associated with the DAG for a specified date range",
            ))
            .body("task_ids", ParamType::StringList, "A list of task ids to clear")
            .body("start_date", ParamType::DateTime, "The minimum execution date to clear")
            .body("end_date", ParamType::DateTime, "The maximum execution date to clear")
            .body("only_failed", ParamType::Bool, "Only clear failed tasks")
            .body("only_running", ParamType::Bool, "Only clear running tasks")
            .body("reset_dag_runs", ParamType::Bool, "Set state of DAG runs to RUNNING")
            .body("dag_run_id", ParamType::String, "The DAG run ID")
            .body("dry_run", ParamType::Bool, "If set, don't actually run this operation"),
        ),
        relatives(
            dag(Endpoint::post(
                "set_task_instances_state",
                "dags/{dag_id}/updateTaskInstancesState",
                "Set a state of task instances",
            ))
            .required_body(
                "state",
                ParamType::enumeration(&["success", "failed", "skipped"]),
                "Expected new state",
            )
            .body("task_id", ParamType::String, "The task ID")
            .body("execution_date", ParamType::DateTime, "The execution date")
            .body("dag_run_id", ParamType::String, "The task instance's DAG run ID")
            .body("dry_run", ParamType::Bool, "If set, don't actually run this operation"),
        ),
        Endpoint::put("reparse_dag_file", "parseDagFile/{file_token}", "Request re-parsing of a DAG file")
            .path_param(
                "file_token",
                ParamType::String,
                "The key containing the encrypted path to the file",
            ),
    ]
}
