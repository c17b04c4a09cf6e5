//! Airflow DAG run endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

const RUN_STATES: [&str; 3] = ["queued", "success", "failed"];

fn dag(endpoint: Endpoint) -> Endpoint {
    endpoint.path_param("dag_id", ParamType::String, "The DAG ID")
}

fn dag_run(endpoint: Endpoint) -> Endpoint {
    dag(endpoint).path_param("dag_run_id", ParamType::String, "The DAG run ID")
}

fn date_filters(endpoint: Endpoint) -> Endpoint {
    endpoint
        .query("execution_date_gte", ParamType::DateTime, "Returns objects greater or equal to the specified date")
        .query("execution_date_lte", ParamType::DateTime, "Returns objects less than or equal to the specified date")
        .query("start_date_gte", ParamType::DateTime, "Returns objects greater or equal the specified date")
        .query("start_date_lte", ParamType::DateTime, "Returns objects less or equal the specified date")
        .query("end_date_gte", ParamType::DateTime, "Returns objects greater or equal the specified date")
        .query("end_date_lte", ParamType::DateTime, "Returns objects less than or equal to the specified date")
        .query("updated_at_gte", ParamType::DateTime, "Returns objects greater or equal the specified date")
        .query("updated_at_lte", ParamType::DateTime, "Returns objects less or equal the specified date")
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        dag(Endpoint::post("post_dag_run", "dags/{dag_id}/dagRuns", "Trigger a DAG by ID"))
            .body("dag_run_id", ParamType::String, "The DAG run ID; generated by Airflow when omitted")
            .body("logical_date", ParamType::DateTime, "The logical date of the DAG run")
            .body("data_interval_start", ParamType::DateTime, "The beginning of the data interval")
            .body("data_interval_end", ParamType::DateTime, "The end of the data interval")
            .body("conf", ParamType::Object, "JSON object describing additional configuration parameters")
            .body("note", ParamType::String, "Contains manually entered notes by the user about the DAG run"),
        date_filters(dag(Endpoint::get("get_dag_runs", "dags/{dag_id}/dagRuns", "Get DAG runs by ID")))
            .paged()
            .ordered()
            .query("state", ParamType::StringList, "The value can be repeated to retrieve multiple matching values"),
        // Listing endpoint that happens to use POST for its filter body.
        Endpoint::post("get_dag_runs_batch", "dags/~/dagRuns/list", "List DAG runs (batch)")
            .read_only(true)
            .body("dag_ids", ParamType::StringList, "Return objects with specific DAG IDs")
            .body("states", ParamType::StringList, "Return objects with specific states")
            .body("page_offset", ParamType::Int, "The number of items to skip")
            .body("page_limit", ParamType::Int, "The numbers of items to return")
            .body("order_by", ParamType::String, "The name of the field to order the results by")
            .body("execution_date_gte", ParamType::DateTime, "Returns objects greater or equal to the specified date")
            .body("execution_date_lte", ParamType::DateTime, "Returns objects less than or equal to the specified date")
            .body("start_date_gte", ParamType::DateTime, "Returns objects greater or equal the specified date")
            .body("start_date_lte", ParamType::DateTime, "Returns objects less or equal the specified date")
            .body("end_date_gte", ParamType::DateTime, "Returns objects greater or equal the specified date")
            .body("end_date_lte", ParamType::DateTime, "Returns objects less than or equal to the specified date"),
        dag_run(Endpoint::get("get_dag_run", "dags/{dag_id}/dagRuns/{dag_run_id}", "Get a DAG run by DAG ID and DAG run ID")),
        dag_run(Endpoint::patch(
            "update_dag_run_state",
            "dags/{dag_id}/dagRuns/{dag_run_id}",
            "Update a DAG run state by DAG ID and DAG run ID",
        ))
        .required_body("state", ParamType::enumeration(&RUN_STATES), "The new state of the DAG run"),
        dag_run(Endpoint::delete(
            "delete_dag_run",
            "dags/{dag_id}/dagRuns/{dag_run_id}",
            "Delete a DAG run by DAG ID and DAG run ID",
        )),
        dag_run(Endpoint::post(
            "clear_dag_run",
            "dags/{dag_id}/dagRuns/{dag_run_id}/clear",
            "Clear a DAG run",
        ))
        .body("dry_run", ParamType::Bool, "If set, don't actually run this operation"),
        dag_run(Endpoint::patch(
            "set_dag_run_note",
            "dags/{dag_id}/dagRuns/{dag_run_id}/setNote",
            "Update the DagRun note",
        ))
        .required_body("note", ParamType::String, "Custom notes left by users for this DAG run"),
        dag_run(Endpoint::get(
            "get_upstream_dataset_events",
            "dags/{dag_id}/dagRuns/{dag_run_id}/upstreamDatasetEvents",
            "Get dataset events for a DAG run",
        )),
    ]
}
