//! Airflow dataset endpoints.
//!
//! Airflow 3 renamed datasets to assets, so the category is only offered on
//! the `v1` API.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::{ApiVersion, Result};

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    if client.api_version() != ApiVersion::V1 {
        return Ok(ProviderOutput::Unsupported);
    }
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn uri(endpoint: Endpoint) -> Endpoint {
    endpoint.path_param("uri", ParamType::String, "The encoded Dataset URI")
}

fn dag(endpoint: Endpoint) -> Endpoint {
    endpoint.path_param("dag_id", ParamType::String, "The DAG ID")
}

fn before(endpoint: Endpoint) -> Endpoint {
    endpoint.query("before", ParamType::DateTime, "Timestamp to select event logs occurring before")
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_datasets", "datasets", "List datasets")
            .paged()
            .ordered()
            .query("uri_pattern", ParamType::String, "If set, only return datasets with uris matching this pattern")
            .query("dag_ids", ParamType::String, "One or more DAG IDs separated by commas"),
        uri(Endpoint::get("get_dataset", "datasets/{uri}", "Get a dataset by URI")),
        Endpoint::get("get_dataset_events", "datasets/events", "Get dataset events")
            .paged()
            .ordered()
            .query("dataset_id", ParamType::Int, "The Dataset ID that updated the dataset")
            .query("source_dag_id", ParamType::String, "The DAG ID that updated the dataset")
            .query("source_task_id", ParamType::String, "The task ID that updated the dataset")
            .query("source_run_id", ParamType::String, "The DAG run ID that updated the dataset")
            .query("source_map_index", ParamType::Int, "The map index that updated the dataset"),
        Endpoint::post("create_dataset_event", "datasets/events", "Create dataset event")
            .required_body("dataset_uri", ParamType::String, "The URI of the dataset")
            .body("extra", ParamType::Object, "The dataset event extra"),
        before(uri(dag(Endpoint::get(
            "get_dag_dataset_queued_event",
            "dags/{dag_id}/datasets/queuedEvent/{uri}",
            "Get a queued Dataset event for a DAG",
        )))),
        before(uri(dag(Endpoint::delete(
            "delete_dag_dataset_queued_event",
            "dags/{dag_id}/datasets/queuedEvent/{uri}",
            "Delete a queued Dataset event for a DAG",
        )))),
        before(dag(Endpoint::get(
            "get_dag_dataset_queued_events",
            "dags/{dag_id}/datasets/queuedEvent",
            "Get queued Dataset events for a DAG",
        ))),
        before(dag(Endpoint::delete(
            "delete_dag_dataset_queued_events",
            "dags/{dag_id}/datasets/queuedEvent",
            "Delete queued Dataset events for a DAG",
        ))),
        before(uri(Endpoint::get(
            "get_dataset_queued_events",
            "datasets/queuedEvent/{uri}",
            "Get queued Dataset events for a Dataset",
        ))),
        before(uri(Endpoint::delete(
            "delete_dataset_queued_events",
            "datasets/queuedEvent/{uri}",
            "Delete queued Dataset events for a Dataset",
        ))),
    ]
}
