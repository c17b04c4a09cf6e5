//! Airflow pool endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_pools", "pools", "List pools").paged().ordered(),
        Endpoint::get("get_pool", "pools/{pool_name}", "Get a pool by name")
            .path_param("pool_name", ParamType::String, "The pool name"),
        Endpoint::delete("delete_pool", "pools/{pool_name}", "Delete a pool")
            .path_param("pool_name", ParamType::String, "The pool name"),
        Endpoint::post("post_pool", "pools", "Create a pool")
            .required_body("name", ParamType::String, "The name of the pool")
            .required_body("slots", ParamType::Int, "The maximum number of slots")
            .body("description", ParamType::String, "The description of the pool")
            .body(
                "include_deferred",
                ParamType::Bool,
                "If set to true, deferred tasks are considered when calculating open pool slots",
            ),
        Endpoint::patch("patch_pool", "pools/{pool_name}", "Update a pool")
            .path_param("pool_name", ParamType::String, "The pool name")
            .update_mask()
            .body("name", ParamType::String, "The new name of the pool")
            .body("slots", ParamType::Int, "The maximum number of slots")
            .body("description", ParamType::String, "The description of the pool")
            .body(
                "include_deferred",
                ParamType::Bool,
                "If set to true, deferred tasks are considered when calculating open pool slots",
            ),
    ]
}
