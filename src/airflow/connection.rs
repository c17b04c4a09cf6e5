//! Airflow connection endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

/// Optional connection fields shared by create, update and test.
fn connection_fields(endpoint: Endpoint) -> Endpoint {
    endpoint
        .body("host", ParamType::String, "Host of the connection")
        .body("port", ParamType::Int, "Port of the connection")
        .body("login", ParamType::String, "Login of the connection")
        .body("password", ParamType::String, "Password of the connection")
        .body("schema", ParamType::String, "Schema of the connection")
        .body("extra", ParamType::String, "Other values that cannot be put into another field, serialized as JSON")
        .body("description", ParamType::String, "Description of the connection")
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_connections", "connections", "List all connections")
            .paged()
            .ordered(),
        connection_fields(
            Endpoint::post("create_connection", "connections", "Create a connection")
                .required_body("connection_id", ParamType::String, "The connection ID")
                .required_body("conn_type", ParamType::String, "The connection type"),
        ),
        Endpoint::get("get_connection", "connections/{connection_id}", "Get a connection by ID")
            .path_param("connection_id", ParamType::String, "The connection ID"),
        connection_fields(
            Endpoint::patch(
                "update_connection",
                "connections/{connection_id}",
                "Update a connection by ID",
            )
            .path_param("connection_id", ParamType::String, "The connection ID")
            .update_mask()
            .required_body("conn_type", ParamType::String, "The connection type"),
        ),
        Endpoint::delete(
            "delete_connection",
            "connections/{connection_id}",
            "Delete a connection by ID",
        )
        .path_param("connection_id", ParamType::String, "The connection ID"),
        // Only checks that Airflow can reach the target; nothing is stored.
        connection_fields(
            Endpoint::post("test_connection", "connections/test", "Test a connection")
                .required_body("connection_id", ParamType::String, "The connection ID")
                .required_body("conn_type", ParamType::String, "The connection type")
                .read_only(true),
        ),
    ]
}
