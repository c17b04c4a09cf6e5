//! Airflow variable endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_variables", "variables", "List all variables")
            .paged()
            .ordered(),
        Endpoint::post("create_variable", "variables", "Create a variable")
            .required_body("key", ParamType::String, "The variable key")
            .required_body("value", ParamType::String, "The variable value")
            .body("description", ParamType::String, "The description of the variable"),
        Endpoint::get("get_variable", "variables/{variable_key}", "Get a variable by key")
            .path_param("variable_key", ParamType::String, "The variable key"),
        Endpoint::patch("update_variable", "variables/{variable_key}", "Update a variable by key")
            .path_param("variable_key", ParamType::String, "The variable key")
            .update_mask()
            .required_body("key", ParamType::String, "The variable key")
            .required_body("value", ParamType::String, "The new variable value")
            .body("description", ParamType::String, "The description of the variable"),
        Endpoint::delete("delete_variable", "variables/{variable_key}", "Delete a variable by key")
            .path_param("variable_key", ParamType::String, "The variable key"),
    ]
}
