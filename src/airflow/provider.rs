//! Airflow provider package listing.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::ProviderOutput;
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn endpoints() -> Vec<Endpoint> {
    vec![Endpoint::get("get_providers", "providers", "Get a list of installed provider packages")]
}
