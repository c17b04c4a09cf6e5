//! Airflow DAG statistics endpoint.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn endpoints() -> Vec<Endpoint> {
    vec![Endpoint::get("get_dag_stats", "dagStats", "Get DAG run statistics by state").required_query(
        "dag_ids",
        ParamType::String,
        "Comma separated list of DAG IDs to get statistics for",
    )]
}
