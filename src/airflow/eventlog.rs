//! Airflow audit event log endpoints.

use super::endpoint::{into_tools, Endpoint};
use super::AirflowClient;
use crate::tools::{ParamType, ProviderOutput};
use crate::types::Result;

pub fn tools(client: &AirflowClient) -> Result<ProviderOutput> {
    Ok(ProviderOutput::Tools(into_tools(endpoints(), client)))
}

fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_event_logs", "eventLogs", "List log entries from event log")
            .paged()
            .ordered()
            .query("dag_id", ParamType::String, "Returns objects matched by the DAG ID")
            .query("task_id", ParamType::String, "Returns objects matched by the Task ID")
            .query("run_id", ParamType::String, "Returns objects matched by the Run ID")
            .query("event", ParamType::String, "The name of event log")
            .query("owner", ParamType::String, "The owner's name of event log")
            .query("before", ParamType::DateTime, "Timestamp to select event logs occurring before")
            .query("after", ParamType::DateTime, "Timestamp to select event logs occurring after"),
        Endpoint::get("get_event_log", "eventLogs/{event_log_id}", "Get a specific log entry by ID")
            .path_param("event_log_id", ParamType::Int, "The event log ID"),
    ]
}
