//! Tracing initialization installs the process-global subscriber, so it runs
//! in its own test binary.

use airflow_mcp::observability::init_tracing;
use airflow_mcp::types::ObservabilityConfig;

#[test]
fn test_init_tracing_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&config);
    tracing::info!("subscriber installed");
}

#[test]
fn test_init_tracing_with_json_logs() {
    let config = ObservabilityConfig {
        json_logs: true,
        ..ObservabilityConfig::default()
    };
    init_tracing(&config);
}
