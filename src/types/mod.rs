//! Core types for the Airflow MCP server.
//!
//! This module provides foundational types used throughout the system:
//! - **Category**: the closed set of Airflow API categories
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for the server, Airflow and logging

mod category;
mod config;
mod errors;

pub use category::ApiCategory;
pub use config::{
    AirflowConfig, ApiVersion, Config, ObservabilityConfig, ServerConfig, Transport,
    DEFAULT_AIRFLOW_HOST, DEFAULT_HOST, DEFAULT_PORT,
};
pub use errors::{Error, Result};
