//! # Airflow MCP - Apache Airflow tools over the Model Context Protocol
//!
//! Exposes the Airflow REST API as MCP tools:
//! - One tool provider per API category (config, dag, dagrun, pool, ...)
//! - Optional read-only mode restricting registration to non-mutating tools
//! - stdio, streamable HTTP and (deprecated) SSE transports
//!
//! ## Architecture
//!
//! ```text
//!   CLI selection ──► setup_tools ──► CapabilityRegistry::resolve(category)
//!                          │                      │
//!                          │               provider(&AirflowClient)
//!                          │                      │
//!                          ▼                      ▼
//!                  ToolHost::add_tool ◄── [read-only filter]
//!                          │
//!                          ▼
//!                 AirflowMcpServer ──► rmcp run loop (stdio | http)
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod airflow;
pub mod server;
pub mod tools;
pub mod types;

pub mod observability;

pub use types::{ApiCategory, Config, Error, Result};
