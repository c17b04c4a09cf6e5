//! Airflow REST API tool providers.
//!
//! One module per API category; each exposes a `tools` provider that turns
//! the category's endpoints into tool descriptors bound to a shared
//! [`AirflowClient`].

pub mod client;
pub mod endpoint;

pub mod config;
pub mod connection;
pub mod dag;
pub mod dagrun;
pub mod dagstats;
pub mod dataset;
pub mod eventlog;
pub mod importerror;
pub mod monitoring;
pub mod plugin;
pub mod pool;
pub mod provider;
pub mod taskinstance;
pub mod variable;
pub mod xcom;

pub use client::{AirflowClient, ApiRequest};
pub use endpoint::Endpoint;
