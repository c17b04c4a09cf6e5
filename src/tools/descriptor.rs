//! Tool descriptors: one callable Airflow operation plus its metadata.

use futures::future::BoxFuture;
use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use super::params::{self, ParamDef};
use crate::types::{Error, Result};

/// Future returned by a tool handler.
pub type ToolFuture = BoxFuture<'static, Result<Value>>;

/// Shared callable implementing a tool.
pub type ToolHandler = Arc<dyn Fn(Value) -> ToolFuture + Send + Sync>;

/// A tool as produced by a category provider and registered with the host.
///
/// Cloning is cheap: the handler is reference counted.
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParamDef>,
    /// True when the operation does not mutate Airflow state.
    pub read_only: bool,
    /// True when the operation deletes Airflow state.
    pub destructive: bool,
    handler: ToolHandler,
}

impl ToolDescriptor {
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        read_only: bool,
        handler: F,
    ) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            read_only,
            destructive: false,
            handler: Arc::new(move |args| -> ToolFuture { Box::pin(handler(args)) }),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParamDef>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    /// JSON schema for the tool arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        params::input_schema(&self.parameters)
    }

    /// Validate `args`, fill defaults and run the handler.
    pub async fn invoke(&self, mut args: Value) -> Result<Value> {
        if args.is_null() {
            args = Value::Object(Map::new());
        }

        let errors = params::validate_args(&self.parameters, &args)?;
        if !errors.is_empty() {
            return Err(Error::validation(format!(
                "invalid arguments for {}: {}",
                self.name,
                errors.join("; ")
            )));
        }
        params::fill_defaults(&self.parameters, &mut args);

        (self.handler)(args).await
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("read_only", &self.read_only)
            .field("destructive", &self.destructive)
            .field("parameters", &self.parameters.len())
            .finish_non_exhaustive()
    }
}
