//! Declarative Airflow endpoint → tool descriptor builder.
//!
//! Each category module describes its endpoints as data: HTTP method, path
//! template with `{param}` placeholders, and typed parameters tagged with
//! where they travel (path, query string or JSON body). The builder turns
//! that into a [`ToolDescriptor`] whose handler assembles and sends the
//! request.

use reqwest::Method;
use serde_json::{Map, Value};

use super::client::{AirflowClient, ApiRequest};
use crate::tools::{ParamDef, ParamLocation, ParamType, ToolDescriptor};
use crate::types::{Error, Result};

/// One Airflow REST endpoint exposed as a tool.
#[derive(Debug, Clone)]
pub struct Endpoint {
    name: &'static str,
    description: &'static str,
    method: Method,
    path: &'static str,
    params: Vec<ParamDef>,
    fixed_query: Vec<(&'static str, &'static str)>,
    fixed_body: Vec<(&'static str, Value)>,
    read_only: Option<bool>,
}

impl Endpoint {
    fn new(method: Method, name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            method,
            path,
            params: Vec::new(),
            fixed_query: Vec::new(),
            fixed_body: Vec::new(),
            read_only: None,
        }
    }

    pub fn get(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::GET, name, path, description)
    }

    pub fn post(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::POST, name, path, description)
    }

    pub fn put(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::PUT, name, path, description)
    }

    pub fn patch(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::PATCH, name, path, description)
    }

    pub fn delete(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(Method::DELETE, name, path, description)
    }

    /// Required path parameter; must appear as `{name}` in the template.
    pub fn path_param(self, name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        self.param(ParamDef::new(name, param_type, ParamLocation::Path, description))
    }

    /// Optional query-string parameter.
    pub fn query(self, name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        self.param(ParamDef::new(
            name,
            ParamType::optional(param_type),
            ParamLocation::Query,
            description,
        ))
    }

    /// Required query-string parameter.
    pub fn required_query(
        self,
        name: &'static str,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        self.param(ParamDef::new(name, param_type, ParamLocation::Query, description))
    }

    /// Optional JSON body field.
    pub fn body(self, name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        self.param(ParamDef::new(
            name,
            ParamType::optional(param_type),
            ParamLocation::Body,
            description,
        ))
    }

    /// Required JSON body field.
    pub fn required_body(
        self,
        name: &'static str,
        param_type: ParamType,
        description: &'static str,
    ) -> Self {
        self.param(ParamDef::new(name, param_type, ParamLocation::Body, description))
    }

    /// Standard `limit` / `offset` paging parameters.
    pub fn paged(self) -> Self {
        self.query("limit", ParamType::Int, "The numbers of items to return")
            .query(
                "offset",
                ParamType::Int,
                "The number of items to skip before starting to collect the result set",
            )
    }

    /// Standard `order_by` parameter.
    pub fn ordered(self) -> Self {
        self.query(
            "order_by",
            ParamType::String,
            "The name of the field to order the results by. Prefix a field name with '-' to reverse the sort order",
        )
    }

    /// Standard `update_mask` parameter for PATCH endpoints.
    pub fn update_mask(self) -> Self {
        self.query(
            "update_mask",
            ParamType::StringList,
            "The fields to update on the resource. If absent, all fields are updated",
        )
    }

    /// Query parameter always sent with a constant value.
    pub fn fixed_query(mut self, name: &'static str, value: &'static str) -> Self {
        self.fixed_query.push((name, value));
        self
    }

    /// Body field always sent with a constant value.
    pub fn fixed_body(mut self, name: &'static str, value: Value) -> Self {
        self.fixed_body.push((name, value));
        self
    }

    /// Override the read-only flag derived from the HTTP method.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    pub fn param(mut self, param: ParamDef) -> Self {
        self.params.push(param);
        self
    }

    /// GET endpoints are read-only unless overridden.
    pub fn is_read_only(&self) -> bool {
        self.read_only.unwrap_or(self.method == Method::GET)
    }

    /// Assemble the request for already-validated `args`.
    pub fn build_request(&self, args: &Value) -> Result<ApiRequest> {
        let empty = Map::new();
        let args = args.as_object().unwrap_or(&empty);

        let mut segments = Vec::new();
        for segment in self.path.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    let value = args
                        .get(name)
                        .and_then(scalar_to_string)
                        .ok_or_else(|| {
                            Error::validation(format!("Missing path parameter: {}", name))
                        })?;
                    segments.push(value);
                }
                None => segments.push(segment.to_string()),
            }
        }

        let mut query: Vec<(String, String)> = self
            .fixed_query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut body = Map::new();

        for param in &self.params {
            let Some(value) = args.get(&param.name) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            match param.location {
                ParamLocation::Path => {}
                ParamLocation::Query => match value {
                    Value::Array(items) => query.extend(
                        items
                            .iter()
                            .filter_map(scalar_to_string)
                            .map(|v| (param.name.clone(), v)),
                    ),
                    other => {
                        if let Some(v) = scalar_to_string(other) {
                            query.push((param.name.clone(), v));
                        }
                    }
                },
                ParamLocation::Body => {
                    body.insert(param.name.clone(), value.clone());
                }
            }
        }

        for (name, value) in &self.fixed_body {
            body.insert(name.to_string(), value.clone());
        }

        let sends_body = matches!(self.method, Method::POST | Method::PUT | Method::PATCH);
        Ok(ApiRequest {
            method: self.method.clone(),
            segments,
            query,
            body: sends_body.then_some(Value::Object(body)),
        })
    }

    /// Turn this endpoint into a tool bound to `client`.
    pub fn into_tool(self, client: &AirflowClient) -> ToolDescriptor {
        let read_only = self.is_read_only();
        let destructive = self.method == Method::DELETE;
        let name = self.name;
        let description = self.description;
        let params = self.params.clone();
        let client = client.clone();

        ToolDescriptor::new(name, description, read_only, move |args| {
            let client = client.clone();
            let request = self.build_request(&args);
            async move {
                match request {
                    Ok(request) => client.send(request).await,
                    Err(e) => Err(e),
                }
            }
        })
        .with_parameters(params)
        .destructive(destructive)
    }
}

/// Build the tools for a list of endpoints.
pub fn into_tools(endpoints: Vec<Endpoint>, client: &AirflowClient) -> Vec<ToolDescriptor> {
    endpoints
        .into_iter()
        .map(|endpoint| endpoint.into_tool(client))
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
