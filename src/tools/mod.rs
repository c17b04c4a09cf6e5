//! Tool infrastructure: descriptors, catalog, capability registry,
//! registration pipeline.
//!
//! Providers produce descriptors per API category; the pipeline filters
//! them and registers the survivors with a [`ToolHost`].

pub mod catalog;
pub mod descriptor;
pub mod params;
pub mod pipeline;
pub mod registry;

pub use catalog::{ToolCatalog, ToolHost};
pub use descriptor::{ToolDescriptor, ToolFuture, ToolHandler};
pub use params::{ParamDef, ParamLocation, ParamType};
pub use pipeline::{filter_read_only, select_tools, setup_tools, SelectionRequest};
pub use registry::{AirflowCapabilities, CapabilityRegistry, ProviderFn, ProviderOutput};
