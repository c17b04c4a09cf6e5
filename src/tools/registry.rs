//! Capability registry: static lookup from API category to tool provider.

use crate::airflow::{self, AirflowClient};
use crate::types::{ApiCategory, Result};

use super::descriptor::ToolDescriptor;

/// What a provider produced for its category.
#[derive(Debug)]
pub enum ProviderOutput {
    Tools(Vec<ToolDescriptor>),
    /// The category is not available against the configured Airflow API.
    Unsupported,
}

/// Builds the tool descriptors of one category.
pub type ProviderFn = fn(&AirflowClient) -> Result<ProviderOutput>;

/// Total mapping from category to provider.
#[cfg_attr(test, mockall::automock)]
pub trait CapabilityRegistry {
    fn resolve(&self, category: ApiCategory) -> ProviderFn;
}

/// Provider table for the Airflow REST API.
#[derive(Debug, Default, Clone, Copy)]
pub struct AirflowCapabilities;

impl CapabilityRegistry for AirflowCapabilities {
    fn resolve(&self, category: ApiCategory) -> ProviderFn {
        match category {
            ApiCategory::Config => airflow::config::tools,
            ApiCategory::Connection => airflow::connection::tools,
            ApiCategory::Dag => airflow::dag::tools,
            ApiCategory::DagRun => airflow::dagrun::tools,
            ApiCategory::DagStats => airflow::dagstats::tools,
            ApiCategory::Dataset => airflow::dataset::tools,
            ApiCategory::EventLog => airflow::eventlog::tools,
            ApiCategory::ImportError => airflow::importerror::tools,
            ApiCategory::Monitoring => airflow::monitoring::tools,
            ApiCategory::Plugin => airflow::plugin::tools,
            ApiCategory::Pool => airflow::pool::tools,
            ApiCategory::Provider => airflow::provider::tools,
            ApiCategory::TaskInstance => airflow::taskinstance::tools,
            ApiCategory::Variable => airflow::variable::tools,
            ApiCategory::Xcom => airflow::xcom::tools,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AirflowConfig, ApiVersion};
    use std::collections::HashSet;

    fn client(api_version: ApiVersion) -> AirflowClient {
        AirflowClient::new(AirflowConfig {
            api_version,
            ..AirflowConfig::default()
        })
        .unwrap()
    }

    fn tools_of(category: ApiCategory, client: &AirflowClient) -> Vec<ToolDescriptor> {
        match AirflowCapabilities.resolve(category)(client).unwrap() {
            ProviderOutput::Tools(tools) => tools,
            ProviderOutput::Unsupported => Vec::new(),
        }
    }

    #[test]
    fn test_every_category_resolves_to_tools_on_v1() {
        let client = client(ApiVersion::V1);
        for category in ApiCategory::ALL {
            let output = AirflowCapabilities.resolve(category)(&client).unwrap();
            match output {
                ProviderOutput::Tools(tools) => {
                    assert!(!tools.is_empty(), "{} produced no tools", category)
                }
                ProviderOutput::Unsupported => panic!("{} unsupported on v1", category),
            }
        }
    }

    #[test]
    fn test_dataset_unsupported_on_v2() {
        let client = client(ApiVersion::V2);
        let output = AirflowCapabilities.resolve(ApiCategory::Dataset)(&client).unwrap();
        assert!(matches!(output, ProviderOutput::Unsupported));
    }

    #[test]
    fn test_tool_names_unique_across_categories() {
        let client = client(ApiVersion::V1);
        let mut seen = HashSet::new();
        for category in ApiCategory::ALL {
            for tool in tools_of(category, &client) {
                assert!(seen.insert(tool.name.clone()), "duplicate tool {}", tool.name);
            }
        }
    }

    #[test]
    fn test_every_category_has_a_read_only_tool() {
        let client = client(ApiVersion::V1);
        for category in ApiCategory::ALL {
            assert!(
                tools_of(category, &client).iter().any(|t| t.read_only),
                "{} has no read-only tools",
                category
            );
        }
    }

    #[test]
    fn test_destructive_tools_are_never_read_only() {
        let client = client(ApiVersion::V1);
        for category in ApiCategory::ALL {
            for tool in tools_of(category, &client) {
                assert!(!(tool.destructive && tool.read_only), "{}", tool.name);
            }
        }
    }
}
