//! Airflow API categories.
//!
//! Each category groups the REST endpoints of one Airflow resource and is
//! served by exactly one tool provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Error;

/// Closed set of Airflow API categories that can be exposed as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiCategory {
    Config,
    Connection,
    Dag,
    DagRun,
    DagStats,
    Dataset,
    EventLog,
    ImportError,
    Monitoring,
    Plugin,
    Pool,
    Provider,
    TaskInstance,
    Variable,
    Xcom,
}

impl ApiCategory {
    /// Every category, in declaration order.
    pub const ALL: [ApiCategory; 15] = [
        ApiCategory::Config,
        ApiCategory::Connection,
        ApiCategory::Dag,
        ApiCategory::DagRun,
        ApiCategory::DagStats,
        ApiCategory::Dataset,
        ApiCategory::EventLog,
        ApiCategory::ImportError,
        ApiCategory::Monitoring,
        ApiCategory::Plugin,
        ApiCategory::Pool,
        ApiCategory::Provider,
        ApiCategory::TaskInstance,
        ApiCategory::Variable,
        ApiCategory::Xcom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApiCategory::Config => "config",
            ApiCategory::Connection => "connection",
            ApiCategory::Dag => "dag",
            ApiCategory::DagRun => "dagrun",
            ApiCategory::DagStats => "dagstats",
            ApiCategory::Dataset => "dataset",
            ApiCategory::EventLog => "eventlog",
            ApiCategory::ImportError => "importerror",
            ApiCategory::Monitoring => "monitoring",
            ApiCategory::Plugin => "plugin",
            ApiCategory::Pool => "pool",
            ApiCategory::Provider => "provider",
            ApiCategory::TaskInstance => "taskinstance",
            ApiCategory::Variable => "variable",
            ApiCategory::Xcom => "xcom",
        }
    }
}

impl fmt::Display for ApiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::validation(format!("unknown API category: {}", s)))
    }
}

#[cfg(feature = "cli")]
impl clap::ValueEnum for ApiCategory {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}
