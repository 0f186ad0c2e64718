//! Configuration for encoding resolution

use serde::{Deserialize, Serialize};

/// Configuration for the encoding resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Accept a field name that matches exactly one column ignoring case
    pub case_insensitive: bool,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable case-insensitive field lookup
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }
}
