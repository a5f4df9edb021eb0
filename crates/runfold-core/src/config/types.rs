use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// User configuration read from `.runfold.toml` files.
///
/// Every field is optional so a file only needs to mention what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunfoldConfig {
    /// Output format used when `--format` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Print run lengths alongside values by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<bool>,
}

impl RunfoldConfig {
    /// Fill fields unset in `self` from `lower`. `self` wins on conflicts.
    pub fn merge(self, lower: RunfoldConfig) -> RunfoldConfig {
        RunfoldConfig {
            format: self.format.or(lower.format),
            count: self.count.or(lower.count),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn count(&self) -> bool {
        self.count.unwrap_or(false)
    }
}
