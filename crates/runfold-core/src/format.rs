use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collapse::Run;

/// How collapsed output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line.
    #[default]
    Lines,
    /// A single bracketed line, e.g. `[1, 2, 3]`.
    Inline,
    /// Compact JSON array.
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Lines, Self::Inline, Self::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Inline => "inline",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown format '{s}' (expected lines, inline or json)"))
    }
}

/// Render collapsed values.
pub fn render_values(values: &[i64], format: OutputFormat) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Lines => join(values.iter().map(i64::to_string), "\n"),
        OutputFormat::Inline => format!("[{}]", join(values.iter().map(i64::to_string), ", ")),
        OutputFormat::Json => serde_json::to_string(values)?,
    })
}

/// Render runs with their lengths.
///
/// `Lines` mirrors `uniq -c`: `<len> <value>` per line.
pub fn render_runs(runs: &[Run<i64>], format: OutputFormat) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Lines => join(runs.iter().map(|r| format!("{} {}", r.len, r.value)), "\n"),
        OutputFormat::Inline => format!(
            "[{}]",
            join(runs.iter().map(|r| format!("{}x{}", r.value, r.len)), ", ")
        ),
        OutputFormat::Json => serde_json::to_string(runs)?,
    })
}

fn join(items: impl Iterator<Item = String>, sep: &str) -> String {
    items.collect::<Vec<_>>().join(sep)
}
