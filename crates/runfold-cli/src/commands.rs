//! Subcommand implementations for the runfold CLI.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use runfold_core::config::{resolve_config, RunfoldConfig};
use runfold_core::{collapse, collapse_counted, format, parse, OutputFormat};

/// Where the integers for `collapse` come from.
#[derive(Debug)]
pub enum InputSource {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Positional values win, then `--file`, then stdin.
    pub fn pick(values: Vec<String>, file: Option<PathBuf>) -> Self {
        if !values.is_empty() {
            Self::Args(values)
        } else if let Some(path) = file {
            Self::File(path)
        } else {
            Self::Stdin
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Self::Args(values) => Ok(values.join(" ")),
            Self::File(path) => read_file(path),
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Args(_) => f.write_str("arguments"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

// ---------------------------------------------------------------------------
// Collapse — fold runs of repeated integers
// ---------------------------------------------------------------------------

/// Flags given on the command line. `None` means "use the config file".
#[derive(Debug, Default)]
pub struct CollapseOverrides {
    pub format: Option<OutputFormat>,
    pub count: Option<bool>,
}

pub fn cmd_collapse(source: InputSource, overrides: CollapseOverrides) -> Result<()> {
    let resolved = resolve_config()?;
    let config = RunfoldConfig {
        format: overrides.format,
        count: overrides.count,
    }
    .merge(resolved.config);

    let text = source.read()?;
    println!("{}", collapse_text(&text, &config, &source)?);
    Ok(())
}

/// Parse, collapse and render `text` according to `config`.
pub fn collapse_text(text: &str, config: &RunfoldConfig, source: &InputSource) -> Result<String> {
    let values =
        parse::parse_sequence(text).with_context(|| format!("parsing input from {source}"))?;

    let rendered = if config.count() {
        let runs =
            collapse_counted(&values).with_context(|| format!("collapsing input from {source}"))?;
        tracing::info!(
            %source,
            input_len = values.len(),
            runs = runs.len(),
            "collapsed with counts"
        );
        format::render_runs(&runs, config.format())?
    } else {
        let folded = collapse(&values).with_context(|| format!("collapsing input from {source}"))?;
        tracing::info!(
            %source,
            input_len = values.len(),
            output_len = folded.len(),
            "collapsed"
        );
        format::render_values(&folded, config.format())?
    };
    Ok(rendered)
}

// ---------------------------------------------------------------------------
// Config — show the effective configuration
// ---------------------------------------------------------------------------

pub fn cmd_config() -> Result<()> {
    let resolved = resolve_config()?;
    let effective = RunfoldConfig {
        format: Some(resolved.config.format()),
        count: Some(resolved.config.count()),
    };
    let toml_str =
        toml::to_string_pretty(&effective).context("failed to serialize config to TOML")?;
    print!("{toml_str}");

    println!();
    if resolved.sources.is_empty() {
        println!("# no config files found, using defaults");
    } else {
        println!("# loaded from:");
        for path in &resolved.sources {
            println!("#   {}", path.display());
        }
    }
    Ok(())
}
