use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::RunfoldConfig;

/// Project config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".runfold.toml";

/// Global config file, relative to the home directory.
pub const GLOBAL_CONFIG_FILE: &str = ".config/runfold/config.toml";

/// The merged configuration and the files it came from.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub config: RunfoldConfig,
    /// Files that were found and loaded, most specific first.
    pub sources: Vec<PathBuf>,
}

/// Resolve configuration for the current directory and user.
///
/// Files searched, most specific first:
/// 1. `./.runfold.toml` — project overrides
/// 2. `~/.config/runfold/config.toml` — user defaults
///
/// Each field takes the value from the most specific file that sets it.
pub fn resolve_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    resolve_config_in(&cwd, home_dir().as_deref())
}

/// Same as [`resolve_config`] with explicit search roots.
pub fn resolve_config_in(dir: &Path, home: Option<&Path>) -> Result<ResolvedConfig> {
    let mut candidates = vec![dir.join(LOCAL_CONFIG_FILE)];
    if let Some(home) = home {
        candidates.push(home.join(GLOBAL_CONFIG_FILE));
    }

    let mut resolved = ResolvedConfig::default();
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        let layer = load_config_file(&path)?;
        resolved.config = resolved.config.merge(layer);
        resolved.sources.push(path);
    }
    Ok(resolved)
}

/// Read and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<RunfoldConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: RunfoldConfig =
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config file");
    Ok(config)
}

/// Platform-aware home directory lookup.
fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
