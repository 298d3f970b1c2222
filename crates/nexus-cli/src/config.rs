use anyhow::{Context, Result};
use nexus_qr::PresentationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the nexus config directory based on priority:
/// 1. NEXUS_PATH environment variable (with tilde expansion)
/// 2. System config directory
/// 3. ~/.nexus (fallback for systems without a standard config directory)
pub fn resolve_config_dir() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("NEXUS_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("nexus"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".nexus"));
    }

    anyhow::bail!("Could not determine config path: no HOME directory or system config directory found")
}

/// Explicit `--config` path wins; otherwise `config.toml` in the config directory.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => Ok(expand_tilde(&path.to_string_lossy())),
        None => Ok(resolve_config_dir()?.join("config.toml")),
    }
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub presentation: PresentationConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
