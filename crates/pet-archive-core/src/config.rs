use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::csv_loader::PET_ARCHIVE_CSV;
use crate::fetch::HttpOptions;
use crate::source::ResourceSource;

/// HTTP fetch parameters (optional `[http]` section in config.toml).
/// Absent values mean no limit: a hanging server hangs the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl From<&HttpConfig> for HttpOptions {
    fn from(cfg: &HttpConfig) -> Self {
        HttpOptions {
            connect_timeout_secs: cfg.connect_timeout_secs,
            timeout_secs: cfg.timeout_secs,
        }
    }
}

/// Global configuration loaded from `~/.config/pet-archive/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetArchiveConfig {
    /// Where the pet archive CSV lives: a path (relative to `asset_root`) or an http(s) URL.
    pub csv_source: String,
    /// Directory relative paths resolve against. None = current working directory.
    #[serde(default)]
    pub asset_root: Option<PathBuf>,
    /// Optional HTTP settings; if missing, no timeouts are applied.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for PetArchiveConfig {
    fn default() -> Self {
        Self {
            csv_source: PET_ARCHIVE_CSV.to_string(),
            asset_root: None,
            http: None,
        }
    }
}

impl PetArchiveConfig {
    /// Asset root to resolve relative sources against.
    pub fn asset_root(&self) -> Result<PathBuf> {
        match &self.asset_root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().context("current directory"),
        }
    }

    /// Resolve `csv_source`, or `override_source` when given, into a fetchable source.
    pub fn resolve_source(&self, override_source: Option<&str>) -> Result<ResourceSource> {
        let raw = override_source.unwrap_or(&self.csv_source);
        let root = self.asset_root()?;
        ResourceSource::resolve(raw, &root).with_context(|| format!("resolve source {:?}", raw))
    }

    pub fn http_options(&self) -> HttpOptions {
        self.http.as_ref().map(HttpOptions::from).unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pet-archive")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PetArchiveConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PetArchiveConfig> {
    if !path.exists() {
        let default_cfg = PetArchiveConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PetArchiveConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
