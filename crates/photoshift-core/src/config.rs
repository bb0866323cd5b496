use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory that downloaded images are written to.
pub const DEFAULT_OUTPUT_IMAGE_ROOT: &str = "static/images";

/// Settings for one rewrite run, loaded from `~/.config/photoshift/config.toml`
/// and overridable from the command line. Read-only once the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Directory downloaded images are saved to; created if absent.
    pub output_image_root: PathBuf,
    /// Fetch and save each referenced image while rewriting.
    pub download_images: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            output_image_root: PathBuf::from(DEFAULT_OUTPUT_IMAGE_ROOT),
            download_images: false,
        }
    }
}

impl TransformConfig {
    /// Applies command-line overrides; `None` keeps the configured value.
    pub fn with_overrides(mut self, output_image_root: Option<PathBuf>, download_images: Option<bool>) -> Self {
        if let Some(root) = output_image_root {
            self.output_image_root = root;
        }
        if let Some(download) = download_images {
            self.download_images = download;
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("photoshift")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TransformConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TransformConfig::default();
        write_config(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<TransformConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TransformConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

fn write_config(path: &Path, cfg: &TransformConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
