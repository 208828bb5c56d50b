// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::{HarmonyScheme, PaletteRequest, PaletteSize, VisualStyle};
use crate::storage::FileStore;
use anyhow::{Error, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub default_style: VisualStyle,
    #[serde(default)]
    pub default_scheme: HarmonyScheme,
    #[serde(default)]
    pub palette_size: PaletteSize,
    /// Run the AA policy on synthesized palettes before printing/exporting.
    #[serde(default = "default_true")]
    pub apply_wcag: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Overrides `<data_dir>/exports`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: VisualStyle::default(),
            default_scheme: HarmonyScheme::default(),
            palette_size: PaletteSize::default(),
            // Match the serde defaults
            apply_wcag: true,
            log_level: default_log_level(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Whether an error means the config file was missing, either through
    /// the explicit message or an IO NotFound anywhere in the chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        FileStore::write_locked(&path, toml_str)
    }

    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }

    /// Unknown level names fall back to `warn`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level '{}', using warn", self.log_level);
            LevelFilter::Warn
        })
    }

    pub fn export_dir(&self, ctx: &dyn AppContext) -> Result<PathBuf> {
        match &self.export_dir {
            Some(dir) => Ok(dir.clone()),
            None => ctx.get_export_dir(),
        }
    }

    /// A request for `category` carrying the configured defaults.
    pub fn request(&self, category: &str) -> PaletteRequest {
        PaletteRequest::new(category)
            .with_style(self.default_style)
            .with_scheme(self.default_scheme)
            .with_size(self.palette_size)
    }
}
