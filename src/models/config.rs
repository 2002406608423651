use std::collections::HashMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use led_resample::{BackgroundPolicy, GridResampler, ResampleError, ScalingAlgorithm, TargetGrid};
use serde::{Deserialize, Deserializer};

use crate::error::GridError;
use crate::rendering::ExportFormat;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "LEDGRID_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone)]
pub struct GridConfig {
    /// Named LED layouts
    #[serde(default)]
    pub layouts: HashMap<String, LayoutConfig>,

    /// Layout used when none is requested
    #[serde(default = "default_layout")]
    pub default_layout: Option<String>,

    /// Sample list output format
    #[serde(default)]
    pub format: ExportFormat,
}

fn default_layout() -> Option<String> {
    Some("default".to_string())
}

/// One physical LED arrangement and how to fill it
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LayoutConfig {
    /// LEDs per row
    pub width: usize,

    /// Number of rows
    pub height: usize,

    /// Reconstruction filter (`box`, `bilinear`, `bicubic`, `lanczos`)
    #[serde(default, deserialize_with = "from_str_field")]
    pub algorithm: ScalingAlgorithm,

    /// `transparent`, `true-black[:lift]`, or a quoted hex color
    #[serde(default, deserialize_with = "from_str_field")]
    pub background: BackgroundPolicy,

    /// Nearest-neighbour magnification of the preview PNG
    #[serde(default = "default_preview_scale")]
    pub preview_scale: u32,
}

fn default_preview_scale() -> u32 {
    16
}

fn from_str_field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            algorithm: ScalingAlgorithm::default(),
            background: BackgroundPolicy::default(),
            preview_scale: default_preview_scale(),
        }
    }
}

impl LayoutConfig {
    pub fn target(&self) -> Result<TargetGrid, ResampleError> {
        TargetGrid::new(self.width, self.height)
    }

    pub fn resampler(&self) -> Result<GridResampler, ResampleError> {
        Ok(GridResampler::new(self.target()?)
            .algorithm(self.algorithm)
            .background(self.background))
    }
}

impl GridConfig {
    /// Resolve the config file: explicit path first, then `LEDGRID_CONFIG`.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, GridError> {
        serde_yaml::from_str(content).map_err(|e| GridError::Config(e.to_string()))
    }

    /// Load configuration from `path`, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        layouts = config.layouts.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        %e,
                        path = %path.display(),
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    %e,
                    path = %path.display(),
                    "Failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Get a layout by name
    pub fn get_layout(&self, name: &str) -> Option<&LayoutConfig> {
        self.layouts.get(name)
    }

    /// Get the default layout
    pub fn get_default_layout(&self) -> Option<&LayoutConfig> {
        self.default_layout
            .as_ref()
            .and_then(|name| self.layouts.get(name))
    }

    /// The requested layout, the default layout, or built-in defaults.
    ///
    /// Asking for a layout that does not exist is an error; having no
    /// default is not.
    pub fn resolve_layout(&self, name: Option<&str>) -> Result<LayoutConfig, GridError> {
        match name {
            Some(name) => self
                .get_layout(name)
                .cloned()
                .ok_or_else(|| GridError::Config(format!("layout not found: {name}"))),
            None => Ok(self.get_default_layout().cloned().unwrap_or_default()),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        let mut layouts = HashMap::new();
        layouts.insert("default".to_string(), LayoutConfig::default());

        Self {
            layouts,
            default_layout: default_layout(),
            format: ExportFormat::default(),
        }
    }
}
