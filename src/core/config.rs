//! Configuration for task_galaxy
//!
//! Canvas dimensions and CLI defaults, loaded from JSON. Every field has a
//! default so a partial file only overrides what it names.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::{GalaxyError, Result, ResultExt};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".galaxy_config.json";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "task-galaxy";

// =============================================================================
// Output Format
// =============================================================================

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// SVG document (layout only)
    Svg,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Svg => "svg",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(GalaxyError::UnknownFormat { name: s.to_string() }),
        }
    }
}

// =============================================================================
// Canvas
// =============================================================================

/// Fixed drawing dimensions supplied to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// viewBox width
    pub width: f64,
    /// viewBox height
    pub height: f64,
    /// Radius of the central core; wedges start here
    pub core_radius: f64,
    /// Radius of the content orbit
    pub base_orbit: f64,
    /// Distance between consecutive orbits
    pub orbit_gap: f64,
    /// Radius of a drawn node
    pub node_radius: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 800.0,
            core_radius: 100.0,
            base_orbit: 170.0,
            orbit_gap: 85.0,
            node_radius: 26.0,
        }
    }
}

impl CanvasConfig {
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Reject dimensions that cannot produce a drawable galaxy.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("core_radius", self.core_radius),
            ("base_orbit", self.base_orbit),
            ("orbit_gap", self.orbit_gap),
            ("node_radius", self.node_radius),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GalaxyError::invalid_config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.base_orbit <= self.core_radius {
            return Err(GalaxyError::invalid_config(format!(
                "base_orbit ({}) must be larger than core_radius ({})",
                self.base_orbit, self.core_radius
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Galaxy Config
// =============================================================================

fn default_related_limit() -> usize {
    2
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// How many related nodes to show next to a selection
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
    /// Default CLI output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            related_limit: default_related_limit(),
            format: OutputFormat::default(),
        }
    }
}

impl GalaxyConfig {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GalaxyConfig = serde_json::from_str(json)?;
        config.canvas.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GalaxyError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).context(format!("loading {}", path.display()))
    }

    /// User-level config path, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join("config.json"))
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must load. Otherwise `.galaxy_config.json` in
    /// `working_dir`, then the user config, then defaults; a broken implicit
    /// file is skipped with a warning.
    pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let candidates = std::iter::once(working_dir.join(LOCAL_CONFIG_FILE))
            .chain(Self::user_config_path());

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => warn!("Ignoring config {}: {}", path.display(), e),
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}
