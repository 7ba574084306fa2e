//! Settings file and command line overrides
//!
//! Resolution order: built-in defaults, then the settings file (explicit
//! `--config` path, else `wordsphere.toml` in the user config directory if
//! present), then command line flags. The merged cloud config is validated
//! once, when the cloud is built.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use wordsphere::renderer::terminal::CellMetrics;
use wordsphere::{CloudConfig, Color, RotationStep, WordCloud};

const SETTINGS_FILE: &str = "wordsphere.toml";

/// Terminal host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSettings {
    /// Milliseconds between frames
    pub tick_ms: u64,
    pub background: Color,
    #[serde(flatten)]
    pub cells: CellMetrics,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            background: Color::Rgb(5, 7, 12),
            cells: CellMetrics::default(),
        }
    }
}

impl TerminalSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Everything the CLI reads from its settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Words shown when none are given on the command line
    pub words: Vec<String>,
    pub cloud: CloudConfig,
    pub animation: RotationStep,
    pub terminal: TerminalSettings,
}

impl Default for Settings {
    fn default() -> Self {
        // Light text reads better on a dark terminal than the black default
        Self {
            words: Vec::new(),
            cloud: CloudConfig::default().with_color(Color::White),
            animation: RotationStep::default(),
            terminal: TerminalSettings::default(),
        }
    }
}

impl Settings {
    /// Default settings file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordsphere").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from `explicit`, or the default location when it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("no settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a settings file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Apply command line overrides on top of the file values
    pub fn apply(&mut self, overrides: &CloudOverrides) {
        if let Some(radius) = overrides.radius {
            self.cloud.radius = radius;
        }
        if let Some(size) = overrides.max_text_size {
            self.cloud.max_text_size = size;
        }
        if let Some(min_factor) = overrides.min_factor {
            self.cloud.min_factor = min_factor;
        }
        if let Some(per_ring) = overrides.per_ring {
            self.cloud.labels_per_ring = per_ring;
        }
        if let Some(color) = overrides.color {
            self.cloud.style.color = color;
        }
        if let Some(step) = overrides.step {
            self.animation.longitude = step;
        }
        if let Some(tilt) = overrides.tilt {
            self.animation.latitude = tilt;
        }
    }

    /// Command line words win, then the file's list, then the demo list
    pub fn resolve_words(&self, cli_words: &[String]) -> Vec<String> {
        if !cli_words.is_empty() {
            cli_words.to_vec()
        } else if !self.words.is_empty() {
            self.words.clone()
        } else {
            demo_words()
        }
    }

    /// Build a validated cloud holding `words`
    pub fn build_cloud(&self, words: Vec<String>) -> Result<WordCloud> {
        self.animation
            .validate()
            .context("invalid animation settings")?;
        let cloud = WordCloud::new(self.cloud.clone())
            .context("invalid cloud configuration")?
            .with_rotation(self.animation)
            .with_words(words);
        Ok(cloud)
    }
}

/// The numbered list shown when no words are configured
pub fn demo_words() -> Vec<String> {
    (0..50).map(|i| i.to_string()).collect()
}

/// Flags that override the settings file
#[derive(Debug, Clone, Default, Args)]
pub struct CloudOverrides {
    /// Sphere radius in surface units
    #[arg(long, global = true)]
    pub radius: Option<f64>,

    /// Text size of labels facing the viewer
    #[arg(long, global = true)]
    pub max_text_size: Option<f64>,

    /// Smallest size/opacity factor, in (0, 1]
    #[arg(long, global = true)]
    pub min_factor: Option<f64>,

    /// Labels per latitude ring
    #[arg(long, global = true)]
    pub per_ring: Option<u32>,

    /// Text color: a name such as "white" or "#rrggbb"
    #[arg(long, global = true)]
    pub color: Option<Color>,

    /// Longitude degrees advanced per tick
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub step: Option<f64>,

    /// Latitude degrees advanced per tick
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub tilt: Option<f64>,
}
