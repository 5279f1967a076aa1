//! Configuration loading for the strip-line CLI.
//!
//! Settings come from, in increasing precedence: built-in defaults, an
//! optional YAML file, then environment variables and command-line flags
//! (both resolved by clap into [`Overrides`]).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use strip_lines::{ChartOptions, DisplayWidth, LabelMode, SegmenterConfig};
use tracing::{debug, info};

/// Root configuration loaded from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// `buckets_per_label` and `label_mode` at the top level
    #[serde(flatten)]
    pub segmenter: SegmenterConfig,

    pub chart: ChartOptions,
}

/// Values supplied by flags or environment variables.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub label_mode: Option<LabelMode>,
    pub buckets_per_label: Option<usize>,
    pub display_width: Option<u32>,
    pub screen_width: Option<u32>,
    pub title: Option<String>,
}

impl StripConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        info!(path = ?path, "Loaded strip configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Defaults, or the given file when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(mode) = overrides.label_mode {
            self.segmenter.label_mode = mode;
        }
        if let Some(buckets) = overrides.buckets_per_label {
            self.segmenter.buckets_per_label = buckets;
        }
        if let Some(inner) = overrides.display_width {
            let screen = overrides.screen_width.unwrap_or(self.chart.display_width.screen);
            self.chart.display_width = DisplayWidth::new(inner, screen);
        } else if let Some(screen) = overrides.screen_width {
            self.chart.display_width.screen = screen;
        }
        if let Some(title) = &overrides.title {
            self.chart.title = title.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.segmenter
            .validate()
            .context("Invalid segmenter configuration")?;
        self.chart
            .label_policy
            .validate()
            .context("Invalid label policy")?;
        Ok(())
    }
}
