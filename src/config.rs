//! Configuration for the labeling pipeline.

use anyhow::Result;
use serde::Deserialize;

/// Parameters for labeling a series and optionally filtering the result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelConfig {
    /// Minimum move that validates a directional segment
    pub excursion: f64,

    /// Samples without a new extremum before a segment is closed
    pub inactive: usize,

    /// Run the trend-strength filter after labeling
    #[serde(default = "default_filter")]
    pub filter: bool,

    /// Excursion used by the filter; falls back to `excursion`
    #[serde(default)]
    pub filter_excursion: Option<f64>,
}

fn default_filter() -> bool { true }

impl LabelConfig {
    pub fn new(excursion: f64, inactive: usize) -> Self {
        Self {
            excursion,
            inactive,
            filter: default_filter(),
            filter_excursion: None,
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.excursion.is_finite() && self.excursion > 0.0) {
            anyhow::bail!("excursion must be finite and > 0, got {}", self.excursion);
        }

        if self.inactive == 0 {
            anyhow::bail!("inactive must be greater than 0");
        }

        if let Some(e) = self.filter_excursion {
            if !(e.is_finite() && e > 0.0) {
                anyhow::bail!("filter_excursion must be finite and > 0, got {}", e);
            }
        }

        Ok(())
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LabelConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn effective_filter_excursion(&self) -> f64 {
        self.filter_excursion.unwrap_or(self.excursion)
    }
}
