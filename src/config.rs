//! Application configuration file handling.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! (or no file at all) is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::processor::SimulatedDelays;

/// Longest delay accepted for either simulated operation
pub const MAX_DELAY_MS: u64 = 60_000;

/// Default size limit for resume files (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Tunable application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated resume processing time
    pub upload_delay_ms: u64,
    /// Simulated analysis time
    pub analysis_delay_ms: u64,
    /// Largest resume file that will be read
    pub max_upload_bytes: u64,
    /// Where the results screen saves downloaded reports
    pub report_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_delay_ms: 2000,
            analysis_delay_ms: 3000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            report_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Load and validate `path`, or fall back to defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.upload_delay_ms > MAX_DELAY_MS {
            anyhow::bail!(
                "upload_delay_ms must be at most {} (got {})",
                MAX_DELAY_MS,
                self.upload_delay_ms
            );
        }
        if self.analysis_delay_ms > MAX_DELAY_MS {
            anyhow::bail!(
                "analysis_delay_ms must be at most {} (got {})",
                MAX_DELAY_MS,
                self.analysis_delay_ms
            );
        }
        if self.max_upload_bytes == 0 {
            anyhow::bail!("max_upload_bytes must be greater than zero");
        }
        Ok(())
    }

    /// Delays for the simulated processor
    pub fn delays(&self) -> SimulatedDelays {
        SimulatedDelays {
            upload: Duration::from_millis(self.upload_delay_ms),
            analysis: Duration::from_millis(self.analysis_delay_ms),
        }
    }
}
