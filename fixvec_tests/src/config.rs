//! Conformance run configuration.
//!
//! Loads run parameters from JSON strings/files. Missing fields take defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for a seeded conformance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConformanceConfig {
    /// Seed for the sample generator; the same seed replays the same inputs.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Random samples drawn per property.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Bound on generated real inputs (`|f| < max_abs_real`).
    #[serde(default = "default_max_abs_real")]
    pub max_abs_real: f64,
    /// Bound on generated raw components.
    #[serde(default = "default_max_abs_raw")]
    pub max_abs_raw: i32,
    /// Directory the JSON report is written to.
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
}

fn default_seed() -> u64 {
    0x5EED_F1C5
}

fn default_samples() -> usize {
    10_000
}

fn default_max_abs_real() -> f64 {
    2_000_000.0
}

fn default_max_abs_raw() -> i32 {
    100_000_000
}

fn default_report_dir() -> String {
    "test-reports".to_string()
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            samples: default_samples(),
            max_abs_real: default_max_abs_real(),
            max_abs_raw: default_max_abs_raw(),
            report_dir: default_report_dir(),
        }
    }
}

impl ConformanceConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg = Self::from_json_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(path = %path.display(), ?cfg, "Loaded conformance config");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = ConformanceConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, ConformanceConfig::default());
        assert_eq!(cfg.max_abs_real, 2_000_000.0);
    }

    #[test]
    fn fields_override_defaults() {
        let cfg =
            ConformanceConfig::from_json_str(r#"{"seed": 7, "samples": 12, "report_dir": "out"}"#)
                .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.samples, 12);
        assert_eq!(cfg.report_dir, "out");
        assert_eq!(cfg.max_abs_raw, 100_000_000);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(ConformanceConfig::from_json_str(r#"{"samples": "many"}"#).is_err());
    }
}
