//! Engine configuration.
//!
//! Loaded from the JSON file named by `RELIEF_WELL_CONFIG` when set,
//! otherwise built-in defaults. Missing fields take their default values.

use std::env;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::builtin::INTERCEPT_MD_M;
use crate::projection::orbit::OrbitViewport;
use crate::projection::plan::PlanViewport;
use crate::projection::section::SectionViewport;
use crate::separation::analyzer::SeparationBands;
use crate::survey::report::QualityLimits;

pub const CONFIG_ENV: &str = "RELIEF_WELL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub separation: SeparationBands,
    pub survey: QualityLimits,
    pub plan: PlanViewport,
    pub section: SectionViewport,
    pub orbit: OrbitViewport,
    /// Measured depth of the planned intercept on the reference well (m).
    pub intercept_md_m: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            separation: SeparationBands::default(),
            survey: QualityLimits::default(),
            plan: PlanViewport::default(),
            section: SectionViewport::default(),
            orbit: OrbitViewport::default(),
            intercept_md_m: INTERCEPT_MD_M,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// `RELIEF_WELL_CONFIG` if set, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => {
                info!("loading engine config from {}", Path::new(&path).display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.separation.is_valid() {
            return Err(ConfigError::Invalid {
                field: "separation",
                reason: format!(
                    "need 0 <= too_close_below_m ({}) <= good_from_m ({})",
                    self.separation.too_close_below_m, self.separation.good_from_m
                ),
            });
        }
        if !(self.survey.max_average_spacing_m > 0.0) {
            return Err(ConfigError::Invalid {
                field: "survey.max_average_spacing_m",
                reason: format!("must be positive, got {}", self.survey.max_average_spacing_m),
            });
        }
        for (field, w, h) in [
            ("plan", self.plan.width, self.plan.height),
            ("section", self.section.width, self.section.height),
            ("orbit", self.orbit.width, self.orbit.height),
        ] {
            if !(w > 0.0 && h > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("viewport must be positive, got {w}x{h}"),
                });
            }
        }
        for (field, w, h, padding) in [
            ("plan.padding_px", self.plan.width, self.plan.height, self.plan.padding_px),
            ("section.padding_px", self.section.width, self.section.height, self.section.padding_px),
        ] {
            if !(padding >= 0.0 && 2.0 * padding < w.min(h)) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("padding {padding} must be under half of the {w}x{h} viewport"),
                });
            }
        }
        if !(self.intercept_md_m.is_finite() && self.intercept_md_m >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "intercept_md_m",
                reason: format!("must be a finite, non-negative MD, got {}", self.intercept_md_m),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.separation.too_close_below_m, 300.0);
        assert_eq!(config.plan.scale_bar_m, 200.0);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = EngineConfig::from_json_str(
            r#"{ "separation": { "too_close_below_m": 250.0 }, "survey": { "min_total_depth_m": 1800.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.separation.too_close_below_m, 250.0);
        assert_eq!(config.separation.good_from_m, 600.0);
        assert_eq!(config.survey.min_total_depth_m, Some(1800.0));
        assert_eq!(config.survey.min_stations, 5);
        assert_eq!(config.orbit, OrbitViewport::default());
    }

    #[test]
    fn inverted_bands_are_rejected() {
        let err = EngineConfig::from_json_str(
            r#"{ "separation": { "too_close_below_m": 800.0, "good_from_m": 600.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "separation", .. }));
    }

    #[test]
    fn padding_of_half_the_viewport_is_rejected() {
        let err = EngineConfig::from_json_str(
            r#"{ "plan": { "width": 400.0, "height": 300.0, "padding_px": 150.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "plan.padding_px", .. }));

        let err = EngineConfig::from_json_str(r#"{ "section": { "padding_px": -5.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "section.padding_px", .. }));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn reads_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{ "intercept_md_m": 1500.0 }"#).unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.intercept_md_m, 1500.0);
    }
}
