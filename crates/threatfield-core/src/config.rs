//! Runtime tuning for fields: cascade timing, growth, drift, feedback.
//!
//! Defaults come from `constants`. A builtin JSON copy ships with the crate,
//! and hosts may point `THREATFIELD_CONFIG_PATH` at an override file.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

pub const BUILTIN_FIELD_TUNING: &str = include_str!("data/field_tuning.json");

/// Environment variable naming an override tuning file.
pub const CONFIG_PATH_ENV: &str = "THREATFIELD_CONFIG_PATH";

/// Cascade timing (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    pub base_delay: f64,
    pub hop_interval: f64,
    pub flash_lead: f64,
    pub final_burst_window: f64,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            base_delay: CASCADE_BASE_DELAY,
            hop_interval: CASCADE_HOP_INTERVAL,
            flash_lead: CASCADE_FLASH_LEAD,
            final_burst_window: CASCADE_FINAL_BURST_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    pub ramp_secs: f64,
    pub min_scale: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            ramp_secs: GROWTH_RAMP_SECS,
            min_scale: GROWTH_MIN_SCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    pub max_drift: f64,
    pub k: f64,
    pub progress_rate: f64,
    pub convergence_radius: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            max_drift: DRIFT_MAX,
            k: DRIFT_K,
            progress_rate: DRIFT_PROGRESS_RATE,
            convergence_radius: DRIFT_CONVERGENCE_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShedConfig {
    pub base_interval: f64,
    pub min_interval_factor: f64,
    pub max_per_frame: u32,
}

impl Default for ShedConfig {
    fn default() -> Self {
        Self {
            base_interval: SHED_BASE_INTERVAL,
            min_interval_factor: SHED_MIN_INTERVAL_FACTOR,
            max_per_frame: SHED_MAX_PER_FRAME,
        }
    }
}

/// Every runtime knob a field reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    pub cascade: CascadeConfig,
    pub growth: GrowthConfig,
    pub drift: DriftConfig,
    pub shed: ShedConfig,
    pub impact_flash_secs: f64,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            cascade: CascadeConfig::default(),
            growth: GrowthConfig::default(),
            drift: DriftConfig::default(),
            shed: ShedConfig::default(),
            impact_flash_secs: IMPACT_FLASH_SECS,
        }
    }
}

#[derive(Debug, Error)]
pub enum FieldConfigError {
    #[error("failed to parse field tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read field tuning from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid field tuning: {0}")]
    Invalid(String),
}

impl FieldTuning {
    /// Tuning parsed from the JSON bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_FIELD_TUNING).unwrap_or_default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, FieldConfigError> {
        let tuning: FieldTuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn from_file(path: &Path) -> Result<Self, FieldConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| FieldConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Reject values that would break scheduling or kinematics.
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        let c = &self.cascade;
        for (name, value) in [
            ("cascade.base_delay", c.base_delay),
            ("cascade.flash_lead", c.flash_lead),
            ("cascade.final_burst_window", c.final_burst_window),
            ("drift.max_drift", self.drift.max_drift),
            ("drift.k", self.drift.k),
            ("drift.progress_rate", self.drift.progress_rate),
            ("drift.convergence_radius", self.drift.convergence_radius),
            ("impact_flash_secs", self.impact_flash_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FieldConfigError::Invalid(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if !c.hop_interval.is_finite() || c.hop_interval <= 0.0 {
            return Err(FieldConfigError::Invalid(format!(
                "cascade.hop_interval must be > 0, got {}",
                c.hop_interval
            )));
        }
        if !self.growth.ramp_secs.is_finite() || self.growth.ramp_secs <= 0.0 {
            return Err(FieldConfigError::Invalid(format!(
                "growth.ramp_secs must be > 0, got {}",
                self.growth.ramp_secs
            )));
        }
        if !(self.growth.min_scale > 0.0 && self.growth.min_scale <= 1.0) {
            return Err(FieldConfigError::Invalid(format!(
                "growth.min_scale must be in (0, 1], got {}",
                self.growth.min_scale
            )));
        }
        let s = &self.shed;
        if !s.base_interval.is_finite() || s.base_interval <= 0.0 {
            return Err(FieldConfigError::Invalid(format!(
                "shed.base_interval must be > 0, got {}",
                s.base_interval
            )));
        }
        if !(s.min_interval_factor > 0.0 && s.min_interval_factor <= 1.0) {
            return Err(FieldConfigError::Invalid(format!(
                "shed.min_interval_factor must be in (0, 1], got {}",
                s.min_interval_factor
            )));
        }
        Ok(())
    }
}

/// Load tuning from `THREATFIELD_CONFIG_PATH`, falling back to the builtin copy.
pub fn load_tuning_from_env() -> FieldTuning {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        match FieldTuning::from_file(&path) {
            Ok(tuning) => {
                tracing::info!(
                    target: "threatfield::config",
                    path = %path.display(),
                    "field_tuning.loaded=file"
                );
                return tuning;
            }
            Err(err) => {
                tracing::warn!(
                    target: "threatfield::config",
                    path = %path.display(),
                    error = %err,
                    "field_tuning.load_failed"
                );
            }
        }
    }

    tracing::info!(target: "threatfield::config", "field_tuning.loaded=builtin");
    FieldTuning::builtin()
}
