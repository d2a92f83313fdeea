//! Field and rock data.
//!
//! Specs are immutable once generated; `RockState` is the only mutable
//! per-rock data. Behaviour lives in the sim crate, not here.

use serde::{Deserialize, Serialize};

use crate::enums::{RockTier, TrailTier};
use crate::types::Vec3;

/// Immutable description of one rock, generated once per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockSpec {
    pub index: usize,
    pub tier: RockTier,
    /// Field-local position before growth and drift.
    pub position: Vec3,
    /// Size relative to the parent threat's base size.
    pub size_scale: f64,
    /// Seed for the renderer's surface generation.
    pub seed: i64,
    /// Tumble rate per axis (rad/s).
    pub angular_velocity: Vec3,
    pub max_hp: u32,
    pub trail_tier: TrailTier,
}

/// Mutable per-rock state.
///
/// Once `destroyed` is set neither `hp` nor `destroyed` changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockState {
    pub hp: u32,
    pub max_hp: u32,
    pub destroyed: bool,
    /// Collapse animation requested.
    pub collapsed: bool,
    /// White-hot flash from an approaching cascade shockwave.
    pub impact_flash: bool,
}

impl RockState {
    pub fn new(max_hp: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            destroyed: false,
            collapsed: false,
            impact_flash: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }
}

/// Complete generated description of a field. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub amount: f64,
    pub seed: i64,
    pub rocks: Vec<RockSpec>,
    /// Destroyed rocks needed to set off the cascade. Always in `2..=rocks.len()`
    /// (or `rocks.len()` when a field has fewer than two rocks).
    pub cascade_threshold: u32,
    pub drift_speed: f64,
    pub field_radius: f64,
    /// Size multiplier for the large rock.
    pub anchor_size: f64,
}

impl FieldSpec {
    pub fn rock_count(&self) -> usize {
        self.rocks.len()
    }

    /// Sum of max HP across every rock.
    pub fn total_hp(&self) -> u32 {
        self.rocks.iter().map(|r| r.max_hp).sum()
    }
}
