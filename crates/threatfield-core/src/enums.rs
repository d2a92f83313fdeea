//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Particle budget for a rock's trail. Passed through to the renderer untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrailTier {
    Full,
    Reduced,
    #[default]
    None,
}

/// Size class of a rock within its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RockTier {
    /// The single anchor rock near the field centre.
    Large,
    Medium,
    Small,
}

impl RockTier {
    /// HP before the amount-scaled cap.
    pub fn base_hp(self) -> u32 {
        use crate::constants::*;
        match self {
            RockTier::Large => LARGE_TIER_HP,
            RockTier::Medium => MEDIUM_TIER_HP,
            RockTier::Small => SMALL_TIER_HP,
        }
    }

    pub fn trail_tier(self) -> TrailTier {
        match self {
            RockTier::Large => TrailTier::Full,
            RockTier::Medium => TrailTier::Reduced,
            RockTier::Small => TrailTier::None,
        }
    }
}

/// Outcome of a single hit on a rock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HitResult {
    /// HP went down but the rock survives.
    Damaged { hp_remaining: u32 },
    /// This hit took the rock to zero HP.
    Destroyed,
    /// The rock was already destroyed; nothing changed.
    AlreadyDestroyed,
    /// The hit was dropped (bad index, cleared field, cascade running).
    Ignored,
}

impl HitResult {
    /// Whether the hit changed any state.
    pub fn is_effective(self) -> bool {
        matches!(self, HitResult::Damaged { .. } | HitResult::Destroyed)
    }
}

/// Cascade scheduler lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadePhase {
    /// Threshold not reached yet.
    #[default]
    Idle,
    /// Schedule built, waiting for the first update to stamp the start time.
    Triggered,
    /// Flashing and detonating rocks by distance.
    Running,
    /// `FieldCleared` has been emitted.
    Complete,
}
