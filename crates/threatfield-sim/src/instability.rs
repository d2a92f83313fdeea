//! Field-wide instability feedback.

use threatfield_core::constants::SYMPATHETIC_GLOW_FACTOR;

/// How close a field is to cascading, in `[0, 1]`.
pub fn instability(destroyed_count: u32, cascade_threshold: u32) -> f64 {
    (destroyed_count as f64 / cascade_threshold.max(1) as f64).min(1.0)
}

/// Emissive boost for surviving rocks.
pub fn sympathetic_glow(instability: f64) -> f64 {
    instability * SYMPATHETIC_GLOW_FACTOR
}
