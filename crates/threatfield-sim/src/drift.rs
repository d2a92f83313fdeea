//! Drift model: shared field offset easing toward a seeded target.
//!
//! The offset approaches `target * max_drift` asymptotically and never
//! reaches it, so fields keep creeping forward for as long as they live.

use threatfield_core::config::DriftConfig;
use threatfield_core::types::Vec3;
use threatfield_procgen::drift_target;

/// Offset after `elapsed` seconds of enabled drift toward `target`.
pub fn offset_toward(target: Vec3, drift_speed: f64, elapsed: f64, config: &DriftConfig) -> Vec3 {
    let progress = elapsed.max(0.0) * drift_speed * config.progress_rate;
    let eased = config.max_drift * (1.0 - (-config.k * progress).exp());
    target * eased
}

/// Offset for a field seeded with `seed`.
pub fn drift_offset(seed: i64, drift_speed: f64, elapsed: f64, config: &DriftConfig) -> Vec3 {
    offset_toward(
        drift_target(seed, config.convergence_radius),
        drift_speed,
        elapsed,
        config,
    )
}
