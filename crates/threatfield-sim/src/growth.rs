//! Growth model: a new field scales in from `min_scale` to full size.

use threatfield_core::config::GrowthConfig;
use threatfield_core::types::Timestamp;

/// Growth factor in `[min_scale, 1.0]` for a field created at `created_at`.
///
/// Non-decreasing in `now`, exactly 1.0 once `ramp_secs` have passed.
/// A `created_at` in the future reads as zero elapsed time.
pub fn growth_factor(created_at: Timestamp, now: Timestamp, config: &GrowthConfig) -> f64 {
    let elapsed = (now - created_at).max(0.0);
    if elapsed >= config.ramp_secs {
        return 1.0;
    }
    let u = (elapsed / config.ramp_secs).clamp(0.0, 1.0);
    // Ease-out cubic.
    let eased = 1.0 - (1.0 - u).powi(3);
    (config.min_scale + (1.0 - config.min_scale) * eased).min(1.0)
}
