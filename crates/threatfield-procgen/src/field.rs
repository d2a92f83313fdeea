//! Field parameter generator: amount → `FieldSpec`.
//!
//! Every field-level parameter is read off a single log10 curve of the
//! amount, so cheap threats are small one-hit clusters and expensive ones
//! are wide fields that need sustained fire.

use threatfield_core::components::FieldSpec;
use threatfield_core::constants::*;
use threatfield_core::error::FieldError;
use threatfield_core::types::lerp;

use crate::placement::generate_rocks;

/// Map an amount onto the 0..=1 generation curve.
pub fn amount_curve(amount: f64) -> f64 {
    ((amount + 1.0).log10() / AMOUNT_LOG_CEILING).clamp(0.0, 1.0)
}

/// Half the rocks rounded up, at least `MIN_CASCADE_THRESHOLD`, never more than the rock count.
pub fn cascade_threshold_for(rock_count: u32) -> u32 {
    rock_count
        .div_ceil(2)
        .max(MIN_CASCADE_THRESHOLD)
        .min(rock_count)
}

/// Generate the complete spec for a field.
///
/// Fails with `InvalidAmount` for non-finite or non-positive amounts.
pub fn generate(amount: f64, seed: i64) -> Result<FieldSpec, FieldError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(FieldError::InvalidAmount { amount });
    }

    let t = amount_curve(amount);

    let rock_count = lerp(MIN_ROCKS as f64, MAX_ROCKS as f64, t).round() as u32;
    let field_radius = lerp(MIN_FIELD_RADIUS, MAX_FIELD_RADIUS, t);
    let anchor_size = lerp(MIN_ANCHOR_SIZE, MAX_ANCHOR_SIZE, t);
    let drift_speed = lerp(MIN_DRIFT_SPEED, MAX_DRIFT_SPEED, t);
    let hp_cap = lerp(MIN_ROCK_HP as f64, MAX_ROCK_HP as f64, t).round() as u32;

    let rocks = generate_rocks(rock_count, field_radius, anchor_size, hp_cap, seed);

    tracing::debug!(
        target: "threatfield::procgen",
        amount,
        seed,
        rock_count,
        hp_cap,
        field_radius,
        "field.generated"
    );

    Ok(FieldSpec {
        amount,
        seed,
        rocks,
        cascade_threshold: cascade_threshold_for(rock_count),
        drift_speed,
        field_radius,
        anchor_size,
    })
}
