//! Drift target placement.
//!
//! Each field converges toward its own point in a disk around the field
//! origin, so neighbouring threats approach from slightly different angles.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use threatfield_core::constants::DRIFT_SEED_PRIME;
use threatfield_core::types::Vec3;

/// Uniform point inside a disk of `convergence_radius` in the XY plane.
pub fn drift_target(seed: i64, convergence_radius: f64) -> Vec3 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_mul(DRIFT_SEED_PRIME) as u64);
    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    let r = convergence_radius * rng.gen::<f64>().sqrt();
    Vec3::new(r * angle.cos(), r * angle.sin(), 0.0)
}
