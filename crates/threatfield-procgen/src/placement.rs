//! Rock distribution: tiers, positions, sizes, HP and tumble.
//!
//! One large anchor rock near the centre, a couple of medium rocks, the rest
//! small. Positions are uniform inside a flattened ellipsoid with a minimum
//! pairwise spacing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use threatfield_core::components::RockSpec;
use threatfield_core::constants::*;
use threatfield_core::enums::RockTier;
use threatfield_core::types::{lerp, Vec3};

/// Number of medium rocks for a field of `count` rocks.
pub fn medium_count(count: u32) -> u32 {
    ((count as f64 * MEDIUM_SHARE).round() as u32).clamp(MEDIUM_COUNT_MIN, MEDIUM_COUNT_MAX)
}

/// Ordered tier list: large first, then medium, then small.
pub fn tier_layout(count: u32) -> Vec<RockTier> {
    if count == 0 {
        return Vec::new();
    }
    let medium = medium_count(count).min(count - 1);
    let small = count - 1 - medium;

    let mut tiers = Vec::with_capacity(count as usize);
    tiers.push(RockTier::Large);
    tiers.extend(std::iter::repeat(RockTier::Medium).take(medium as usize));
    tiers.extend(std::iter::repeat(RockTier::Small).take(small as usize));
    tiers
}

/// Generate every rock for a field. Consumes a single ChaCha stream seeded by `seed`.
pub fn generate_rocks(
    count: u32,
    field_radius: f64,
    anchor_size: f64,
    hp_cap: u32,
    seed: i64,
) -> Vec<RockSpec> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    let min_spacing = field_radius * MIN_SPACING_FACTOR;
    let mut positions: Vec<Vec3> = Vec::with_capacity(count as usize);

    tier_layout(count)
        .into_iter()
        .enumerate()
        .map(|(index, tier)| {
            let position = place_rock(&mut rng, tier, field_radius, min_spacing, &positions);
            positions.push(position);

            let size_scale = match tier {
                RockTier::Large => anchor_size * lerp(0.8, 1.0, rng.gen::<f64>()),
                RockTier::Medium => lerp(0.4, 0.6, rng.gen::<f64>()),
                RockTier::Small => lerp(0.15, 0.35, rng.gen::<f64>()),
            };

            let angular_velocity = Vec3::new(
                signed(&mut rng, 0.1, 0.6),
                signed(&mut rng, 0.1, 0.8),
                signed(&mut rng, 0.05, 0.4),
            );

            let max_hp = tier.base_hp().min(hp_cap).clamp(MIN_ROCK_HP, MAX_ROCK_HP);

            RockSpec {
                index,
                tier,
                position,
                size_scale,
                seed: seed.wrapping_add(index as i64),
                angular_velocity,
                max_hp,
                trail_tier: tier.trail_tier(),
            }
        })
        .collect()
}

/// Pick a position that clears `min_spacing` from every placed rock.
/// After `PLACEMENT_ATTEMPTS` misses, keep the candidate with the most clearance.
fn place_rock(
    rng: &mut ChaCha8Rng,
    tier: RockTier,
    field_radius: f64,
    min_spacing: f64,
    placed: &[Vec3],
) -> Vec3 {
    let mut best = Vec3::ZERO;
    let mut best_clearance = f64::NEG_INFINITY;

    for _ in 0..PLACEMENT_ATTEMPTS {
        let mut candidate = sample_ellipsoid(rng, field_radius);
        if tier == RockTier::Large {
            candidate *= LARGE_ROCK_PULL;
        }

        let clearance = placed
            .iter()
            .map(|p| p.distance(candidate))
            .fold(f64::INFINITY, f64::min);

        if clearance >= min_spacing {
            return candidate;
        }
        if clearance > best_clearance {
            best = candidate;
            best_clearance = clearance;
        }
    }

    best
}

/// Uniform sample inside an ellipsoid flattened along y.
fn sample_ellipsoid(rng: &mut ChaCha8Rng, radius: f64) -> Vec3 {
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
    // Cube root keeps the density uniform by volume.
    let r = radius * rng.gen::<f64>().cbrt();

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin() * FIELD_Y_FLATTEN,
        r * phi.cos(),
    )
}

fn signed(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    let magnitude = lerp(min, max, rng.gen::<f64>());
    if rng.gen::<f64>() > 0.5 {
        magnitude
    } else {
        -magnitude
    }
}
