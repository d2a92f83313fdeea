//! Simulation constants and tuning parameters.
//!
//! Values marked as defaults seed `FieldTuning`; the rest are fixed by the
//! generator and are not configurable at runtime.

// --- Amount curve ---

/// log10(amount + 1) value that maps to the top of the curve (~$500).
pub const AMOUNT_LOG_CEILING: f64 = 2.7;

// --- Field generation ---

/// Fewest rocks a field can have.
pub const MIN_ROCKS: u32 = 3;

/// Most rocks a field can have.
pub const MAX_ROCKS: u32 = 10;

/// Field radius at the bottom of the amount curve (scene units).
pub const MIN_FIELD_RADIUS: f64 = 2.0;

/// Field radius at the top of the amount curve (scene units).
pub const MAX_FIELD_RADIUS: f64 = 7.0;

/// Anchor (large rock) size multiplier range.
pub const MIN_ANCHOR_SIZE: f64 = 0.8;
pub const MAX_ANCHOR_SIZE: f64 = 1.0;

/// Drift speed range (progress units per second before `DRIFT_PROGRESS_RATE`).
pub const MIN_DRIFT_SPEED: f64 = 0.08;
pub const MAX_DRIFT_SPEED: f64 = 0.2;

/// Smallest cascade threshold any field may have.
pub const MIN_CASCADE_THRESHOLD: u32 = 2;

/// HP bounds for a single rock.
pub const MIN_ROCK_HP: u32 = 1;
pub const MAX_ROCK_HP: u32 = 3;

/// Tier HP before the amount-scaled cap is applied.
pub const LARGE_TIER_HP: u32 = 3;
pub const MEDIUM_TIER_HP: u32 = 2;
pub const SMALL_TIER_HP: u32 = 1;

/// Share of the field that is medium rocks, clamped to `MEDIUM_COUNT_MIN..=MEDIUM_COUNT_MAX`.
pub const MEDIUM_SHARE: f64 = 0.3;
pub const MEDIUM_COUNT_MIN: u32 = 2;
pub const MEDIUM_COUNT_MAX: u32 = 3;

/// Minimum pairwise spacing as a fraction of field radius.
pub const MIN_SPACING_FACTOR: f64 = 0.25;

/// Placement attempts per rock before keeping the roomiest candidate.
pub const PLACEMENT_ATTEMPTS: u32 = 50;

/// Vertical squash applied to the placement ellipsoid.
pub const FIELD_Y_FLATTEN: f64 = 0.5;

/// The large rock sits this fraction of the way out from the centre.
pub const LARGE_ROCK_PULL: f64 = 0.3;

/// Prime multiplier separating the drift stream from the placement stream.
pub const DRIFT_SEED_PRIME: i64 = 7919;

/// Salt separating the shedding stream from the placement stream.
pub const SHED_SEED_SALT: u64 = 0x5eed_deb2_15ab_cdef;

// --- Cascade (defaults) ---

/// Delay before the shockwave leaves the trigger point (seconds).
pub const CASCADE_BASE_DELAY: f64 = 0.15;

/// Time between consecutive detonations (seconds).
pub const CASCADE_HOP_INTERVAL: f64 = 0.25;

/// How long before its detonation a rock flashes (seconds).
pub const CASCADE_FLASH_LEAD: f64 = 0.05;

/// Window after the last detonation before the field is cleared (seconds).
pub const CASCADE_FINAL_BURST_WINDOW: f64 = 0.5;

// --- Growth (defaults) ---

/// Time for a new field to grow to full scale (seconds).
pub const GROWTH_RAMP_SECS: f64 = 6.0;

/// Scale of a field at the moment it spawns.
pub const GROWTH_MIN_SCALE: f64 = 0.2;

// --- Drift (defaults) ---

/// Asymptotic drift distance as a fraction of the drift target.
pub const DRIFT_MAX: f64 = 0.3;

/// Ease-out exponent for drift progress.
pub const DRIFT_K: f64 = 3.0;

/// Scales `drift_speed` into drift progress per second.
pub const DRIFT_PROGRESS_RATE: f64 = 0.05;

/// Radius of the disk drift targets are drawn from (scene units).
pub const DRIFT_CONVERGENCE_RADIUS: f64 = 2.5;

// --- Feedback (defaults) ---

/// Sympathetic glow per unit of instability.
pub const SYMPATHETIC_GLOW_FACTOR: f64 = 0.8;

/// Lifetime of a cascade impact flash (seconds).
pub const IMPACT_FLASH_SECS: f64 = 0.1;

// --- Debris shedding (defaults) ---

/// Shed interval for a calm field (seconds).
pub const SHED_BASE_INTERVAL: f64 = 1.5;

/// Fraction of the base interval left at full instability.
pub const SHED_MIN_INTERVAL_FACTOR: f64 = 0.4;

/// Most shed events a single update may emit.
pub const SHED_MAX_PER_FRAME: u32 = 3;
