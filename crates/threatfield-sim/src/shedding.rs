//! Passive debris shedding from alive rocks.
//!
//! The shed clock lives on the field itself (`last_shed_time`), and rock
//! choice comes from a per-field ChaCha stream, so two fields never share
//! timing state and a replay with the same seed sheds from the same rocks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use threatfield_core::config::ShedConfig;
use threatfield_core::constants::SHED_SEED_SALT;
use threatfield_core::types::Timestamp;

#[derive(Debug, Clone)]
pub struct DebrisShedder {
    config: ShedConfig,
    last_shed_time: Timestamp,
    rng: ChaCha8Rng,
}

impl DebrisShedder {
    pub fn new(seed: i64, started_at: Timestamp, config: ShedConfig) -> Self {
        Self {
            config,
            last_shed_time: started_at,
            rng: ChaCha8Rng::seed_from_u64(seed as u64 ^ SHED_SEED_SALT),
        }
    }

    pub fn last_shed_time(&self) -> Timestamp {
        self.last_shed_time
    }

    /// Seconds between sheds; unstable fields shed faster.
    pub fn interval(&self, instability: f64) -> f64 {
        let speedup = (1.0 - self.config.min_interval_factor) * instability.clamp(0.0, 1.0);
        self.config.base_interval * (1.0 - speedup)
    }

    /// Rocks that shed between the last shed and `now`, oldest first.
    pub fn shed(&mut self, now: Timestamp, instability: f64, alive: &[usize]) -> Vec<usize> {
        let mut shed = Vec::new();
        if alive.is_empty() || self.config.max_per_frame == 0 {
            self.last_shed_time = self.last_shed_time.max(now);
            return shed;
        }

        let interval = self.interval(instability);
        while now - self.last_shed_time >= interval
            && (shed.len() as u32) < self.config.max_per_frame
        {
            self.last_shed_time += interval;
            shed.push(alive[self.rng.gen_range(0..alive.len())]);
        }

        // After a frozen stretch, resync instead of bursting on every frame.
        if now - self.last_shed_time >= interval {
            self.last_shed_time = now;
        }
        shed
    }
}
