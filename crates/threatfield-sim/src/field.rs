//! Field controller: one threat's simulation instance.
//!
//! `Field` owns the generated spec, per-rock state, kinematics clocks, the
//! cascade scheduler and the shed clock. Hosts drive it with `hit` (input)
//! and `update` (once per frame) and render from the returned `FrameOutput`.
//! No timers, threads or callbacks: dropping the value is the whole teardown.

use threatfield_core::components::{FieldSpec, RockState};
use threatfield_core::config::FieldTuning;
use threatfield_core::enums::{CascadePhase, HitResult};
use threatfield_core::error::FieldError;
use threatfield_core::events::FieldEvent;
use threatfield_core::state::{FrameOutput, RockFrame};
use threatfield_core::types::{Timestamp, Vec3};
use threatfield_procgen::{drift_target, generate};

use crate::cascade::{CascadeSchedule, CascadeScheduler};
use crate::drift::offset_toward;
use crate::growth::growth_factor;
use crate::instability::{instability, sympathetic_glow};
use crate::lifecycle::{detonate_rock, hit_rock};
use crate::shedding::DebrisShedder;

#[derive(Debug, Clone)]
pub struct Field {
    spec: FieldSpec,
    rocks: Vec<RockState>,
    tuning: FieldTuning,
    created_at: Timestamp,
    /// Last finite clock reading passed to `update`.
    last_now: Timestamp,

    // --- Drift ---
    drift_target: Vec3,
    drift_enabled: bool,
    /// Accumulated `dt` while drift was enabled.
    drift_elapsed: f64,

    // --- Cascade ---
    cascade: CascadeScheduler,
    /// Cascade-elapsed time at which each rock's impact flash ends.
    flash_expiry: Vec<Option<f64>>,
    cleared: bool,

    shedder: DebrisShedder,
}

impl Field {
    /// Spawn a field with the default tuning.
    pub fn spawn(amount: f64, seed: i64, created_at: Timestamp) -> Result<Self, FieldError> {
        Self::spawn_with_tuning(amount, seed, created_at, FieldTuning::default())
    }

    pub fn spawn_with_tuning(
        amount: f64,
        seed: i64,
        created_at: Timestamp,
        tuning: FieldTuning,
    ) -> Result<Self, FieldError> {
        let spec = generate(amount, seed)?;
        tracing::info!(
            target: "threatfield::field",
            amount,
            seed,
            rock_count = spec.rock_count(),
            cascade_threshold = spec.cascade_threshold,
            "field.spawned"
        );
        Ok(Self::from_spec(spec, created_at, tuning))
    }

    /// Build a field around an existing spec.
    ///
    /// A threshold above the rock count is clamped so the field can always cascade.
    pub fn from_spec(mut spec: FieldSpec, created_at: Timestamp, tuning: FieldTuning) -> Self {
        let rock_count = spec.rocks.len() as u32;
        if spec.cascade_threshold > rock_count {
            tracing::warn!(
                target: "threatfield::field",
                cascade_threshold = spec.cascade_threshold,
                rock_count,
                "field.threshold_clamped"
            );
            spec.cascade_threshold = rock_count;
        }
        let rocks = spec.rocks.iter().map(|r| RockState::new(r.max_hp)).collect();
        let flash_expiry = vec![None; spec.rocks.len()];
        Self {
            drift_target: drift_target(spec.seed, tuning.drift.convergence_radius),
            drift_enabled: true,
            drift_elapsed: 0.0,
            cascade: CascadeScheduler::new(tuning.cascade),
            flash_expiry,
            cleared: false,
            shedder: DebrisShedder::new(spec.seed, created_at, tuning.shed),
            rocks,
            spec,
            tuning,
            created_at,
            last_now: created_at,
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn rocks(&self) -> &[RockState] {
        &self.rocks
    }

    pub fn rock(&self, index: usize) -> Option<&RockState> {
        self.rocks.get(index)
    }

    pub fn tuning(&self) -> &FieldTuning {
        &self.tuning
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn destroyed_count(&self) -> u32 {
        self.rocks.iter().filter(|r| r.destroyed).count() as u32
    }

    pub fn alive_indices(&self) -> Vec<usize> {
        self.rocks
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn cascade_phase(&self) -> CascadePhase {
        self.cascade.phase()
    }

    pub fn cascade_schedule(&self) -> Option<&CascadeSchedule> {
        self.cascade.schedule()
    }

    pub fn instability(&self) -> f64 {
        instability(self.destroyed_count(), self.spec.cascade_threshold)
    }

    pub fn drift_enabled(&self) -> bool {
        self.drift_enabled
    }

    /// Pause or resume drift. The offset holds where it is while paused.
    pub fn set_drift_enabled(&mut self, enabled: bool) {
        self.drift_enabled = enabled;
    }

    /// Current shared drift offset.
    pub fn drift_offset(&self) -> Vec3 {
        offset_toward(
            self.drift_target,
            self.spec.drift_speed,
            self.drift_elapsed,
            &self.tuning.drift,
        )
    }

    /// Register one hit on a rock.
    ///
    /// Out-of-range indices, cleared fields and hits during a running cascade
    /// are logged and return `Ignored`; this never panics.
    pub fn hit(&mut self, rock_index: usize) -> HitResult {
        if self.cleared {
            tracing::debug!(
                target: "threatfield::field",
                rock_index,
                error = %FieldError::FieldCleared,
                "hit.ignored"
            );
            return HitResult::Ignored;
        }

        let Some(rock) = self.rocks.get_mut(rock_index) else {
            tracing::warn!(
                target: "threatfield::field",
                error = %FieldError::InvalidRockIndex {
                    index: rock_index,
                    rock_count: self.spec.rocks.len(),
                },
                "hit.ignored"
            );
            return HitResult::Ignored;
        };

        if self.cascade.is_triggered() {
            tracing::debug!(
                target: "threatfield::field",
                rock_index,
                "hit.ignored cascade_running"
            );
            return HitResult::Ignored;
        }

        let result = hit_rock(rock);
        match result {
            HitResult::Destroyed => self.check_cascade_threshold(rock_index),
            HitResult::AlreadyDestroyed => {
                tracing::debug!(
                    target: "threatfield::field",
                    rock_index,
                    "hit.ignored already_destroyed"
                );
            }
            HitResult::Damaged { .. } | HitResult::Ignored => {}
        }
        result
    }

    fn check_cascade_threshold(&mut self, trigger_index: usize) {
        let destroyed = self.destroyed_count();
        if destroyed < self.spec.cascade_threshold {
            return;
        }

        let trigger_point = self.spec.rocks[trigger_index].position;
        let alive: Vec<(usize, Vec3)> = self
            .spec
            .rocks
            .iter()
            .zip(&self.rocks)
            .filter(|(_, state)| state.is_alive())
            .map(|(spec, _)| (spec.index, spec.position))
            .collect();
        let scheduled = alive.len();

        if self.cascade.trigger(trigger_index, trigger_point, alive) {
            tracing::info!(
                target: "threatfield::cascade",
                trigger_index,
                destroyed,
                scheduled,
                "cascade.triggered"
            );
        }
    }

    /// Advance the field to `now`. `dt` is the host's frame delta and only
    /// feeds the drift clock; everything else is derived from `now`.
    pub fn update(&mut self, now: Timestamp, dt: f64) -> FrameOutput {
        let now = if now.is_finite() {
            self.last_now = now;
            now
        } else {
            tracing::warn!(target: "threatfield::field", now, "update.bad_now");
            self.last_now
        };

        if self.cleared {
            return FrameOutput {
                now,
                growth: growth_factor(self.created_at, now, &self.tuning.growth),
                drift_offset: self.drift_offset(),
                destroyed_count: self.destroyed_count(),
                cascade_phase: self.cascade.phase(),
                cleared: true,
                ..Default::default()
            };
        }

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!(target: "threatfield::field", dt, "update.bad_dt");
            0.0
        };
        if self.drift_enabled {
            self.drift_elapsed += dt;
        }

        let mut events = Vec::new();

        if self.cascade.phase() == CascadePhase::Idle {
            let alive = self.alive_indices();
            let instability = self.instability();
            for rock_index in self.shedder.shed(now, instability, &alive) {
                events.push(FieldEvent::DebrisShed { rock_index });
            }
        }

        for step in self.cascade.advance(now) {
            match step.event {
                FieldEvent::Flash { rock_index } => {
                    if let Some(rock) = self.rocks.get_mut(rock_index) {
                        rock.impact_flash = true;
                        self.flash_expiry[rock_index] =
                            Some(step.at + self.tuning.impact_flash_secs);
                    }
                }
                FieldEvent::Detonate { rock_index } => {
                    if let Some(rock) = self.rocks.get_mut(rock_index) {
                        detonate_rock(rock);
                    }
                }
                FieldEvent::FieldCleared => {
                    self.cleared = true;
                    tracing::info!(
                        target: "threatfield::cascade",
                        seed = self.spec.seed,
                        "field.cleared"
                    );
                }
                FieldEvent::CascadeTriggered { .. } | FieldEvent::DebrisShed { .. } => {}
            }
            events.push(step.event);
        }

        if let Some(elapsed) = self.cascade.elapsed(now) {
            for (rock, expiry) in self.rocks.iter_mut().zip(self.flash_expiry.iter_mut()) {
                if expiry.is_some_and(|end| elapsed >= end) {
                    rock.impact_flash = false;
                    *expiry = None;
                }
            }
        }

        let growth = growth_factor(self.created_at, now, &self.tuning.growth);
        let drift_offset = self.drift_offset();
        let instability = self.instability();
        let glow = sympathetic_glow(instability);

        let rocks = self
            .spec
            .rocks
            .iter()
            .zip(&self.rocks)
            .filter(|(_, state)| state.is_alive())
            .map(|(spec, state)| RockFrame {
                rock_index: spec.index,
                position: drift_offset + spec.position * growth,
                scale: growth,
                size_scale: spec.size_scale,
                hp: state.hp,
                max_hp: state.max_hp,
                instability,
                sympathetic_glow: glow,
                impact_flash: state.impact_flash,
                trail_tier: spec.trail_tier,
            })
            .collect();

        tracing::trace!(
            target: "threatfield::field",
            now,
            events = events.len(),
            phase = ?self.cascade.phase(),
            "field.updated"
        );

        FrameOutput {
            now,
            growth,
            drift_offset,
            instability,
            sympathetic_glow: glow,
            destroyed_count: self.destroyed_count(),
            cascade_phase: self.cascade.phase(),
            cleared: self.cleared,
            rocks,
            events,
        }
    }
}
