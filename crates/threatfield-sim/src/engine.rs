//! Threat engine: owns every live field for a dashboard.
//!
//! `ThreatEngine` keeps one hecs entity per threat (`ThreatId` + `Field`),
//! applies queued host commands at the start of each tick, runs the update
//! and cleanup systems and returns a `DashboardSnapshot`. Headless and
//! deterministic: the same commands and clock readings give the same
//! snapshots.

use std::collections::VecDeque;

use hecs::{Entity, World};

use threatfield_core::commands::FieldCommand;
use threatfield_core::config::FieldTuning;
use threatfield_core::enums::HitResult;
use threatfield_core::error::FieldError;
use threatfield_core::state::DashboardSnapshot;
use threatfield_core::types::{ThreatId, Timestamp};

use crate::field::Field;
use crate::systems;

pub struct ThreatEngine {
    world: World,
    tuning: FieldTuning,
    now: Timestamp,
    command_queue: VecDeque<FieldCommand>,
    despawn_buffer: Vec<Entity>,
}

impl Default for ThreatEngine {
    fn default() -> Self {
        Self::new(FieldTuning::default())
    }
}

impl ThreatEngine {
    pub fn new(tuning: FieldTuning) -> Self {
        Self {
            world: World::new(),
            tuning,
            now: 0.0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a command for the next tick boundary.
    pub fn queue_command(&mut self, command: FieldCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = FieldCommand>) {
        self.command_queue.extend(commands);
    }

    /// Clock reading of the last tick.
    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn tuning(&self) -> &FieldTuning {
        &self.tuning
    }

    pub fn field_count(&self) -> usize {
        self.world.query::<&Field>().iter().count()
    }

    pub fn contains(&self, threat_id: &ThreatId) -> bool {
        self.find(threat_id).is_some()
    }

    /// Spawn a field immediately with growth starting at `now`.
    pub fn spawn_field(
        &mut self,
        threat_id: ThreatId,
        amount: f64,
        seed: i64,
        now: Timestamp,
    ) -> Result<(), FieldError> {
        if self.contains(&threat_id) {
            tracing::warn!(
                target: "threatfield::engine",
                threat = %threat_id,
                "engine.duplicate_threat"
            );
            return Err(FieldError::DuplicateThreat(threat_id));
        }
        let field = Field::spawn_with_tuning(amount, seed, now, self.tuning)?;
        tracing::debug!(target: "threatfield::engine", threat = %threat_id, "engine.spawned");
        self.world.spawn((threat_id, field));
        Ok(())
    }

    /// Apply a hit immediately.
    pub fn hit(
        &mut self,
        threat_id: &ThreatId,
        rock_index: usize,
    ) -> Result<HitResult, FieldError> {
        let entity = self
            .find(threat_id)
            .ok_or_else(|| FieldError::UnknownThreat(threat_id.clone()))?;
        let mut field = self
            .world
            .get::<&mut Field>(entity)
            .map_err(|_| FieldError::UnknownThreat(threat_id.clone()))?;
        Ok(field.hit(rock_index))
    }

    pub fn set_drift_enabled(
        &mut self,
        threat_id: &ThreatId,
        enabled: bool,
    ) -> Result<(), FieldError> {
        let entity = self
            .find(threat_id)
            .ok_or_else(|| FieldError::UnknownThreat(threat_id.clone()))?;
        let mut field = self
            .world
            .get::<&mut Field>(entity)
            .map_err(|_| FieldError::UnknownThreat(threat_id.clone()))?;
        field.set_drift_enabled(enabled);
        Ok(())
    }

    /// Drop a field without running its cascade. Returns whether it existed.
    pub fn remove(&mut self, threat_id: &ThreatId) -> bool {
        match self.find(threat_id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    /// Read a field without holding a borrow on the world.
    pub fn with_field<R>(&self, threat_id: &ThreatId, f: impl FnOnce(&Field) -> R) -> Option<R> {
        let entity = self.find(threat_id)?;
        let field = self.world.get::<&Field>(entity).ok()?;
        Some(f(&*field))
    }

    /// Apply queued commands, advance every field to `now` and remove the
    /// ones that cleared.
    pub fn tick(&mut self, now: Timestamp, dt: f64) -> DashboardSnapshot {
        self.now = now;
        self.process_commands();

        let fields = systems::update::run(&mut self.world, now, dt);
        let cleared = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        for threat_id in &cleared {
            tracing::info!(
                target: "threatfield::engine",
                threat = %threat_id,
                "engine.field_cleared"
            );
        }

        DashboardSnapshot {
            now,
            fields,
            cleared,
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Command failures are logged and dropped; the host keeps ticking.
    fn handle_command(&mut self, command: FieldCommand) {
        let result = match command {
            FieldCommand::Spawn {
                threat_id,
                amount,
                seed,
            } => self.spawn_field(threat_id, amount, seed, self.now),
            FieldCommand::Hit {
                threat_id,
                rock_index,
            } => self.hit(&threat_id, rock_index).map(|_| ()),
            FieldCommand::SetDrift { threat_id, enabled } => {
                self.set_drift_enabled(&threat_id, enabled)
            }
            FieldCommand::Remove { threat_id } => {
                if self.remove(&threat_id) {
                    Ok(())
                } else {
                    Err(FieldError::UnknownThreat(threat_id))
                }
            }
        };

        if let Err(error) = result {
            tracing::warn!(target: "threatfield::engine", %error, "engine.command_failed");
        }
    }

    fn find(&self, threat_id: &ThreatId) -> Option<Entity> {
        self.world
            .query::<&ThreatId>()
            .iter()
            .find(|(_, id)| *id == threat_id)
            .map(|(entity, _)| entity)
    }
}
