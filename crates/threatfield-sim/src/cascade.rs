//! Cascade scheduler: distance-ordered chain detonation.
//!
//! `Idle → Triggered → Running → Complete`. The schedule is built once, when
//! the destroyed count first reaches the threshold. The first `advance` after
//! that stamps the start time; from then on every decision compares elapsed
//! time since the start against the schedule, so a host running at 15 fps,
//! 60 fps, or pausing for seconds sees the same events in the same order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use threatfield_core::config::CascadeConfig;
use threatfield_core::enums::CascadePhase;
use threatfield_core::events::FieldEvent;
use threatfield_core::types::{Timestamp, Vec3};

/// One rock's slot in the cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeEntry {
    pub rock_index: usize,
    pub distance_from_trigger: f64,
    /// Detonation time, seconds after the cascade start.
    pub delay: f64,
    /// Flash time, seconds after the cascade start.
    pub flash_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeSchedule {
    /// Sorted by distance, ties by rock index.
    pub entries: Vec<CascadeEntry>,
    pub trigger_index: usize,
    pub trigger_point: Vec3,
    /// Set by the first `advance` after the trigger.
    pub start_time: Option<Timestamp>,
    pub total_duration: f64,
}

impl CascadeSchedule {
    /// Build a schedule from the alive rocks at trigger time.
    pub fn build(
        trigger_index: usize,
        trigger_point: Vec3,
        alive: impl IntoIterator<Item = (usize, Vec3)>,
        config: &CascadeConfig,
    ) -> Self {
        let mut entries: Vec<CascadeEntry> = alive
            .into_iter()
            .map(|(rock_index, position)| CascadeEntry {
                rock_index,
                distance_from_trigger: trigger_point.distance(position),
                delay: 0.0,
                flash_time: 0.0,
            })
            .collect();

        entries.sort_by(|a, b| {
            a.distance_from_trigger
                .total_cmp(&b.distance_from_trigger)
                .then(a.rock_index.cmp(&b.rock_index))
        });

        for (rank, entry) in entries.iter_mut().enumerate() {
            entry.delay = config.base_delay + config.hop_interval * (rank + 1) as f64;
            entry.flash_time = (entry.delay - config.flash_lead).max(0.0);
        }

        let total_duration = entries
            .last()
            .map_or(0.0, |last| last.delay)
            + config.final_burst_window;

        Self {
            entries,
            trigger_index,
            trigger_point,
            start_time: None,
            total_duration,
        }
    }

    pub fn entry_for(&self, rock_index: usize) -> Option<&CascadeEntry> {
        self.entries.iter().find(|e| e.rock_index == rock_index)
    }
}

/// A cascade event together with the schedule time it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeStep {
    pub event: FieldEvent,
    /// Seconds after the cascade start at which the event was due.
    pub at: f64,
}

#[derive(Debug, Clone)]
pub struct CascadeScheduler {
    config: CascadeConfig,
    phase: CascadePhase,
    schedule: Option<CascadeSchedule>,
    start_time: Option<Timestamp>,
    flashed: HashSet<usize>,
    detonated: HashSet<usize>,
    completed: bool,
}

impl CascadeScheduler {
    pub fn new(config: CascadeConfig) -> Self {
        Self {
            config,
            phase: CascadePhase::Idle,
            schedule: None,
            start_time: None,
            flashed: HashSet::new(),
            detonated: HashSet::new(),
            completed: false,
        }
    }

    pub fn phase(&self) -> CascadePhase {
        self.phase
    }

    /// True from the trigger onward.
    pub fn is_triggered(&self) -> bool {
        self.phase != CascadePhase::Idle
    }

    /// The live schedule. `None` before the trigger and after completion.
    pub fn schedule(&self) -> Option<&CascadeSchedule> {
        self.schedule.as_ref()
    }

    /// Seconds since the cascade started, once it has.
    pub fn elapsed(&self, now: Timestamp) -> Option<f64> {
        self.start_time.map(|start| (now - start).max(0.0))
    }

    /// Build the schedule. Returns false (and changes nothing) if a cascade
    /// was already triggered.
    pub fn trigger(
        &mut self,
        trigger_index: usize,
        trigger_point: Vec3,
        alive: impl IntoIterator<Item = (usize, Vec3)>,
    ) -> bool {
        if self.is_triggered() {
            return false;
        }
        self.schedule = Some(CascadeSchedule::build(
            trigger_index,
            trigger_point,
            alive,
            &self.config,
        ));
        self.phase = CascadePhase::Triggered;
        true
    }

    /// Evaluate the schedule at `now` and return every step that became due,
    /// in schedule order. Safe to call any number of times per instant.
    pub fn advance(&mut self, now: Timestamp) -> Vec<CascadeStep> {
        let mut steps = Vec::new();

        match self.phase {
            CascadePhase::Idle | CascadePhase::Complete => return steps,
            CascadePhase::Triggered => {
                // A non-finite start would freeze the cascade at zero elapsed.
                if !now.is_finite() {
                    return steps;
                }
                let Some(schedule) = self.schedule.as_mut() else {
                    return steps;
                };
                schedule.start_time = Some(now);
                self.start_time = Some(now);
                self.phase = CascadePhase::Running;
                steps.push(CascadeStep {
                    event: FieldEvent::CascadeTriggered {
                        trigger_index: schedule.trigger_index,
                        scheduled: schedule.entries.len(),
                    },
                    at: 0.0,
                });
            }
            CascadePhase::Running => {}
        }

        let (Some(schedule), Some(elapsed)) = (self.schedule.as_ref(), self.elapsed(now)) else {
            return steps;
        };

        // (time, flash-before-detonate, rank)
        let mut due: Vec<(f64, u8, usize, FieldEvent)> = Vec::new();
        for (rank, entry) in schedule.entries.iter().enumerate() {
            if elapsed >= entry.flash_time && self.flashed.insert(entry.rock_index) {
                due.push((
                    entry.flash_time,
                    0,
                    rank,
                    FieldEvent::Flash {
                        rock_index: entry.rock_index,
                    },
                ));
            }
            if elapsed >= entry.delay && self.detonated.insert(entry.rock_index) {
                due.push((
                    entry.delay,
                    1,
                    rank,
                    FieldEvent::Detonate {
                        rock_index: entry.rock_index,
                    },
                ));
            }
        }
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));
        steps.extend(due.into_iter().map(|(at, _, _, event)| CascadeStep { event, at }));

        if elapsed >= schedule.total_duration && !self.completed {
            let at = schedule.total_duration;
            self.completed = true;
            self.phase = CascadePhase::Complete;
            self.schedule = None;
            steps.push(CascadeStep {
                event: FieldEvent::FieldCleared,
                at,
            });
        }

        steps
    }
}
