//! Update system: advances every field to the tick's clock reading.

use hecs::World;

use threatfield_core::state::FieldFrame;
use threatfield_core::types::{ThreatId, Timestamp};

use crate::field::Field;

/// Update all fields and collect their frames, ordered by threat id.
pub fn run(world: &mut World, now: Timestamp, dt: f64) -> Vec<FieldFrame> {
    let mut frames: Vec<FieldFrame> = world
        .query_mut::<(&ThreatId, &mut Field)>()
        .into_iter()
        .map(|(_entity, (threat_id, field))| FieldFrame {
            threat_id: threat_id.clone(),
            output: field.update(now, dt),
        })
        .collect();

    // hecs iteration order follows storage, not insertion.
    frames.sort_by(|a, b| a.threat_id.cmp(&b.threat_id));
    frames
}
