//! Cleanup system: removes fields whose cascade has finished.

use hecs::{Entity, World};

use threatfield_core::types::ThreatId;

use crate::field::Field;

/// Despawn every cleared field and return the ids that were removed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> Vec<ThreatId> {
    despawn_buffer.clear();

    let mut cleared = Vec::new();
    for (entity, (threat_id, field)) in world.query_mut::<(&ThreatId, &Field)>() {
        if field.is_cleared() {
            despawn_buffer.push(entity);
            cleared.push(threat_id.clone());
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    cleared.sort();
    cleared
}
