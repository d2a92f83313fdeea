//! Commands sent from the host to a `ThreatEngine`.
//!
//! Commands are queued and applied at the start of the next tick.

use serde::{Deserialize, Serialize};

use crate::types::ThreatId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldCommand {
    /// Spawn a field for a new threat.
    Spawn {
        threat_id: ThreatId,
        amount: f64,
        seed: i64,
    },
    /// Player clicked a rock.
    Hit {
        threat_id: ThreatId,
        rock_index: usize,
    },
    /// Toggle shared drift for a field.
    SetDrift { threat_id: ThreatId, enabled: bool },
    /// Drop a field without clearing it.
    Remove { threat_id: ThreatId },
}
