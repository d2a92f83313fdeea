//! Discrete events emitted by a field for the renderer and UI.

use serde::{Deserialize, Serialize};

/// Events produced during one `update` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldEvent {
    /// The cascade started running this frame.
    CascadeTriggered {
        /// Rock whose destruction set the cascade off.
        trigger_index: usize,
        /// Number of alive rocks queued for detonation.
        scheduled: usize,
    },
    /// Shockwave reached a rock; it should flash white-hot.
    Flash { rock_index: usize },
    /// A rock detonated as part of the cascade.
    Detonate { rock_index: usize },
    /// The cascade finished and the threat is deflected.
    FieldCleared,
    /// An alive rock shed a fragment of debris (visual only).
    DebrisShed { rock_index: usize },
}

impl FieldEvent {
    /// Whether this event belongs to the cascade sequence.
    pub fn is_cascade(&self) -> bool {
        !matches!(self, FieldEvent::DebrisShed { .. })
    }
}
