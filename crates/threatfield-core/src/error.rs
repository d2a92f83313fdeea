//! Error type for field operations.

use thiserror::Error;

use crate::types::ThreatId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Fatal at spawn: the field is not created.
    #[error("invalid threat amount {amount}: must be finite and > 0")]
    InvalidAmount { amount: f64 },
    /// Recoverable: logged and ignored by `hit`.
    #[error("rock index {index} out of range for field with {rock_count} rocks")]
    InvalidRockIndex { index: usize, rock_count: usize },
    /// Recoverable: the field has already been cleared.
    #[error("field already cleared")]
    FieldCleared,
    #[error("threat {0} already has a field")]
    DuplicateThreat(ThreatId),
    #[error("no field for threat {0}")]
    UnknownThreat(ThreatId),
}
