//! Fundamental geometric and timing types.

use serde::{Deserialize, Serialize};

/// Field-local 3D vector (scene units). y is up.
pub type Vec3 = glam::DVec3;

/// Host clock reading in seconds. Only differences between readings matter.
pub type Timestamp = f64;

/// Opaque identifier the host assigns to a threat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreatId(pub String);

impl ThreatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ThreatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Linear interpolation between `min` and `max` by `t` (not clamped).
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}
