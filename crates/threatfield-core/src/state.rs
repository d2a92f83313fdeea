//! Frame snapshots handed to the rendering host after each update.

use serde::{Deserialize, Serialize};

use crate::enums::{CascadePhase, TrailTier};
use crate::events::FieldEvent;
use crate::types::{ThreatId, Timestamp, Vec3};

/// Render parameters for one alive rock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockFrame {
    pub rock_index: usize,
    /// Position after growth and drift.
    pub position: Vec3,
    /// Field growth factor.
    pub scale: f64,
    /// Spec size scale, for the renderer to multiply with `scale`.
    pub size_scale: f64,
    pub hp: u32,
    pub max_hp: u32,
    pub instability: f64,
    pub sympathetic_glow: f64,
    pub impact_flash: bool,
    pub trail_tier: TrailTier,
}

/// Everything one field produced in a single update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub now: Timestamp,
    pub growth: f64,
    pub drift_offset: Vec3,
    pub instability: f64,
    pub sympathetic_glow: f64,
    pub destroyed_count: u32,
    pub cascade_phase: CascadePhase,
    pub cleared: bool,
    /// Alive rocks only.
    pub rocks: Vec<RockFrame>,
    /// Events in the order they occurred.
    pub events: Vec<FieldEvent>,
}

/// One field's frame inside a dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFrame {
    pub threat_id: ThreatId,
    pub output: FrameOutput,
}

/// All fields owned by a `ThreatEngine` after one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub now: Timestamp,
    pub fields: Vec<FieldFrame>,
    /// Threats whose fields cleared and were removed this tick.
    pub cleared: Vec<ThreatId>,
}
