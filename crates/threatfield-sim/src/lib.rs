//! Threat field simulation.
//!
//! A `Field` is one threat's cluster of rocks: it grows in, drifts toward
//! its convergence point, takes hits, and once enough rocks are destroyed
//! runs a distance-ordered cascade that clears it. `ThreatEngine` owns many
//! fields in a hecs world and ticks them together.
//!
//! Everything is pull-based: hosts call `update`/`tick` once per frame with
//! their clock reading, and all scheduling is driven by elapsed time so the
//! event stream does not depend on frame rate.

pub mod cascade;
pub mod drift;
pub mod engine;
pub mod field;
pub mod growth;
pub mod instability;
pub mod lifecycle;
pub mod shedding;
pub mod systems;

pub use engine::ThreatEngine;
pub use field::Field;
pub use threatfield_core as core;
