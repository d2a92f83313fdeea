//! Seeded procedural generation for threat fields.
//!
//! Turns a monetary amount and a seed into a `FieldSpec`, and picks each
//! field's drift target. Everything here is pure: the same inputs always
//! produce bit-identical output.

pub mod drift;
pub mod field;
pub mod placement;

pub use drift::drift_target;
pub use field::{amount_curve, cascade_threshold_for, generate};
pub use threatfield_core as core;
