//! Systems that run over the engine's world each tick.
//!
//! Systems are plain functions over `&mut World`. They do not own state;
//! every field lives in its entity's components.

pub mod cleanup;
pub mod update;
