//! Core types and definitions for the threat field simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! field and rock data, commands, frame snapshots, events, errors,
//! tuning and constants. It contains no simulation logic and no
//! rendering dependency.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::FieldError;
pub use types::{Timestamp, Vec3};
