//! Session engine for the shooting gallery.
//!
//! Owns the session state machine, resolves shots against a weighted zone
//! table, and produces `SessionSnapshot`s for the presentation layer.

pub mod engine;
pub mod resolve;

pub use engine::{SessionConfig, ShootingSession};
pub use gallery_core as core;
