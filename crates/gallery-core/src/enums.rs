//! Enumeration types used throughout the session core.

use serde::{Deserialize, Serialize};

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No session running; the shot count may be configured.
    #[default]
    Idle,
    /// Shots may be fired.
    Playing,
    /// All shots spent; final tallies available.
    Finished,
}

/// Outcome of a single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    Hit,
    Miss,
}
