//! Commands sent from the presentation layer to the session engine.
//!
//! Commands resolve synchronously: each one is validated and applied in
//! full before `apply` returns. The presentation layer is expected to gate
//! illegal commands (e.g. disabling the fire control), but the engine
//! enforces phase rules independently.

use serde::{Deserialize, Serialize};

/// All actions the presentation layer may request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Set the shot count for the next session (Idle/Finished only).
    Configure { shots: u32 },
    /// Begin a session, or restart the running one.
    Start,
    /// Resolve one shot.
    Fire,
    /// Return to Idle, keeping the configured shot count.
    Reset,
    /// Clear the hit highlight, if it still points at this zone.
    ClearHighlight { zone_id: String },
}
