//! Session snapshot — the complete visible state handed to the
//! presentation layer after each command.

use serde::{Deserialize, Serialize};

use crate::enums::SessionPhase;
use crate::events::SessionEvent;
use crate::zones::Zone;

/// Complete session state for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub shots_configured: u32,
    pub shots_remaining: u32,
    pub hits: u32,
    pub misses: u32,
    /// Hits as a percentage of configured shots.
    pub accuracy_pct: f64,
    /// Working zone copies with their `is_hit` flags.
    pub zones: Vec<Zone>,
    /// Most recently struck zone, while its highlight is live.
    pub last_hit_zone: Option<String>,
    /// How long (ms) the frontend should keep `last_hit_zone` highlighted
    /// before sending `ClearHighlight`.
    pub highlight_clear_ms: u64,
    /// Events produced since the previous snapshot.
    pub events: Vec<SessionEvent>,
}
