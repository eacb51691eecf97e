//! Events emitted by the session engine for presentation feedback.

use serde::{Deserialize, Serialize};

/// Observable side effects of shot resolution, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A shot struck the named zone.
    ZoneHit { zone_id: String },
    /// A shot landed in the miss band.
    Miss,
    /// The last shot resolved; final tallies attached.
    SessionFinished {
        hits: u32,
        misses: u32,
        shots_configured: u32,
    },
}
