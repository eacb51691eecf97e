//! Error taxonomy for the session core.
//!
//! All errors are local validation failures. None abort the process, and a
//! rejected command leaves session state untouched, so the engine is safe
//! to drive blindly from any caller.

use thiserror::Error;

use crate::enums::SessionPhase;

/// Zone table construction failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A zone weight is negative or not a finite number.
    #[error("zone `{zone_id}` has invalid hit chance {weight}")]
    InvalidWeight { zone_id: String, weight: f64 },
    /// Two zones share an identifier.
    #[error("duplicate zone id `{zone_id}`")]
    DuplicateZoneId { zone_id: String },
    /// Combined zone weights leave no room for the table to be a
    /// probability distribution.
    #[error("zone weights sum to {sum}, exceeding 100")]
    WeightSumExceeded { sum: f64 },
}

/// Rejected session command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// `configure` was given a zero shot count.
    #[error("shot count must be positive (got {shots})")]
    InvalidShotCount { shots: u32 },
    /// The command is not allowed in the current phase.
    #[error("command not allowed in {phase:?} phase")]
    NotPlaying { phase: SessionPhase },
}
