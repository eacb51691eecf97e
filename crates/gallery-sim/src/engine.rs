//! Session engine — the core of the game.
//!
//! `ShootingSession` owns all mutable game state (phase, counters, working
//! zone copies, RNG) and resolves shots against its zone table. Completely
//! headless (no rendering or timer dependency), enabling deterministic
//! testing. The presentation layer drives it through `SessionCommand`s and
//! re-renders from `SessionSnapshot`s.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use gallery_core::commands::SessionCommand;
use gallery_core::constants::{DEFAULT_SHOTS, HIGHLIGHT_CLEAR_MS, ROLL_MAX};
use gallery_core::enums::{SessionPhase, ShotOutcome};
use gallery_core::errors::SessionError;
use gallery_core::events::SessionEvent;
use gallery_core::state::SessionSnapshot;
use gallery_core::zones::{Zone, ZoneTable};

use crate::resolve;

/// Configuration for a new session engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same shot sequence.
    pub seed: u64,
    /// Shot count for the first session. A zero count is clamped to 1.
    pub shots: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            shots: DEFAULT_SHOTS,
        }
    }
}

/// The session engine. Owns the zone table, counters, and RNG.
pub struct ShootingSession {
    table: ZoneTable,
    zones: Vec<Zone>,
    rng: ChaCha8Rng,
    phase: SessionPhase,
    shots_configured: u32,
    shots_remaining: u32,
    hits: u32,
    misses: u32,
    last_hit_zone: Option<String>,
    events: Vec<SessionEvent>,
}

impl ShootingSession {
    /// Create a new session engine in the Idle phase.
    pub fn new(table: ZoneTable, config: SessionConfig) -> Self {
        let shots = config.shots.max(1);
        let zones = table.working_copy();
        Self {
            table,
            zones,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            phase: SessionPhase::Idle,
            shots_configured: shots,
            shots_remaining: shots,
            hits: 0,
            misses: 0,
            last_hit_zone: None,
            events: Vec::new(),
        }
    }

    /// Set the shot count for the next session. Allowed while Idle or
    /// Finished; counters are untouched until `start`.
    ///
    /// # Errors
    ///
    /// Rejects a zero shot count, or any call while Playing.
    pub fn configure(&mut self, shots: u32) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Playing {
            return Err(SessionError::NotPlaying { phase: self.phase });
        }
        if shots == 0 {
            return Err(SessionError::InvalidShotCount { shots });
        }
        self.shots_configured = shots;
        Ok(())
    }

    /// Begin a session: full counter reset, zone flags cleared.
    /// Calling it mid-game restarts the session.
    pub fn start(&mut self) {
        self.phase = SessionPhase::Playing;
        self.shots_remaining = self.shots_configured;
        self.hits = 0;
        self.misses = 0;
        self.zones = self.table.working_copy();
        self.last_hit_zone = None;
        self.events.clear();
        log::debug!("session started: {} shots", self.shots_configured);
    }

    /// Resolve one shot. Draws a single uniform roll from `[0, 100)` and
    /// attributes it to a zone or the miss band.
    ///
    /// # Errors
    ///
    /// Rejects the call (with no state change) unless the session is
    /// Playing with shots remaining.
    pub fn fire(&mut self) -> Result<ShotOutcome, SessionError> {
        if self.phase != SessionPhase::Playing || self.shots_remaining == 0 {
            return Err(SessionError::NotPlaying { phase: self.phase });
        }
        let roll = self.rng.gen_range(0.0..ROLL_MAX);
        Ok(self.resolve_shot(roll))
    }

    /// Apply one resolved roll. The caller has already checked the phase.
    fn resolve_shot(&mut self, roll: f64) -> ShotOutcome {
        let outcome = match resolve::struck_zone(&self.zones, roll) {
            Some(idx) => {
                let zone_id = self.zones[idx].id.clone();
                self.hits += 1;
                self.zones[idx].is_hit = true;
                self.last_hit_zone = Some(zone_id.clone());
                self.events.push(SessionEvent::ZoneHit { zone_id });
                ShotOutcome::Hit
            }
            None => {
                self.misses += 1;
                self.events.push(SessionEvent::Miss);
                ShotOutcome::Miss
            }
        };
        self.shots_remaining -= 1;
        log::debug!(
            "shot resolved: roll {roll:.3} -> {outcome:?}, {} remaining",
            self.shots_remaining
        );
        if self.shots_remaining == 0 {
            self.phase = SessionPhase::Finished;
            self.events.push(SessionEvent::SessionFinished {
                hits: self.hits,
                misses: self.misses,
                shots_configured: self.shots_configured,
            });
        }
        outcome
    }

    /// Return to Idle: counters restored, zone flags and highlight
    /// cleared. The configured shot count is kept.
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.shots_remaining = self.shots_configured;
        self.hits = 0;
        self.misses = 0;
        self.zones = self.table.working_copy();
        self.last_hit_zone = None;
        self.events.clear();
    }

    /// Clear the hit highlight, but only if it still points at `zone_id`.
    /// A stale clear arriving after a newer hit is a no-op.
    pub fn clear_highlight(&mut self, zone_id: &str) {
        if self.last_hit_zone.as_deref() == Some(zone_id) {
            self.last_hit_zone = None;
        }
    }

    /// Hits as a percentage of configured shots.
    pub fn accuracy(&self) -> f64 {
        if self.shots_configured == 0 {
            return 0.0;
        }
        f64::from(self.hits) / f64::from(self.shots_configured) * 100.0
    }

    /// Dispatch a presentation-layer command. Rejected commands are logged
    /// and leave state unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the validation error of the underlying operation.
    pub fn apply(&mut self, command: SessionCommand) -> Result<(), SessionError> {
        let result = match command {
            SessionCommand::Configure { shots } => self.configure(shots),
            SessionCommand::Start => {
                self.start();
                Ok(())
            }
            SessionCommand::Fire => self.fire().map(|_| ()),
            SessionCommand::Reset => {
                self.reset();
                Ok(())
            }
            SessionCommand::ClearHighlight { zone_id } => {
                self.clear_highlight(&zone_id);
                Ok(())
            }
        };
        if let Err(err) = &result {
            log::warn!("command rejected: {err}");
        }
        result
    }

    /// Build the current snapshot, draining pending events.
    pub fn snapshot(&mut self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            shots_configured: self.shots_configured,
            shots_remaining: self.shots_remaining,
            hits: self.hits,
            misses: self.misses,
            accuracy_pct: self.accuracy(),
            zones: self.zones.clone(),
            last_hit_zone: self.last_hit_zone.clone(),
            highlight_clear_ms: HIGHLIGHT_CLEAR_MS,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the configured shot count.
    pub fn shots_configured(&self) -> u32 {
        self.shots_configured
    }

    /// Get the number of shots left in the running session.
    pub fn shots_remaining(&self) -> u32 {
        self.shots_remaining
    }

    /// Get the hit tally.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Get the miss tally.
    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Get the working zone copies in resolution order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Get the most recently struck zone, while its highlight is live.
    pub fn last_hit_zone(&self) -> Option<&str> {
        self.last_hit_zone.as_deref()
    }

    /// Resolve a shot with an injected roll (for boundary tests).
    ///
    /// # Errors
    ///
    /// Same phase rules as `fire`.
    #[cfg(test)]
    pub fn fire_with_roll(&mut self, roll: f64) -> Result<ShotOutcome, SessionError> {
        if self.phase != SessionPhase::Playing || self.shots_remaining == 0 {
            return Err(SessionError::NotPlaying { phase: self.phase });
        }
        Ok(self.resolve_shot(roll))
    }
}
