//! Target zones and the weighted zone table.

use serde::{Deserialize, Serialize};

use crate::constants::ROLL_MAX;
use crate::errors::ConfigError;

/// Zone placement in percent units of the target area.
/// Opaque to the core; carried through for the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ZoneRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A named region of the target with an associated hit probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Stable identifier, unique within a table.
    pub id: String,
    /// Display label; the core never interprets it.
    pub name: String,
    /// Percentage weight of the roll range this zone claims.
    pub hit_chance: f64,
    /// Presentation geometry.
    pub rect: ZoneRect,
    /// Set the first time the zone is struck; cleared only on start/reset.
    pub is_hit: bool,
}

impl Zone {
    pub fn new(id: &str, name: &str, hit_chance: f64, rect: ZoneRect) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            hit_chance,
            rect,
            is_hit: false,
        }
    }
}

/// Immutable per-session set of zones.
///
/// Order matters: shot resolution walks zones in table order, so the first
/// zone whose cumulative band covers the roll is the one struck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl ZoneTable {
    /// Validate and build a table.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any weight is negative or non-finite, if
    /// two zones share an id, or if the weight sum exceeds 100.
    pub fn new(zones: Vec<Zone>) -> Result<Self, ConfigError> {
        for zone in &zones {
            if !zone.hit_chance.is_finite() || zone.hit_chance < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    zone_id: zone.id.clone(),
                    weight: zone.hit_chance,
                });
            }
        }
        for (i, zone) in zones.iter().enumerate() {
            if zones[..i].iter().any(|z| z.id == zone.id) {
                return Err(ConfigError::DuplicateZoneId {
                    zone_id: zone.id.clone(),
                });
            }
        }
        let sum: f64 = zones.iter().map(|z| z.hit_chance).sum();
        if sum > ROLL_MAX {
            return Err(ConfigError::WeightSumExceeded { sum });
        }
        Ok(Self { zones })
    }

    /// The stock six-zone human silhouette target:
    /// head 5%, body 10%, arms and legs 15% each (25% miss band).
    pub fn human_silhouette() -> Self {
        // Known-valid constant layout; skips `new` validation.
        Self {
            zones: vec![
                Zone::new("head", "HEAD", 5.0, ZoneRect::new(50.0, 10.0, 20.0, 15.0)),
                Zone::new("body", "BODY", 10.0, ZoneRect::new(50.0, 30.0, 30.0, 35.0)),
                Zone::new("left-arm", "L.ARM", 15.0, ZoneRect::new(25.0, 35.0, 20.0, 25.0)),
                Zone::new("right-arm", "R.ARM", 15.0, ZoneRect::new(85.0, 35.0, 20.0, 25.0)),
                Zone::new("left-leg", "L.LEG", 15.0, ZoneRect::new(42.0, 70.0, 15.0, 28.0)),
                Zone::new("right-leg", "R.LEG", 15.0, ZoneRect::new(68.0, 70.0, 15.0, 28.0)),
            ],
        }
    }

    /// Combined hit probability of all zones.
    pub fn total_hit_chance(&self) -> f64 {
        self.zones.iter().map(|z| z.hit_chance).sum()
    }

    /// Probability mass that resolves to no zone at all.
    pub fn miss_chance(&self) -> f64 {
        ROLL_MAX - self.total_hit_chance()
    }

    /// Zones in resolution order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Fresh per-session zone copies with every `is_hit` flag cleared.
    pub fn working_copy(&self) -> Vec<Zone> {
        self.zones
            .iter()
            .map(|z| Zone {
                is_hit: false,
                ..z.clone()
            })
            .collect()
    }
}
