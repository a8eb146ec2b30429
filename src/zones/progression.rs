//! Zone progression state and the events it produces.

use serde::{Deserialize, Serialize};

use super::classification::{ZoneKind, ZoneRules};
use crate::core::constants::FIRST_ZONE;
use crate::core::error::{WheelError, WheelResult};
use crate::wheel::events::WheelEvent;

/// Tracks which zone the player is on. Zones are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneProgression {
    current_zone: u32,
    /// Furthest zone reached since the last reset
    highest_zone: u32,
}

impl Default for ZoneProgression {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneProgression {
    /// Creates a new progression starting in zone 1.
    pub fn new() -> Self {
        Self {
            current_zone: FIRST_ZONE,
            highest_zone: FIRST_ZONE,
        }
    }

    /// Creates a progression from a 0-based zone index as used by zone panels.
    pub fn from_zone_index(index: u32) -> Self {
        let zone = index.saturating_add(1);
        Self {
            current_zone: zone,
            highest_zone: zone,
        }
    }

    pub fn current_zone(&self) -> u32 {
        self.current_zone
    }

    pub fn highest_zone(&self) -> u32 {
        self.highest_zone
    }

    pub fn kind(&self, rules: &ZoneRules) -> ZoneKind {
        rules.classify(self.current_zone)
    }

    /// Moves to the next zone.
    pub fn advance(&mut self) -> WheelEvent {
        self.enter(self.current_zone.saturating_add(1))
    }

    /// Moves directly to `zone`.
    pub fn jump_to(&mut self, zone: u32) -> WheelResult<WheelEvent> {
        if zone < FIRST_ZONE {
            return Err(WheelError::InvalidZone(zone));
        }
        Ok(self.enter(zone))
    }

    /// Starts over from zone 1.
    pub fn reset(&mut self) -> WheelEvent {
        self.highest_zone = FIRST_ZONE;
        self.enter(FIRST_ZONE)
    }

    fn enter(&mut self, zone: u32) -> WheelEvent {
        self.current_zone = zone;
        self.highest_zone = self.highest_zone.max(zone);
        WheelEvent::ZoneChanged { new_zone: zone }
    }
}
