//! Zone classification into Normal, Safe and Super zones.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    DEFAULT_SAFE_ZONE_INTERVAL, DEFAULT_SUPER_ZONE_INTERVAL, FIRST_ZONE, ZONE_CURVE_SPAN,
};

/// How a zone treats the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Standard zone with one bomb slot.
    Normal,
    /// Bomb-free zone with a softened reward curve.
    Safe,
    /// Bomb-free jackpot zone with no common rewards.
    Super,
}

impl ZoneKind {
    pub fn name(&self) -> &'static str {
        match self {
            ZoneKind::Normal => "Normal",
            ZoneKind::Safe => "Safe",
            ZoneKind::Super => "Super",
        }
    }

    /// Safe and Super zones never place a bomb.
    pub fn has_bomb(&self) -> bool {
        matches!(self, ZoneKind::Normal)
    }
}

/// Interval configuration for zone classification.
///
/// An interval of zero or less disables the multiple-of rule for that kind.
/// Zone 1 is Safe regardless of configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRules {
    pub safe_zone_interval: i32,
    pub super_zone_interval: i32,
}

impl Default for ZoneRules {
    fn default() -> Self {
        Self {
            safe_zone_interval: DEFAULT_SAFE_ZONE_INTERVAL,
            super_zone_interval: DEFAULT_SUPER_ZONE_INTERVAL,
        }
    }
}

impl ZoneRules {
    pub fn new(safe_zone_interval: i32, super_zone_interval: i32) -> Self {
        Self {
            safe_zone_interval,
            super_zone_interval,
        }
    }

    pub fn is_super_zone(&self, zone: u32) -> bool {
        zone != FIRST_ZONE && is_multiple(zone, self.super_zone_interval)
    }

    /// Super takes precedence over Safe when both intervals match.
    pub fn is_safe_zone(&self, zone: u32) -> bool {
        if zone == FIRST_ZONE {
            return true;
        }
        is_multiple(zone, self.safe_zone_interval) && !self.is_super_zone(zone)
    }

    pub fn classify(&self, zone: u32) -> ZoneKind {
        if self.is_super_zone(zone) {
            ZoneKind::Super
        } else if self.is_safe_zone(zone) {
            ZoneKind::Safe
        } else {
            ZoneKind::Normal
        }
    }
}

fn is_multiple(zone: u32, interval: i32) -> bool {
    interval > 0 && zone % interval as u32 == 0
}

/// Normalized progression factor: 0.0 at zone 0, 1.0 at zone 100 and beyond.
pub fn zone_progress(zone: u32) -> f64 {
    (zone as f64 / ZONE_CURVE_SPAN).clamp(0.0, 1.0)
}
