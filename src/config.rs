//! Wheel configuration and reward catalog files.
//!
//! Both are plain JSON. Missing fields in a config file fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{
    DEFAULT_SAFE_ZONE_INTERVAL, DEFAULT_SLOT_COUNT, DEFAULT_SUPER_ZONE_INTERVAL,
};
use crate::core::error::WheelResult;
use crate::rewards::{RewardCatalogIndex, RewardDefinition};
use crate::wheel::constraints::SliceConstraint;
use crate::zones::ZoneRules;

/// Externally supplied wheel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Every multiple of this zone is Safe (<= 0 disables)
    pub safe_zone_interval: i32,
    /// Every multiple of this zone is Super (<= 0 disables)
    pub super_zone_interval: i32,
    pub slot_count: usize,
    /// Zone used when a spin stops. `None` uses the live zone.
    pub wheel_stopped_zone: Option<u32>,
    /// Per-slot constraints, indexed by slot position
    pub slices: Vec<SliceConstraint>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            safe_zone_interval: DEFAULT_SAFE_ZONE_INTERVAL,
            super_zone_interval: DEFAULT_SUPER_ZONE_INTERVAL,
            slot_count: DEFAULT_SLOT_COUNT,
            wheel_stopped_zone: None,
            slices: Vec::new(),
        }
    }
}

impl WheelConfig {
    pub fn rules(&self) -> ZoneRules {
        ZoneRules::new(self.safe_zone_interval, self.super_zone_interval)
    }

    pub fn from_json(json: &str) -> WheelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> WheelResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> WheelResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// On-disk reward catalog: `{ "rewards": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub rewards: Vec<RewardDefinition>,
}

impl CatalogFile {
    pub fn from_json(json: &str) -> WheelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> WheelResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn into_index(self) -> WheelResult<RewardCatalogIndex> {
        RewardCatalogIndex::build(self.rewards)
    }
}
