//! Simulation configuration.

use crate::core::constants::{
    DEFAULT_SAFE_ZONE_INTERVAL, DEFAULT_SLOT_COUNT, DEFAULT_SUPER_ZONE_INTERVAL,
};
use crate::zones::ZoneRules;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of wheel refills per zone
    pub passes_per_zone: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// First zone to simulate (inclusive, >= 1)
    pub start_zone: u32,

    /// Last zone to simulate (inclusive)
    pub end_zone: u32,

    pub slot_count: usize,

    pub safe_zone_interval: i32,
    pub super_zone_interval: i32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per zone)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            passes_per_zone: 1000,
            seed: None,
            start_zone: 1,
            end_zone: 100,
            slot_count: DEFAULT_SLOT_COUNT,
            safe_zone_interval: DEFAULT_SAFE_ZONE_INTERVAL,
            super_zone_interval: DEFAULT_SUPER_ZONE_INTERVAL,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking a handful of zones
    pub fn zone_range(start_zone: u32, end_zone: u32, passes_per_zone: u32) -> Self {
        Self {
            passes_per_zone,
            start_zone,
            end_zone,
            ..Default::default()
        }
    }

    /// Narrows the run to 100 passes over zones 1-30, keeping every other
    /// setting.
    pub fn quick(&mut self) {
        self.start_zone = 1;
        self.end_zone = 30;
        self.passes_per_zone = 100;
    }

    pub fn rules(&self) -> ZoneRules {
        ZoneRules::new(self.safe_zone_interval, self.super_zone_interval)
    }

    pub fn zone_count(&self) -> usize {
        if self.end_zone < self.start_zone {
            0
        } else {
            (self.end_zone - self.start_zone + 1) as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.start_zone, 1);
        assert_eq!(config.end_zone, 100);
        assert_eq!(config.zone_count(), 100);
        assert_eq!(config.slot_count, 8);
    }

    #[test]
    fn test_zone_range() {
        let config = SimConfig::zone_range(10, 12, 50);
        assert_eq!(config.zone_count(), 3);
        assert_eq!(config.passes_per_zone, 50);
        assert_eq!(SimConfig::zone_range(5, 4, 1).zone_count(), 0);
    }

    #[test]
    fn test_quick_keeps_other_settings() {
        let mut config = SimConfig {
            seed: Some(42),
            slot_count: 6,
            safe_zone_interval: 0,
            super_zone_interval: 60,
            ..SimConfig::zone_range(50, 90, 5000)
        };
        config.quick();

        assert_eq!((config.start_zone, config.end_zone), (1, 30));
        assert_eq!(config.passes_per_zone, 100);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.slot_count, 6);
        assert_eq!(config.safe_zone_interval, 0);
        assert_eq!(config.super_zone_interval, 60);
    }
}
