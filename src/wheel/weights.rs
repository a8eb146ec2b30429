//! Tier weight curves and weighted tier selection.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::{
    NORMAL_ZONE_CURVES, SAFE_ZONE_CURVES, SUPER_ZONE_CURVES, WEIGHT_EPSILON,
};
use crate::core::error::{WheelError, WheelResult};
use crate::rewards::Tier;
use crate::zones::{zone_progress, ZoneKind};

/// Relative weights of the four non-bomb tiers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierWeights {
    pub common: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl TierWeights {
    pub fn new(common: f64, rare: f64, epic: f64, legendary: f64) -> Self {
        Self {
            common,
            rare,
            epic,
            legendary,
        }
    }

    /// Weight of `tier`. Bomb is never weighted.
    pub fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Common => self.common,
            Tier::Rare => self.rare,
            Tier::Epic => self.epic,
            Tier::Legendary => self.legendary,
            Tier::Bomb => 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.common + self.rare + self.epic + self.legendary
    }

    /// True when every weight is finite and non-negative and the total is
    /// large enough to draw from.
    pub fn is_drawable(&self) -> bool {
        let components = [self.common, self.rare, self.epic, self.legendary];
        components.iter().all(|w| w.is_finite() && *w >= 0.0) && self.total() > WEIGHT_EPSILON
    }

    /// Copy with every tier failing `keep` zeroed out.
    pub fn retain(&self, mut keep: impl FnMut(Tier) -> bool) -> Self {
        let mut filtered = *self;
        if !keep(Tier::Common) {
            filtered.common = 0.0;
        }
        if !keep(Tier::Rare) {
            filtered.rare = 0.0;
        }
        if !keep(Tier::Epic) {
            filtered.epic = 0.0;
        }
        if !keep(Tier::Legendary) {
            filtered.legendary = 0.0;
        }
        filtered
    }

    /// Chance of drawing `tier`, or 0.0 if the weights are not drawable.
    pub fn probability(&self, tier: Tier) -> f64 {
        if !self.is_drawable() {
            return 0.0;
        }
        self.get(tier) / self.total()
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Base tier weights for a zone of the given kind.
///
/// Each tier interpolates linearly from its low-zone to its high-zone value
/// as the zone approaches 100.
pub fn weights_for_zone(zone: u32, kind: ZoneKind) -> TierWeights {
    let curves: [(f64, f64); 4] = match kind {
        ZoneKind::Normal => NORMAL_ZONE_CURVES,
        ZoneKind::Safe => SAFE_ZONE_CURVES,
        ZoneKind::Super => SUPER_ZONE_CURVES,
    };
    let t = zone_progress(zone);
    let [common, rare, epic, legendary] = curves.map(|(low, high)| lerp(low, high, t));

    TierWeights::new(common, rare, epic, legendary)
}

/// Draws a tier with probability proportional to its weight.
pub fn pick_tier(weights: &TierWeights, rng: &mut impl Rng) -> WheelResult<Tier> {
    let total = weights.total();
    if !weights.is_drawable() {
        return Err(WheelError::InvalidWeights { total });
    }

    let mut roll = rng.gen_range(0.0..total);
    let mut last_drawable = Tier::Common;

    for tier in Tier::WEIGHTED {
        let weight = weights.get(tier);
        if weight <= 0.0 {
            continue;
        }
        if roll < weight {
            return Ok(tier);
        }
        roll -= weight;
        last_drawable = tier;
    }

    // Float drift past the final bucket lands on the last positive tier
    Ok(last_drawable)
}
