//! Reward quantity ranges per zone and tier.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::core::constants::{
    COMMON_QUANTITY_BONUS, EPIC_QUANTITY_PENALTY, LEGENDARY_QUANTITY_FLOOR,
    LEGENDARY_QUANTITY_PENALTY, QUANTITY_MAX_HIGH_ZONE, QUANTITY_MAX_LOW_ZONE, QUANTITY_MIN,
    SAFE_ZONE_QUANTITY_BONUS, SUPER_ZONE_QUANTITY_BONUS, SUPER_ZONE_QUANTITY_MIN,
};
use crate::rewards::Tier;
use crate::zones::{zone_progress, ZoneKind};

/// Inclusive quantity range for a reward of `tier` in `zone`.
///
/// The base range is `1..=round(lerp(2, 10, zone / 100))`. Common gets one
/// extra, Epic and Legendary lose some top end, and Safe/Super zones raise
/// the ceiling of the non-common tiers. Bombs always carry zero.
pub fn quantity_range(zone: u32, kind: ZoneKind, tier: Tier) -> RangeInclusive<u32> {
    let t = zone_progress(zone);
    let mut min = QUANTITY_MIN;
    let mut max =
        (QUANTITY_MAX_LOW_ZONE + (QUANTITY_MAX_HIGH_ZONE - QUANTITY_MAX_LOW_ZONE) * t).round() as u32;

    match tier {
        Tier::Common => {
            max += COMMON_QUANTITY_BONUS;
        }
        Tier::Rare => {
            apply_zone_bonus(kind, &mut min, &mut max);
        }
        Tier::Epic => {
            max = min.max(max.saturating_sub(EPIC_QUANTITY_PENALTY));
            apply_zone_bonus(kind, &mut min, &mut max);
        }
        Tier::Legendary => {
            max = LEGENDARY_QUANTITY_FLOOR.max(max.saturating_sub(LEGENDARY_QUANTITY_PENALTY));
            apply_zone_bonus(kind, &mut min, &mut max);
        }
        Tier::Bomb => return 0..=0,
    }

    min..=max.max(min)
}

fn apply_zone_bonus(kind: ZoneKind, min: &mut u32, max: &mut u32) {
    match kind {
        ZoneKind::Safe => *max += SAFE_ZONE_QUANTITY_BONUS,
        ZoneKind::Super => {
            *min = SUPER_ZONE_QUANTITY_MIN;
            *max += SUPER_ZONE_QUANTITY_BONUS;
        }
        ZoneKind::Normal => {}
    }
}

/// Draws a quantity uniformly from [`quantity_range`].
pub fn quantity_for(zone: u32, kind: ZoneKind, tier: Tier, rng: &mut impl Rng) -> u32 {
    rng.gen_range(quantity_range(zone, kind, tier))
}
