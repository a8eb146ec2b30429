//! Slot assignment: fills every wheel slot for a zone and places the bomb.

use log::{debug, warn};
use rand::Rng;
use std::sync::Arc;

use super::constraints::SliceConstraint;
use super::quantity::quantity_for;
use super::weights::{pick_tier, weights_for_zone, TierWeights};
use crate::core::constants::FIRST_ZONE;
use crate::core::error::{AssignmentWarning, WheelError, WheelResult};
use crate::rewards::{RewardCatalogIndex, RewardDefinition, Tier};
use crate::zones::{ZoneKind, ZoneRules};

/// The reward placed on one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotAssignment {
    pub reward: Arc<RewardDefinition>,
    pub tier: Tier,
    /// Always 0 for bombs
    pub quantity: u32,
}

impl SlotAssignment {
    /// Count text shown on the slot, e.g. "x3". Zero quantities show nothing.
    pub fn count_label(&self) -> Option<String> {
        (self.quantity > 0).then(|| format!("x{}", self.quantity))
    }
}

/// Result of one repopulation of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPass {
    pub zone: u32,
    pub kind: ZoneKind,
    /// One entry per slot position; `None` where the catalog could not
    /// supply the drawn tier.
    pub slots: Vec<Option<SlotAssignment>>,
    pub warnings: Vec<AssignmentWarning>,
}

impl AssignmentPass {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Assigned slots with their positions.
    pub fn assigned(&self) -> impl Iterator<Item = (usize, &SlotAssignment)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|a| (i, a)))
    }

    pub fn count_tier(&self, tier: Tier) -> usize {
        self.assigned().filter(|(_, a)| a.tier == tier).count()
    }

    pub fn bomb_slot(&self) -> Option<usize> {
        self.assigned()
            .find(|(_, a)| a.tier.is_bomb())
            .map(|(i, _)| i)
    }

    pub fn unassigned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Fills wheel slots from a catalog according to zone rules.
///
/// Holds no state between passes; every call to [`SlotAssigner::assign`]
/// depends only on its arguments, the catalog and the RNG.
#[derive(Debug, Clone, Copy)]
pub struct SlotAssigner<'a> {
    catalog: &'a RewardCatalogIndex,
    rules: &'a ZoneRules,
}

impl<'a> SlotAssigner<'a> {
    pub fn new(catalog: &'a RewardCatalogIndex, rules: &'a ZoneRules) -> Self {
        Self { catalog, rules }
    }

    /// Computes a fresh assignment for `slot_count` slots in `zone`.
    ///
    /// `constraints[i]` applies to slot `i`; slots past the end of the slice
    /// are unconstrained. Any error aborts the whole pass.
    pub fn assign(
        &self,
        zone: u32,
        slot_count: usize,
        constraints: &[SliceConstraint],
        rng: &mut impl Rng,
    ) -> WheelResult<AssignmentPass> {
        if zone < FIRST_ZONE {
            return Err(WheelError::InvalidZone(zone));
        }

        let kind = self.rules.classify(zone);
        let mut pass = AssignmentPass {
            zone,
            kind,
            slots: Vec::with_capacity(slot_count),
            warnings: Vec::new(),
        };

        if slot_count == 0 {
            warn!("Assignment requested for zone {zone} with no slots");
            pass.warnings.push(AssignmentWarning::NoSlots);
            return Ok(pass);
        }

        for slot in 0..slot_count {
            let constraint = constraints.get(slot);
            let (tier, assignment) = self.assign_slot(zone, kind, slot, constraint, rng)?;
            if assignment.is_none() {
                pass.warnings
                    .push(AssignmentWarning::EmptyCatalogPartition { slot, tier });
            }
            pass.slots.push(assignment);
        }

        // Bomb goes in last so its position is independent of the reward draws
        if kind.has_bomb() {
            self.place_bomb(&mut pass, rng);
        }

        debug!(
            "Zone {} ({}): {} slots, {} warnings",
            zone,
            kind.name(),
            pass.slot_count(),
            pass.warnings.len()
        );
        Ok(pass)
    }

    /// Tier weights for one slot after applying its constraint.
    ///
    /// Tiers the constraint rejects, and tiers the catalog cannot supply, are
    /// zeroed. If nothing drawable remains the constraint is dropped and the
    /// plain zone weights are used.
    pub fn slot_weights(
        &self,
        zone: u32,
        kind: ZoneKind,
        constraint: Option<&SliceConstraint>,
    ) -> TierWeights {
        let base = weights_for_zone(zone, kind);
        let Some(constraint) = constraint.filter(|c| !c.is_unconstrained()) else {
            return base;
        };
        let Some(permitted) = constraint.permitted_tiers(self.catalog) else {
            return base;
        };

        let constrained =
            base.retain(|tier| permitted.contains(&tier) && self.catalog.has_tier(tier));
        if constrained.is_drawable() {
            constrained
        } else {
            debug!("Slot constraint leaves no drawable tier in zone {zone}; using zone weights");
            base
        }
    }

    fn assign_slot(
        &self,
        zone: u32,
        kind: ZoneKind,
        slot: usize,
        constraint: Option<&SliceConstraint>,
        rng: &mut impl Rng,
    ) -> WheelResult<(Tier, Option<SlotAssignment>)> {
        let weights = self.slot_weights(zone, kind, constraint);
        let tier = pick_tier(&weights, rng)?;

        let allowed = match constraint.and_then(SliceConstraint::allow_list) {
            Some(ids) => self.catalog.pick_random_from_allowed(tier, ids, rng),
            None => None,
        };
        let reward = match allowed {
            Some(reward) => Some(reward),
            None => self.catalog.pick_random(tier, rng),
        };

        let Some(reward) = reward else {
            warn!("No {} reward in catalog for slot {slot}", tier.name());
            return Ok((tier, None));
        };

        let assignment = SlotAssignment {
            reward: Arc::clone(reward),
            tier,
            quantity: quantity_for(zone, kind, tier, rng),
        };
        Ok((tier, Some(assignment)))
    }

    fn place_bomb(&self, pass: &mut AssignmentPass, rng: &mut impl Rng) {
        let Some(bomb) = self.catalog.pick_random(Tier::Bomb, rng) else {
            warn!("Zone {} needs a bomb but the catalog has none", pass.zone);
            pass.warnings.push(AssignmentWarning::MissingBomb);
            return;
        };

        let index = rng.gen_range(0..pass.slots.len());
        // The bomb fills the slot, so a gap reported for it no longer applies
        pass.warnings.retain(|warning| {
            !matches!(warning, AssignmentWarning::EmptyCatalogPartition { slot, .. } if *slot == index)
        });
        pass.slots[index] = Some(SlotAssignment {
            reward: Arc::clone(bomb),
            tier: Tier::Bomb,
            quantity: 0,
        });
    }
}
