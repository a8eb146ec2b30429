//! Per-zone counters accumulated from assignment passes.

use serde::Serialize;

use crate::core::error::AssignmentWarning;
use crate::rewards::Tier;
use crate::wheel::AssignmentPass;
use crate::zones::ZoneKind;

/// Statistics for every pass simulated in one zone.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneStats {
    pub zone: u32,
    pub kind: ZoneKind,
    pub passes: u32,
    pub slots: u64,
    /// Slot counts indexed by `Tier as usize`
    pub tier_counts: [u64; 5],
    /// Summed quantities indexed by `Tier as usize`
    pub quantity_totals: [u64; 5],
    pub unassigned_slots: u64,
    pub missing_bombs: u32,
}

impl ZoneStats {
    pub fn new(zone: u32, kind: ZoneKind) -> Self {
        Self {
            zone,
            kind,
            passes: 0,
            slots: 0,
            tier_counts: [0; 5],
            quantity_totals: [0; 5],
            unassigned_slots: 0,
            missing_bombs: 0,
        }
    }

    pub fn record_pass(&mut self, pass: &AssignmentPass) {
        self.passes += 1;
        self.slots += pass.slot_count() as u64;
        self.unassigned_slots += pass.unassigned_count() as u64;

        for (_, slot) in pass.assigned() {
            self.tier_counts[slot.tier as usize] += 1;
            self.quantity_totals[slot.tier as usize] += slot.quantity as u64;
        }

        if pass.warnings.contains(&AssignmentWarning::MissingBomb) {
            self.missing_bombs += 1;
        }
    }

    pub fn count(&self, tier: Tier) -> u64 {
        self.tier_counts[tier as usize]
    }

    /// Share of all slots that landed on `tier`.
    pub fn tier_rate(&self, tier: Tier) -> f64 {
        if self.slots == 0 {
            0.0
        } else {
            self.count(tier) as f64 / self.slots as f64
        }
    }

    pub fn avg_quantity(&self, tier: Tier) -> f64 {
        let count = self.count(tier);
        if count == 0 {
            0.0
        } else {
            self.quantity_totals[tier as usize] as f64 / count as f64
        }
    }

    pub fn bombs_per_pass(&self) -> f64 {
        if self.passes == 0 {
            0.0
        } else {
            self.count(Tier::Bomb) as f64 / self.passes as f64
        }
    }
}
