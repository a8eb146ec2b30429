//! Simulation report generation.

use serde::Serialize;

use super::config::SimConfig;
use super::stats::ZoneStats;
use crate::rewards::Tier;
use crate::wheel::weights_for_zone;
use crate::zones::ZoneKind;

/// Aggregated results across every simulated zone.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub passes_per_zone: u32,
    pub slot_count: usize,
    pub safe_zone_interval: i32,
    pub super_zone_interval: i32,
    pub zones: Vec<ZoneStats>,
}

impl SimReport {
    pub fn from_zones(zones: Vec<ZoneStats>, config: &SimConfig) -> Self {
        Self {
            passes_per_zone: config.passes_per_zone,
            slot_count: config.slot_count,
            safe_zone_interval: config.safe_zone_interval,
            super_zone_interval: config.super_zone_interval,
            zones,
        }
    }

    pub fn zone(&self, zone: u32) -> Option<&ZoneStats> {
        self.zones.iter().find(|z| z.zone == zone)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 REWARD WHEEL SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Passes per zone: {}   Slots: {}   Safe every {}   Super every {}\n\n",
            self.passes_per_zone, self.slot_count, self.safe_zone_interval, self.super_zone_interval
        ));

        report.push_str("── TIER DISTRIBUTION ────────────────────────────────────────────\n");
        report.push_str("  Zone  Kind     Common   Rare    Epic    Legend  Bombs/Pass\n");
        report.push_str("  ────  ──────   ──────   ─────   ─────   ──────  ──────────\n");
        for stats in &self.zones {
            report.push_str(&format!(
                "  {:4}  {:6}   {:5.1}%  {:5.1}%  {:5.1}%  {:5.1}%  {:.2}\n",
                stats.zone,
                stats.kind.name(),
                stats.tier_rate(Tier::Common) * 100.0,
                stats.tier_rate(Tier::Rare) * 100.0,
                stats.tier_rate(Tier::Epic) * 100.0,
                stats.tier_rate(Tier::Legendary) * 100.0,
                stats.bombs_per_pass()
            ));
        }
        report.push('\n');

        report.push_str("── DRAW ODDS (zone weights) ──────────────────────────────────────\n");
        report.push_str("  Zone  Common   Rare    Epic    Legend\n");
        report.push_str("  ────  ──────   ─────   ─────   ──────\n");
        for stats in &self.zones {
            let weights = weights_for_zone(stats.zone, stats.kind);
            report.push_str(&format!(
                "  {:4}  {:5.1}%  {:5.1}%  {:5.1}%  {:5.1}%\n",
                stats.zone,
                weights.probability(Tier::Common) * 100.0,
                weights.probability(Tier::Rare) * 100.0,
                weights.probability(Tier::Epic) * 100.0,
                weights.probability(Tier::Legendary) * 100.0
            ));
        }
        report.push('\n');

        report.push_str("── AVERAGE QUANTITY ─────────────────────────────────────────────\n");
        report.push_str("  Zone  Common   Rare    Epic    Legend\n");
        report.push_str("  ────  ──────   ─────   ─────   ──────\n");
        for stats in &self.zones {
            report.push_str(&format!(
                "  {:4}  {:6.2}   {:5.2}   {:5.2}   {:6.2}\n",
                stats.zone,
                stats.avg_quantity(Tier::Common),
                stats.avg_quantity(Tier::Rare),
                stats.avg_quantity(Tier::Epic),
                stats.avg_quantity(Tier::Legendary)
            ));
        }
        report.push('\n');

        report.push_str("── CATALOG HEALTH ───────────────────────────────────────────────\n");
        let unassigned: u64 = self.zones.iter().map(|z| z.unassigned_slots).sum();
        let missing_bombs: u32 = self.zones.iter().map(|z| z.missing_bombs).sum();
        report.push_str(&format!("  Unassigned slots:    {}\n", unassigned));
        report.push_str(&format!("  Passes without bomb: {}\n", missing_bombs));

        if unassigned > 0 {
            report.push_str("  ⚠️  Some tiers have no catalog rewards\n");
        }
        if missing_bombs > 0 {
            report.push_str("  ⚠️  Catalog has no bomb reward\n");
        }
        let commons_in_super = self
            .zones
            .iter()
            .filter(|z| z.kind == ZoneKind::Super)
            .any(|z| z.count(Tier::Common) > 0);
        if commons_in_super {
            report.push_str("  ⚠️  Common rewards appeared in a Super zone\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
