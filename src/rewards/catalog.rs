//! Tier-partitioned index over the reward catalog.

use log::info;
use rand::Rng;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::types::{RewardDefinition, Tier};
use crate::core::error::{WheelError, WheelResult};

/// Reward definitions grouped by tier for uniform per-tier draws.
#[derive(Debug, Clone, Default)]
pub struct RewardCatalogIndex {
    common: Vec<Arc<RewardDefinition>>,
    rare: Vec<Arc<RewardDefinition>>,
    epic: Vec<Arc<RewardDefinition>>,
    legendary: Vec<Arc<RewardDefinition>>,
    bomb: Vec<Arc<RewardDefinition>>,
}

impl RewardCatalogIndex {
    /// Partitions `definitions` by tier.
    ///
    /// Fails on the first definition without a tier; nothing is partitioned
    /// into a default bucket.
    pub fn build<I>(definitions: I) -> WheelResult<Self>
    where
        I: IntoIterator<Item = RewardDefinition>,
    {
        let mut index = Self::default();

        for def in definitions {
            let tier = def
                .tier
                .ok_or_else(|| WheelError::InvalidCatalogEntry { id: def.id.clone() })?;
            index.partition_mut(tier).push(Arc::new(def));
        }

        Ok(index)
    }

    /// Replaces the partitions with ones built from `definitions`.
    /// On error the current partitions are left untouched.
    pub fn rebuild<I>(&mut self, definitions: I) -> WheelResult<()>
    where
        I: IntoIterator<Item = RewardDefinition>,
    {
        let fresh = Self::build(definitions)?;
        *self = fresh;
        info!(
            "Reward catalog rebuilt: {} common, {} rare, {} epic, {} legendary, {} bomb",
            self.common.len(),
            self.rare.len(),
            self.epic.len(),
            self.legendary.len(),
            self.bomb.len()
        );
        Ok(())
    }

    pub fn partition(&self, tier: Tier) -> &[Arc<RewardDefinition>] {
        match tier {
            Tier::Common => &self.common,
            Tier::Rare => &self.rare,
            Tier::Epic => &self.epic,
            Tier::Legendary => &self.legendary,
            Tier::Bomb => &self.bomb,
        }
    }

    fn partition_mut(&mut self, tier: Tier) -> &mut Vec<Arc<RewardDefinition>> {
        match tier {
            Tier::Common => &mut self.common,
            Tier::Rare => &mut self.rare,
            Tier::Epic => &mut self.epic,
            Tier::Legendary => &mut self.legendary,
            Tier::Bomb => &mut self.bomb,
        }
    }

    /// Uniformly picks a definition of `tier`, or `None` if the tier is empty.
    pub fn pick_random(&self, tier: Tier, rng: &mut impl Rng) -> Option<&Arc<RewardDefinition>> {
        let partition = self.partition(tier);
        if partition.is_empty() {
            return None;
        }
        Some(&partition[rng.gen_range(0..partition.len())])
    }

    /// Uniformly picks a definition of `tier` whose id is in `allowed`.
    pub fn pick_random_from_allowed(
        &self,
        tier: Tier,
        allowed: &BTreeSet<String>,
        rng: &mut impl Rng,
    ) -> Option<&Arc<RewardDefinition>> {
        let candidates: Vec<&Arc<RewardDefinition>> = self
            .partition(tier)
            .iter()
            .filter(|def| allowed.contains(&def.id))
            .collect();

        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.gen_range(0..candidates.len())])
    }

    pub fn has_tier(&self, tier: Tier) -> bool {
        !self.partition(tier).is_empty()
    }

    /// Looks up the tier of a definition by id.
    pub fn tier_of(&self, id: &str) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|&tier| self.partition(tier).iter().any(|def| def.id == id))
    }

    pub fn len(&self) -> usize {
        Tier::ALL.iter().map(|&tier| self.partition(tier).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
