//! Per-slot editorial constraints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::rewards::{RewardCatalogIndex, Tier};

/// Restricts which tiers and rewards may land on one slot position.
///
/// Both fields are optional. With `allowed_tiers` unset, the permitted tiers
/// come from the tiers of the allow-listed rewards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConstraint {
    pub allowed_tiers: Option<BTreeSet<Tier>>,
    pub allowed_rewards: Option<BTreeSet<String>>,
}

impl SliceConstraint {
    pub fn tiers(tiers: impl IntoIterator<Item = Tier>) -> Self {
        Self {
            allowed_tiers: Some(tiers.into_iter().collect()),
            allowed_rewards: None,
        }
    }

    pub fn rewards<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            allowed_tiers: None,
            allowed_rewards: Some(ids.into_iter().map(Into::into).collect()),
        }
    }

    pub fn with_rewards<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.allowed_rewards = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Non-empty allow-list, if any.
    pub fn allow_list(&self) -> Option<&BTreeSet<String>> {
        self.allowed_rewards.as_ref().filter(|ids| !ids.is_empty())
    }

    /// Tiers this slot may draw from, or `None` when every tier is allowed.
    pub fn permitted_tiers(&self, catalog: &RewardCatalogIndex) -> Option<BTreeSet<Tier>> {
        if let Some(tiers) = &self.allowed_tiers {
            return Some(tiers.clone());
        }
        self.allow_list()
            .map(|ids| ids.iter().filter_map(|id| catalog.tier_of(id)).collect())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.allowed_tiers.is_none() && self.allow_list().is_none()
    }
}
