use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::WheelError;

/// Rarity category of a wheel reward, or the hazard category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
    Bomb = 4,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Common,
        Tier::Rare,
        Tier::Epic,
        Tier::Legendary,
        Tier::Bomb,
    ];

    /// Tiers that take part in weighted selection, in cumulative draw order.
    pub const WEIGHTED: [Tier; 4] = [Tier::Common, Tier::Rare, Tier::Epic, Tier::Legendary];

    /// Returns the display name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Common => "Common",
            Tier::Rare => "Rare",
            Tier::Epic => "Epic",
            Tier::Legendary => "Legendary",
            Tier::Bomb => "Bomb",
        }
    }

    pub fn is_bomb(&self) -> bool {
        matches!(self, Tier::Bomb)
    }
}

impl TryFrom<u8> for Tier {
    type Error = WheelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Tier::Common),
            1 => Ok(Tier::Rare),
            2 => Ok(Tier::Epic),
            3 => Ok(Tier::Legendary),
            4 => Ok(Tier::Bomb),
            other => Err(WheelError::UnhandledTier(other.to_string())),
        }
    }
}

impl FromStr for Tier {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WheelError::UnhandledTier(s.to_string()))
    }
}

/// A catalog entry as supplied by the content pipeline.
///
/// `tier` is `None` when the entry was authored without a tier; such entries
/// are rejected when the catalog index is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tier: Option<Tier>,
}

impl RewardDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: Tier) -> Self {
        let id = id.into();
        Self {
            icon: format!("icons/{id}"),
            id,
            name: name.into(),
            tier: Some(tier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Common < Tier::Rare);
        assert!(Tier::Rare < Tier::Epic);
        assert!(Tier::Epic < Tier::Legendary);
        assert!(Tier::Legendary < Tier::Bomb);
    }

    #[test]
    fn test_tier_name() {
        assert_eq!(Tier::Common.name(), "Common");
        assert_eq!(Tier::Rare.name(), "Rare");
        assert_eq!(Tier::Epic.name(), "Epic");
        assert_eq!(Tier::Legendary.name(), "Legendary");
        assert_eq!(Tier::Bomb.name(), "Bomb");
    }

    #[test]
    fn test_weighted_tiers_exclude_bomb() {
        assert!(!Tier::WEIGHTED.contains(&Tier::Bomb));
        assert_eq!(Tier::WEIGHTED.len(), 4);
    }

    #[test]
    fn test_tier_try_from_u8() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(Tier::try_from(i as u8).unwrap(), *tier);
        }
        assert!(matches!(
            Tier::try_from(5),
            Err(WheelError::UnhandledTier(v)) if v == "5"
        ));
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("legendary".parse::<Tier>().unwrap(), Tier::Legendary);
        assert_eq!(" Bomb ".parse::<Tier>().unwrap(), Tier::Bomb);
        assert!(matches!("Mythic".parse::<Tier>(), Err(WheelError::UnhandledTier(_))));
    }

    #[test]
    fn test_definition_deserializes_without_tier() {
        let def: RewardDefinition =
            serde_json::from_str(r#"{"id": "mystery", "name": "Mystery Box"}"#).unwrap();
        assert_eq!(def.tier, None);
        assert!(def.icon.is_empty());
    }

    #[test]
    fn test_definition_new_sets_icon() {
        let def = RewardDefinition::new("gold", "Gold", Tier::Common);
        assert_eq!(def.icon, "icons/gold");
        assert_eq!(def.tier, Some(Tier::Common));
    }
}
