//! Built-in reward set used by the simulator and as a fallback catalog.

use super::types::{RewardDefinition, Tier};

/// Returns the standard wheel rewards: four per rarity tier plus one bomb.
pub fn standard_rewards() -> Vec<RewardDefinition> {
    vec![
        // Common: currencies and consumables
        RewardDefinition::new("cash", "Cash", Tier::Common),
        RewardDefinition::new("gold", "Gold", Tier::Common),
        RewardDefinition::new("grenade", "Grenade", Tier::Common),
        RewardDefinition::new("health_kit", "Health Kit", Tier::Common),
        // Rare: small chests and attachments
        RewardDefinition::new("bronze_chest", "Bronze Chest", Tier::Rare),
        RewardDefinition::new("red_dot_sight", "Red Dot Sight", Tier::Rare),
        RewardDefinition::new("extended_mag", "Extended Magazine", Tier::Rare),
        RewardDefinition::new("body_armor", "Body Armor", Tier::Rare),
        // Epic: weapon points and cosmetics
        RewardDefinition::new("silver_chest", "Silver Chest", Tier::Epic),
        RewardDefinition::new("smg_points", "SMG Points", Tier::Epic),
        RewardDefinition::new("shotgun_points", "Shotgun Points", Tier::Epic),
        RewardDefinition::new("knife_skin", "Knife Skin", Tier::Epic),
        // Legendary: top-end chests and weapons
        RewardDefinition::new("gold_chest", "Gold Chest", Tier::Legendary),
        RewardDefinition::new("sniper_points", "Sniper Points", Tier::Legendary),
        RewardDefinition::new("rifle_skin", "Rifle Skin", Tier::Legendary),
        RewardDefinition::new("super_chest", "Super Chest", Tier::Legendary),
        // Hazard
        RewardDefinition::new("bomb", "Bomb", Tier::Bomb),
    ]
}
