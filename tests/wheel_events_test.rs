//! Integration test: zone progression -> wheel events -> slot listener
//!
//! Drives a `Wheel` with events produced by `ZoneProgression` and checks
//! what reaches the listener.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reward_wheel::rewards::standard_rewards;
use reward_wheel::wheel::{ChannelListener, SlotsChanged};
use reward_wheel::{
    CatalogFile, RewardCatalogIndex, RewardDefinition, Tier, Wheel, WheelConfig, WheelError,
    WheelEvent, ZoneKind, ZoneProgression,
};
use std::sync::mpsc;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(777)
}

fn standard_catalog() -> RewardCatalogIndex {
    RewardCatalogIndex::build(standard_rewards()).unwrap()
}

#[test]
fn test_progression_events_drive_refills() {
    let (tx, rx) = mpsc::channel();
    let mut wheel = Wheel::new(
        standard_catalog(),
        WheelConfig::default(),
        ChannelListener::new(tx),
    );
    let mut progression = ZoneProgression::new();
    let mut rng = create_test_rng();

    for _ in 0..30 {
        let event = progression.advance();
        wheel.handle_event(event, &mut rng).unwrap();
    }

    let updates: Vec<SlotsChanged> = rx.try_iter().collect();
    assert_eq!(updates.len(), 30);
    for (i, update) in updates.iter().enumerate() {
        let zone = i as u32 + 2;
        assert_eq!(update.zone, zone);
        assert_eq!(update.pass.kind, wheel.rules().classify(zone));
        assert_eq!(update.pass.slot_count(), 8);
    }

    // Zone 30 is Super, zone 31 falls back to Normal
    assert_eq!(updates[28].pass.kind, ZoneKind::Super);
    assert_eq!(updates[29].pass.kind, ZoneKind::Normal);
    assert_eq!(updates[29].pass.count_tier(Tier::Bomb), 1);
    assert_eq!(wheel.live_zone(), 31);
}

#[test]
fn test_spin_refills_current_zone() {
    let mut seen = Vec::new();
    let mut wheel = Wheel::new(
        standard_catalog(),
        WheelConfig::default(),
        |update: &SlotsChanged| seen.push(update.zone),
    );
    let mut progression = ZoneProgression::from_zone_index(6);
    let mut rng = create_test_rng();

    let event = progression.jump_to(progression.current_zone()).unwrap();
    wheel.handle_event(event, &mut rng).unwrap();
    wheel.handle_event(WheelEvent::WheelStopped, &mut rng).unwrap();
    wheel.handle_event(WheelEvent::WheelStopped, &mut rng).unwrap();
    drop(wheel);

    assert_eq!(seen, vec![7, 7, 7]);
}

#[test]
fn test_reset_returns_to_safe_first_zone() {
    let (tx, rx) = mpsc::channel();
    let mut wheel = Wheel::new(
        standard_catalog(),
        WheelConfig::default(),
        ChannelListener::new(tx),
    );
    let mut progression = ZoneProgression::new();
    let mut rng = create_test_rng();

    wheel
        .handle_event(progression.jump_to(42).unwrap(), &mut rng)
        .unwrap();
    wheel.handle_event(progression.reset(), &mut rng).unwrap();

    let updates: Vec<SlotsChanged> = rx.try_iter().collect();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[1].zone, 1);
    assert_eq!(updates[1].pass.kind, ZoneKind::Safe);
    assert_eq!(updates[1].pass.count_tier(Tier::Bomb), 0);
    assert_eq!(progression.highest_zone(), 1);
}

#[test]
fn test_catalog_reload_changes_future_passes() {
    let (tx, rx) = mpsc::channel();
    let mut wheel = Wheel::new(
        standard_catalog(),
        WheelConfig::default(),
        ChannelListener::new(tx),
    );
    let mut rng = create_test_rng();

    let reloaded = vec![
        RewardDefinition::new("coins", "Coins", Tier::Common),
        RewardDefinition::new("crate", "Crate", Tier::Rare),
        RewardDefinition::new("relic", "Relic", Tier::Epic),
        RewardDefinition::new("crown", "Crown", Tier::Legendary),
        RewardDefinition::new("mine", "Mine", Tier::Bomb),
    ];
    let pass = wheel
        .handle_event(WheelEvent::CatalogReloaded(reloaded), &mut rng)
        .unwrap();
    assert!(pass.is_none());
    assert!(rx.try_recv().is_err(), "reload alone should not notify");
    assert_eq!(wheel.catalog().len(), 5);

    let pass = wheel
        .handle_event(WheelEvent::ZoneChanged { new_zone: 2 }, &mut rng)
        .unwrap()
        .unwrap();
    for (_, slot) in pass.assigned() {
        assert!(["coins", "crate", "relic", "crown", "mine"].contains(&slot.reward.id.as_str()));
    }
    assert_eq!(pass.slots[pass.bomb_slot().unwrap()].as_ref().unwrap().reward.id, "mine");
}

#[test]
fn test_bad_reload_keeps_previous_catalog() {
    let mut notified = 0;
    let mut wheel = Wheel::new(
        standard_catalog(),
        WheelConfig::default(),
        |_: &SlotsChanged| notified += 1,
    );
    let mut rng = create_test_rng();
    let before = wheel.catalog().len();

    let mut broken = standard_rewards();
    broken[0].tier = None;
    let result = wheel.handle_event(WheelEvent::CatalogReloaded(broken), &mut rng);
    assert!(matches!(
        result,
        Err(WheelError::InvalidCatalogEntry { ref id }) if id == "cash"
    ));
    assert_eq!(wheel.catalog().len(), before);

    let result = wheel.handle_event(WheelEvent::ZoneChanged { new_zone: 0 }, &mut rng);
    assert!(matches!(result, Err(WheelError::InvalidZone(0))));
    drop(wheel);

    assert_eq!(notified, 0);
}

#[test]
fn test_wheel_from_json_files() {
    let config = WheelConfig::from_json(
        r#"{
            "safe_zone_interval": 0,
            "super_zone_interval": 0,
            "slices": [{}, {}, {}, {"allowed_tiers": ["Legendary"]}]
        }"#,
    )
    .unwrap();
    let catalog = CatalogFile::from_json(
        r#"{"rewards": [
            {"id": "gold", "name": "Gold", "tier": "Common"},
            {"id": "chest", "name": "Chest", "tier": "Rare"},
            {"id": "crown", "name": "Crown", "tier": "Legendary", "icon": "icons/crown.png"},
            {"id": "bomb", "name": "Bomb", "tier": "Bomb"}
        ]}"#,
    )
    .unwrap();

    let mut wheel = Wheel::from_config(catalog, config, reward_wheel::wheel::NoopListener).unwrap();
    let mut rng = create_test_rng();

    for _ in 0..50 {
        let pass = wheel.refill(30, &mut rng).unwrap();
        assert_eq!(pass.kind, ZoneKind::Normal);
        assert_eq!(pass.count_tier(Tier::Bomb), 1);
        if pass.bomb_slot() != Some(3) {
            let slot = pass.slots[3].as_ref().unwrap();
            assert_eq!(slot.reward.id, "crown");
            assert_eq!(slot.reward.icon, "icons/crown.png");
        }
    }
}
