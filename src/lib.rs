//! Reward Wheel - zone-scaled reward distribution for a spin-the-wheel game.
//!
//! Each refill draws a tier, a reward and a quantity for every slot, then
//! places exactly one bomb unless the zone is Safe or Super.
//!
//! ```text
//! WheelEvent ──> Wheel ──> SlotAssigner ──> AssignmentPass ──> SlotsListener
//!                              │
//!                              ├── RewardCatalogIndex (rewards by tier)
//!                              ├── weights / quantity (zone curves)
//!                              └── ZoneRules (Normal / Safe / Super)
//! ```

pub mod config;
pub mod core;
pub mod rewards;
pub mod simulator;
pub mod wheel;
pub mod zones;

pub use crate::core::error::{AssignmentWarning, WheelError, WheelResult};
pub use config::{CatalogFile, WheelConfig};
pub use rewards::{RewardCatalogIndex, RewardDefinition, Tier};
pub use wheel::{AssignmentPass, SlotAssigner, SlotAssignment, SliceConstraint, Wheel, WheelEvent};
pub use zones::{ZoneKind, ZoneProgression, ZoneRules};
