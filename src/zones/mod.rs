//! Zone classification and progression.
//!
//! Every few zones the wheel turns bomb-free: Safe zones soften the reward
//! curve, Super zones drop common rewards entirely.

mod classification;
mod progression;

pub use classification::{zone_progress, ZoneKind, ZoneRules};
pub use progression::ZoneProgression;
