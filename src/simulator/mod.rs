//! Reward wheel simulator for Monte Carlo analysis.
//!
//! Runs thousands of wheel refills per zone to analyze:
//! - Tier distribution across zone progression
//! - Average reward quantity per tier
//! - Bomb placement rate in Normal, Safe and Super zones
//! - Catalog gaps (tiers that cannot be served)

mod config;
mod report;
mod runner;
mod stats;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
pub use stats::ZoneStats;
