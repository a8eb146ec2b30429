//! Reward wheel engine: weights, quantities, slot assignment and the
//! controller that drives it from inbound events.

pub mod assignment;
pub mod constraints;
pub mod controller;
pub mod events;
pub mod quantity;
pub mod weights;

pub use assignment::*;
pub use constraints::*;
pub use controller::*;
pub use events::*;
pub use quantity::*;
pub use weights::*;
