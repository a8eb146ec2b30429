//! Engine-wide constants and error types.

pub mod constants;
pub mod error;

pub use constants::*;
pub use error::*;
