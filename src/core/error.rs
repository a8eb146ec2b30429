//! Error and warning types for the reward engine.

use std::fmt;

use crate::rewards::Tier;

/// Errors that abort a catalog build or an assignment pass.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    #[error("Reward definition '{id}' has no tier set")]
    InvalidCatalogEntry { id: String },

    #[error("Total tier weight {total} is not positive")]
    InvalidWeights { total: f64 },

    #[error("Unhandled reward tier: {0}")]
    UnhandledTier(String),

    #[error("Invalid zone {0}: zones start at 1")]
    InvalidZone(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type WheelResult<T> = Result<T, WheelError>;

/// Non-fatal conditions collected during an assignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentWarning {
    /// The drawn tier has no catalog members; the slot was left empty.
    EmptyCatalogPartition { slot: usize, tier: Tier },
    /// The zone needs a bomb but the catalog has no bomb definitions.
    MissingBomb,
    /// The pass was requested for a wheel with zero slots.
    NoSlots,
}

impl fmt::Display for AssignmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentWarning::EmptyCatalogPartition { slot, tier } => {
                write!(f, "No {} reward in catalog for slot {}", tier.name(), slot)
            }
            AssignmentWarning::MissingBomb => write!(f, "No bomb reward in catalog"),
            AssignmentWarning::NoSlots => write!(f, "Wheel has no slots to fill"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WheelError::InvalidCatalogEntry {
            id: "gold_pile".to_string(),
        };
        assert_eq!(err.to_string(), "Reward definition 'gold_pile' has no tier set");

        let err = WheelError::InvalidZone(0);
        assert!(err.to_string().contains("zones start at 1"));

        let err = WheelError::UnhandledTier("Mythic".to_string());
        assert_eq!(err.to_string(), "Unhandled reward tier: Mythic");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<Vec<u32>, _> = serde_json::from_str("not json");
        let err: WheelError = parse.unwrap_err().into();
        assert!(matches!(err, WheelError::Json(_)));
    }

    #[test]
    fn test_warning_display() {
        let warning = AssignmentWarning::EmptyCatalogPartition {
            slot: 3,
            tier: Tier::Legendary,
        };
        assert_eq!(warning.to_string(), "No Legendary reward in catalog for slot 3");
        assert_eq!(AssignmentWarning::MissingBomb.to_string(), "No bomb reward in catalog");
    }
}
