//! Domain model for a single logged water intake event.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest amount accepted for a single entry, in milliliters
pub const MAX_SINGLE_ENTRY_ML: f64 = 5000.0;

/// Domain model representing one logged drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub id: String,
    /// User day this entry counts toward (yyyy-MM-dd, wake-up anchored)
    pub user_day: String,
    /// Amount of water drunk in milliliters
    pub amount_ml: f64,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub timestamp: String,
}

impl WaterEntry {
    /// Generate a unique ID for a water entry
    pub fn generate_id() -> String {
        format!("water::{}", Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WaterEntryValidationError {
    #[error("Amount must be positive")]
    NonPositiveAmount,
    #[error("Amount exceeds {MAX_SINGLE_ENTRY_ML} ml for a single entry")]
    AmountTooLarge,
}

/// Validate an intake amount before an entry is created
pub fn validate_amount(amount_ml: f64) -> Result<(), WaterEntryValidationError> {
    if amount_ml <= 0.0 {
        return Err(WaterEntryValidationError::NonPositiveAmount);
    }
    if amount_ml > MAX_SINGLE_ENTRY_ML {
        return Err(WaterEntryValidationError::AmountTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_has_prefix_and_is_unique() {
        let first = WaterEntry::generate_id();
        let second = WaterEntry::generate_id();
        assert!(first.starts_with("water::"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(250.0).is_ok());
        assert!(matches!(
            validate_amount(0.0),
            Err(WaterEntryValidationError::NonPositiveAmount)
        ));
        assert!(matches!(
            validate_amount(-100.0),
            Err(WaterEntryValidationError::NonPositiveAmount)
        ));
        assert!(matches!(
            validate_amount(6000.0),
            Err(WaterEntryValidationError::AmountTooLarge)
        ));
    }
}
