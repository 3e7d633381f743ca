//! Commands and results for water intake operations.

use crate::domain::models::water_entry::WaterEntry;

/// Command to log a water intake event
#[derive(Debug, Clone)]
pub struct LogWaterCommand {
    /// Amount of water drunk in milliliters
    pub amount_ml: f64,
    /// Optional instant override in epoch millis - uses the current
    /// time when not provided
    pub timestamp_millis: Option<i64>,
}

/// Result of logging a water intake event
#[derive(Debug, Clone)]
pub struct LogWaterResult {
    pub entry: WaterEntry,
}

/// Query for per-user-day intake totals
#[derive(Debug, Clone)]
pub struct DailyHistoryQuery {
    /// Number of user days to include, ending with the current one
    pub days: u32,
}
