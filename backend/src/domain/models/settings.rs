//! Domain model for small app-level settings the services persist
//! between runs: the computed daily goal and the rollover bookkeeping
//! timestamp.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Stored daily goal in milliliters, recomputed on profile changes
    pub daily_goal_ml: Option<f64>,
    /// Epoch millis of the last user-day rollover check
    pub last_rollover_check_millis: Option<i64>,
}
