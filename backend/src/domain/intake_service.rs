//! Water intake service for the hydration tracker.
//!
//! Handles logging drink events, per-user-day totals and history, and
//! the user-day rollover check the persistence layer uses to reset
//! daily aggregates. Day assignment always goes through the user-day
//! calculator so entries logged before the wake-up time count toward
//! the previous day.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::commands::water::{DailyHistoryQuery, LogWaterCommand, LogWaterResult};
use crate::domain::models::water_entry::{self, WaterEntry};
use crate::domain::user_day::{self, DEFAULT_WAKE_UP_TIME, USER_DAY_FORMAT};
use crate::storage::{Connection, ProfileStorage, SettingsStorage, WaterEntryStorage};

/// Service for logging and querying water intake
#[derive(Clone)]
pub struct IntakeService<C: Connection> {
    water_entry_repository: C::WaterEntryRepository,
    profile_repository: C::ProfileRepository,
    settings_repository: C::SettingsRepository,
}

impl<C: Connection> IntakeService<C> {
    /// Create a new IntakeService
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            water_entry_repository: connection.create_water_entry_repository(),
            profile_repository: connection.create_profile_repository(),
            settings_repository: connection.create_settings_repository(),
        }
    }

    /// The configured wake-up time, or the default when no profile exists
    pub fn wake_up_time(&self) -> Result<String> {
        Ok(self
            .profile_repository
            .get_profile()?
            .map(|profile| profile.wake_up_time)
            .unwrap_or_else(|| DEFAULT_WAKE_UP_TIME.to_string()))
    }

    /// Log a water intake event, assigning it to the correct user day
    pub fn log_water(&self, command: LogWaterCommand) -> Result<LogWaterResult> {
        water_entry::validate_amount(command.amount_ml)
            .map_err(|e| anyhow::anyhow!("Invalid water amount: {}", e))?;

        let wake_up_time = self.wake_up_time()?;
        let timestamp_millis = command
            .timestamp_millis
            .unwrap_or_else(|| Local::now().timestamp_millis());

        let entry = WaterEntry {
            id: WaterEntry::generate_id(),
            user_day: user_day::user_day_for_timestamp(timestamp_millis, &wake_up_time),
            amount_ml: command.amount_ml,
            timestamp: user_day::datetime_from_millis(timestamp_millis).to_rfc3339(),
        };

        self.water_entry_repository.store_entry(&entry)?;
        info!(
            "Logged {} ml for user day {} (entry {})",
            entry.amount_ml, entry.user_day, entry.id
        );

        Ok(LogWaterResult { entry })
    }

    /// Delete a logged entry.
    /// Returns true if the entry existed and was deleted
    pub fn delete_entry(&self, entry_id: &str) -> Result<bool> {
        let deleted = self.water_entry_repository.delete_entry(entry_id)?;
        if deleted {
            info!("Deleted water entry {}", entry_id);
        }
        Ok(deleted)
    }

    /// List all entries for one user day, oldest first
    pub fn entries_for_day(&self, user_day: &str) -> Result<Vec<WaterEntry>> {
        self.water_entry_repository.list_entries_for_day(user_day)
    }

    /// Total milliliters logged for one user day
    pub fn daily_total(&self, user_day: &str) -> Result<f64> {
        let total = self
            .water_entry_repository
            .list_entries_for_day(user_day)?
            .iter()
            .map(|entry| entry.amount_ml)
            .sum();
        Ok(total)
    }

    /// Total intake for the current user day
    pub fn today(&self) -> Result<shared::DailyTotal> {
        let wake_up_time = self.wake_up_time()?;
        let user_day = user_day::current_user_day(&wake_up_time);
        let total_ml = self.daily_total(&user_day)?;
        Ok(shared::DailyTotal { user_day, total_ml })
    }

    /// Per-user-day totals for the last N user days, most recent first
    pub fn daily_history(&self, query: DailyHistoryQuery) -> Result<shared::DailyHistoryResponse> {
        let wake_up_time = self.wake_up_time()?;
        let anchor = user_day::current_user_day(&wake_up_time);
        self.daily_history_ending(&anchor, query.days)
    }

    /// History with an explicit final user day; the public entry point
    /// anchors it to the current one
    fn daily_history_ending(
        &self,
        anchor_day: &str,
        days: u32,
    ) -> Result<shared::DailyHistoryResponse> {
        let days = days.max(1);
        let anchor = NaiveDate::parse_from_str(anchor_day, USER_DAY_FORMAT)
            .map_err(|e| anyhow::anyhow!("Invalid user day '{}': {}", anchor_day, e))?;
        let start = anchor - Duration::days(i64::from(days) - 1);

        let start_day = start.format(USER_DAY_FORMAT).to_string();
        let entries = self
            .water_entry_repository
            .list_entries_between(&start_day, anchor_day)?;

        let mut totals_by_day: HashMap<String, f64> = HashMap::new();
        for entry in &entries {
            *totals_by_day.entry(entry.user_day.clone()).or_insert(0.0) += entry.amount_ml;
        }

        debug!(
            "History {} .. {}: {} entries over {} days",
            start_day,
            anchor_day,
            entries.len(),
            days
        );

        // Walk backwards from the anchor so day zero comes first;
        // days without entries still appear, with a zero total
        let mut day_totals = Vec::with_capacity(days as usize);
        for offset in 0..i64::from(days) {
            let date = anchor - Duration::days(offset);
            let user_day = date.format(USER_DAY_FORMAT).to_string();
            let total_ml = totals_by_day.get(&user_day).copied().unwrap_or(0.0);
            day_totals.push(shared::DailyTotal { user_day, total_ml });
        }

        Ok(shared::DailyHistoryResponse { days: day_totals })
    }

    /// Check whether a new user day has started since the last check,
    /// and record this check as the new reference point.
    ///
    /// Callers use the result to roll over daily aggregates.
    pub fn check_rollover(&self) -> Result<bool> {
        let wake_up_time = self.wake_up_time()?;
        let mut settings = self.settings_repository.get_settings()?;

        let started = match settings.last_rollover_check_millis {
            Some(last_check) => user_day::has_new_user_day_started(last_check, &wake_up_time),
            // First check ever: nothing to roll over yet
            None => false,
        };

        settings.last_rollover_check_millis = Some(Local::now().timestamp_millis());
        self.settings_repository.store_settings(&settings)?;

        if started {
            info!("New user day started since last check");
        }
        Ok(started)
    }
}
