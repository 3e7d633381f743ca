//! Reminder planning and progress service.
//!
//! Computes the reminder schedule for a user day (notification
//! delivery itself is a platform concern and lives outside this crate)
//! and the goal-progress view with the on-track judgment.

use anyhow::Result;
use chrono::Duration;
use log::debug;

use crate::domain::intake_service::IntakeService;
use crate::domain::profile_service::ProfileService;
use crate::domain::user_day;
use crate::domain::water_calculator;
use crate::storage::Connection;

/// Service producing reminder schedules and progress reports
#[derive(Clone)]
pub struct ReminderService<C: Connection> {
    profile_service: ProfileService<C>,
    intake_service: IntakeService<C>,
}

impl<C: Connection> ReminderService<C> {
    /// Create a new ReminderService
    pub fn new(profile_service: ProfileService<C>, intake_service: IntakeService<C>) -> Self {
        Self {
            profile_service,
            intake_service,
        }
    }

    /// Compute the reminder schedule for the configured profile
    pub fn reminder_plan(&self) -> Result<shared::ReminderPlan> {
        let profile = self
            .profile_service
            .get_profile()?
            .ok_or_else(|| anyhow::anyhow!("No profile configured, cannot plan reminders"))?;
        let goal_ml = self.profile_service.daily_goal()?;

        let interval_minutes = water_calculator::reminder_interval(
            &profile.wake_up_time,
            &profile.sleep_time,
            goal_ml,
        );
        let times = reminder_times(&profile.wake_up_time, &profile.sleep_time, interval_minutes);

        debug!(
            "Planned {} reminders every {} minutes for a {:.0} ml goal",
            times.len(),
            interval_minutes,
            goal_ml
        );

        Ok(shared::ReminderPlan {
            interval_minutes,
            times,
        })
    }

    /// Current-day progress toward the goal with the on-track judgment
    pub fn progress(&self) -> Result<shared::ProgressResponse> {
        let profile = self
            .profile_service
            .get_profile()?
            .ok_or_else(|| anyhow::anyhow!("No profile configured, cannot report progress"))?;
        let goal_ml = self.profile_service.daily_goal()?;

        let today = self.intake_service.today()?;
        let on_track = water_calculator::is_on_track(
            today.total_ml,
            goal_ml,
            &profile.wake_up_time,
            &profile.sleep_time,
        );

        Ok(shared::ProgressResponse {
            user_day: today.user_day,
            consumed_ml: today.total_ml,
            goal_ml,
            on_track,
        })
    }
}

/// Concrete reminder times: one at wake-up, then every interval until
/// the awake window ends. Times past midnight wrap naturally.
fn reminder_times(wake_up_time: &str, sleep_time: &str, interval_minutes: i64) -> Vec<String> {
    if interval_minutes <= 0 {
        return Vec::new();
    }

    let wake = user_day::parse_wake_up_time(wake_up_time);
    let awake_minutes = (water_calculator::awake_hours(wake_up_time, sleep_time) * 60.0).round() as i64;

    let mut times = Vec::new();
    let mut offset = 0;
    while offset < awake_minutes {
        let time = wake + Duration::minutes(offset);
        times.push(time.format("%H:%M").to_string());
        offset += interval_minutes;
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::profile::UpdateProfileCommand;
    use crate::domain::commands::water::LogWaterCommand;
    use crate::domain::models::profile::{ActivityLevel, AgeGroup, Gender};
    use crate::storage::csv::CsvConnection;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn setup_test_service() -> (
        ReminderService<CsvConnection>,
        ProfileService<CsvConnection>,
        IntakeService<CsvConnection>,
        TempDir,
    ) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            Arc::new(CsvConnection::new(temp_dir.path()).expect("Failed to create connection"));
        let profile_service = ProfileService::new(connection.clone());
        let intake_service = IntakeService::new(connection);
        let reminder_service = ReminderService::new(profile_service.clone(), intake_service.clone());
        (reminder_service, profile_service, intake_service, temp_dir)
    }

    fn standard_profile() -> UpdateProfileCommand {
        UpdateProfileCommand {
            name: "Test User".to_string(),
            gender: Gender::Female,
            age_group: AgeGroup::From18To30,
            activity_level: ActivityLevel::Sedentary,
            weight_kg: None,
            wake_up_time: "07:00".to_string(),
            sleep_time: "23:00".to_string(),
        }
    }

    #[test]
    fn test_reminder_plan_standard_day() {
        let (service, profile_service, _intake, _temp_dir) = setup_test_service();
        profile_service.update_profile(standard_profile()).unwrap();

        // Goal 2700 over 16 awake hours: 10 reminders, 96 minutes apart
        let plan = service.reminder_plan().unwrap();
        assert_eq!(plan.interval_minutes, 96);
        assert_eq!(plan.times.len(), 10);
        assert_eq!(plan.times[0], "07:00");
        assert_eq!(plan.times[1], "08:36");
        assert_eq!(plan.times[9], "21:24");
    }

    #[test]
    fn test_reminder_plan_wraps_past_midnight() {
        let (service, profile_service, _intake, _temp_dir) = setup_test_service();
        let mut command = standard_profile();
        command.sleep_time = "01:00".to_string();
        profile_service.update_profile(command).unwrap();

        // 18 awake hours, goal 2700: floor(1080 / 10) = 108 minutes
        let plan = service.reminder_plan().unwrap();
        assert_eq!(plan.interval_minutes, 108);
        assert_eq!(plan.times.len(), 10);
        // The last reminder lands after midnight
        assert_eq!(plan.times[9], "23:12");
    }

    #[test]
    fn test_reminder_plan_requires_profile() {
        let (service, _profile, _intake, _temp_dir) = setup_test_service();
        assert!(service.reminder_plan().is_err());
    }

    #[test]
    fn test_progress_on_track_when_goal_met() {
        let (service, profile_service, intake_service, _temp_dir) = setup_test_service();
        profile_service.update_profile(standard_profile()).unwrap();

        // Consuming the full goal is on track at any time of day
        intake_service
            .log_water(LogWaterCommand {
                amount_ml: 2700.0,
                timestamp_millis: None,
            })
            .unwrap();

        let progress = service.progress().unwrap();
        assert_eq!(progress.goal_ml, 2700.0);
        assert_eq!(progress.consumed_ml, 2700.0);
        assert!(progress.on_track);
    }

    #[test]
    fn test_reminder_times_empty_for_degenerate_interval() {
        assert!(reminder_times("07:00", "23:00", 0).is_empty());
    }
}
