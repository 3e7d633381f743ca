use serde::{Deserialize, Serialize};
use std::fmt;

/// Water entry ID in format: "water::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub id: String,
    /// Logical day this entry counts toward (yyyy-MM-dd, wake-up anchored)
    pub user_day: String,
    /// Amount of water drunk in milliliters
    pub amount_ml: f64,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub timestamp: String,
}

/// Gender category used for the baseline daily intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

/// Age bracket used for the age adjustment factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    /// 18-30 years
    From18To30,
    /// 31-50 years
    From31To50,
    /// 51-60 years
    From51To60,
    /// Over 60 years
    Over60,
}

/// Self-reported activity level, mapped to an intake multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// User profile as exposed to frontends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub activity_level: ActivityLevel,
    /// Body weight in kilograms, if the user chose to provide it
    pub weight_kg: Option<f64>,
    /// Wake-up time in HH:mm 24-hour format
    pub wake_up_time: String,
    /// Sleep time in HH:mm 24-hour format
    pub sleep_time: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Total intake for a single user day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// User day (yyyy-MM-dd)
    pub user_day: String,
    /// Total milliliters logged for that user day
    pub total_ml: f64,
}

impl DailyTotal {
    /// Parse the user day into a real date for display formatting
    pub fn date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.user_day, "%Y-%m-%d").ok()
    }
}

/// Per-day intake totals, most recent user day first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHistoryResponse {
    pub days: Vec<DailyTotal>,
}

/// Current-day progress toward the daily goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    /// User day the progress refers to (yyyy-MM-dd)
    pub user_day: String,
    pub consumed_ml: f64,
    pub goal_ml: f64,
    /// Whether intake matches expected pace given elapsed awake time
    pub on_track: bool,
}

/// Reminder schedule for one user day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPlan {
    /// Minutes between consecutive reminders
    pub interval_minutes: i64,
    /// Reminder times within waking hours (HH:mm), in firing order
    pub times: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_entry_serialization_round_trip() {
        let entry = WaterEntry {
            id: "water::abc".to_string(),
            user_day: "2025-03-01".to_string(),
            amount_ml: 250.0,
            timestamp: "2025-03-01T09:30:00-04:00".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: WaterEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_daily_total_date() {
        let total = DailyTotal {
            user_day: "2025-03-01".to_string(),
            total_ml: 1200.0,
        };
        assert_eq!(
            total.date(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
        );

        let bad = DailyTotal {
            user_day: "not-a-date".to_string(),
            total_ml: 0.0,
        };
        assert_eq!(bad.date(), None);
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Other.to_string(), "other");
    }

    #[test]
    fn test_profile_optional_weight() {
        let profile = UserProfile {
            name: "Test User".to_string(),
            gender: Gender::Female,
            age_group: AgeGroup::From18To30,
            activity_level: ActivityLevel::Sedentary,
            weight_kg: None,
            wake_up_time: "07:00".to_string(),
            sleep_time: "23:00".to_string(),
            created_at: "2025-03-01T09:30:00Z".to_string(),
            updated_at: "2025-03-01T09:30:00Z".to_string(),
        };

        let json = serde_json::to_string(&profile).unwrap();
        let parsed: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.weight_kg, None);
        assert_eq!(parsed, profile);
    }
}
