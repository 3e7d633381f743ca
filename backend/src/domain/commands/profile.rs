//! Commands and results for profile operations.

use crate::domain::models::profile::{ActivityLevel, AgeGroup, Gender, UserProfile};

/// Command to create or replace the user profile
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub name: String,
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub activity_level: ActivityLevel,
    /// Body weight in kilograms, optional
    pub weight_kg: Option<f64>,
    /// Wake-up time in HH:mm 24-hour format
    pub wake_up_time: String,
    /// Sleep time in HH:mm 24-hour format
    pub sleep_time: String,
}

/// Result of a profile update, including the recomputed goal
#[derive(Debug, Clone)]
pub struct UpdateProfileResult {
    pub profile: UserProfile,
    /// Daily goal in milliliters recomputed from the new profile
    pub daily_goal_ml: f64,
}
