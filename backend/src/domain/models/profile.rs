//! Domain model for the user's demographic profile.
//!
//! The demographic categories map to the fixed coefficients used by
//! the daily goal computation. Each mapping is a plain
//! variant-to-constant lookup, no dynamic dispatch.

use serde::{Deserialize, Serialize};

/// Gender category determining the baseline daily intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Baseline daily intake in milliliters.
    ///
    /// Male and Female baselines follow the common adequate-intake
    /// figures; Other is the arithmetic mean of the two.
    pub fn base_intake_ml(&self) -> f64 {
        match self {
            Gender::Male => 3700.0,
            Gender::Female => 2700.0,
            Gender::Other => (3700.0 + 2700.0) / 2.0,
        }
    }
}

/// Age bracket with its goal adjustment factor
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

impl AgeGroup {
    /// Age adjustment factor applied to the gender baseline
    pub fn factor(&self) -> f64 {
        match self {
            AgeGroup::From18To30 => 1.00,
            AgeGroup::From31To50 => 0.98,
            AgeGroup::From51To60 => 0.95,
            AgeGroup::Over60 => 0.90,
        }
    }
}

/// Self-reported activity level with its intake multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Activity multiplier applied to the age-adjusted baseline.
    /// Always >= 1.0: activity never lowers the goal.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::Light => 1.05,
            ActivityLevel::Moderate => 1.1,
            ActivityLevel::Active => 1.2,
            ActivityLevel::VeryActive => 1.3,
        }
    }
}

/// Domain model representing the user's profile.
/// Immutable once constructed; updates replace the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
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
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// RFC 3339 last-update timestamp
    pub updated_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name is too long (max 100 characters)")]
    NameTooLong,
    #[error("Weight must be positive")]
    NonPositiveWeight,
}

impl UserProfile {
    /// Validate the profile against business constraints
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(ProfileValidationError::NameTooLong);
        }
        if let Some(weight) = self.weight_kg {
            if weight <= 0.0 {
                return Err(ProfileValidationError::NonPositiveWeight);
            }
        }
        Ok(())
    }
}
