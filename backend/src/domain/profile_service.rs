//! Profile management service for the hydration tracker.
//!
//! Owns the single user profile and the stored daily goal derived from
//! it. Every profile save recomputes the goal through the water
//! calculator so the stored value never drifts from the demographics.

use anyhow::Result;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::domain::commands::profile::{UpdateProfileCommand, UpdateProfileResult};
use crate::domain::models::profile::{ActivityLevel, AgeGroup, Gender, UserProfile};
use crate::domain::water_calculator;
use crate::storage::{Connection, ProfileStorage, SettingsStorage};

/// Maps domain profile types to their shared DTO counterparts
struct ProfileMapper;

impl ProfileMapper {
    pub fn to_dto(profile: UserProfile) -> shared::UserProfile {
        shared::UserProfile {
            name: profile.name,
            gender: match profile.gender {
                Gender::Male => shared::Gender::Male,
                Gender::Female => shared::Gender::Female,
                Gender::Other => shared::Gender::Other,
            },
            age_group: match profile.age_group {
                AgeGroup::From18To30 => shared::AgeGroup::From18To30,
                AgeGroup::From31To50 => shared::AgeGroup::From31To50,
                AgeGroup::From51To60 => shared::AgeGroup::From51To60,
                AgeGroup::Over60 => shared::AgeGroup::Over60,
            },
            activity_level: match profile.activity_level {
                ActivityLevel::Sedentary => shared::ActivityLevel::Sedentary,
                ActivityLevel::Light => shared::ActivityLevel::Light,
                ActivityLevel::Moderate => shared::ActivityLevel::Moderate,
                ActivityLevel::Active => shared::ActivityLevel::Active,
                ActivityLevel::VeryActive => shared::ActivityLevel::VeryActive,
            },
            weight_kg: profile.weight_kg,
            wake_up_time: profile.wake_up_time,
            sleep_time: profile.sleep_time,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Service for managing the user profile and the derived daily goal
#[derive(Clone)]
pub struct ProfileService<C: Connection> {
    profile_repository: C::ProfileRepository,
    settings_repository: C::SettingsRepository,
}

impl<C: Connection> ProfileService<C> {
    /// Create a new ProfileService
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            profile_repository: connection.create_profile_repository(),
            settings_repository: connection.create_settings_repository(),
        }
    }

    /// Create or replace the user profile and recompute the daily goal
    pub fn update_profile(&self, command: UpdateProfileCommand) -> Result<UpdateProfileResult> {
        info!("Updating profile for '{}'", command.name);

        let now = Utc::now().to_rfc3339();
        // Keep the original creation timestamp across updates
        let created_at = self
            .profile_repository
            .get_profile()?
            .map(|existing| existing.created_at)
            .unwrap_or_else(|| now.clone());

        let profile = UserProfile {
            name: command.name,
            gender: command.gender,
            age_group: command.age_group,
            activity_level: command.activity_level,
            weight_kg: command.weight_kg,
            wake_up_time: command.wake_up_time,
            sleep_time: command.sleep_time,
            created_at,
            updated_at: now,
        };

        profile
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid profile: {}", e))?;

        let daily_goal_ml = water_calculator::daily_goal(
            profile.gender,
            profile.age_group,
            profile.activity_level,
            profile.weight_kg,
        );

        self.profile_repository.store_profile(&profile)?;

        let mut settings = self.settings_repository.get_settings()?;
        settings.daily_goal_ml = Some(daily_goal_ml);
        self.settings_repository.store_settings(&settings)?;

        info!("Stored profile; daily goal is now {:.0} ml", daily_goal_ml);
        Ok(UpdateProfileResult {
            profile,
            daily_goal_ml,
        })
    }

    /// Get the stored user profile, if any
    pub fn get_profile(&self) -> Result<Option<UserProfile>> {
        self.profile_repository.get_profile()
    }

    /// Get the stored user profile as a DTO for frontends
    pub fn get_profile_dto(&self) -> Result<Option<shared::UserProfile>> {
        Ok(self.profile_repository.get_profile()?.map(ProfileMapper::to_dto))
    }

    /// Get the daily goal in milliliters.
    ///
    /// Returns the stored goal when present; otherwise recomputes it
    /// from the profile and stores it. Fails only when no profile has
    /// been configured yet.
    pub fn daily_goal(&self) -> Result<f64> {
        let mut settings = self.settings_repository.get_settings()?;
        if let Some(goal) = settings.daily_goal_ml {
            return Ok(goal);
        }

        let profile = self
            .profile_repository
            .get_profile()?
            .ok_or_else(|| anyhow::anyhow!("No profile configured, cannot compute daily goal"))?;

        let goal = water_calculator::daily_goal(
            profile.gender,
            profile.age_group,
            profile.activity_level,
            profile.weight_kg,
        );

        settings.daily_goal_ml = Some(goal);
        self.settings_repository.store_settings(&settings)?;

        info!("Recomputed missing daily goal: {:.0} ml", goal);
        Ok(goal)
    }
}
