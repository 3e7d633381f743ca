//! # YAML Profile Repository
//!
//! Single-document profile storage in `profile.yaml`. There is exactly
//! one profile per installation, so the file holds one serialized
//! [`UserProfile`] and every save replaces it atomically.

use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use super::connection::CsvConnection;
use crate::domain::models::profile::UserProfile;
use crate::storage::traits::ProfileStorage;

/// YAML-based profile repository
#[derive(Clone)]
pub struct ProfileRepository {
    connection: CsvConnection,
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn profile_file_path(&self) -> PathBuf {
        self.connection.profile_file_path()
    }
}

impl ProfileStorage for ProfileRepository {
    fn store_profile(&self, profile: &UserProfile) -> Result<()> {
        let path = self.profile_file_path();
        let temp_path = path.with_extension("yaml.tmp");

        let yaml = serde_yaml::to_string(profile).context("Failed to serialize profile")?;
        std::fs::write(&temp_path, yaml)?;
        std::fs::rename(&temp_path, &path)?;

        debug!("Stored profile for '{}' to {:?}", profile.name, path);
        Ok(())
    }

    fn get_profile(&self) -> Result<Option<UserProfile>> {
        let path = self.profile_file_path();
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)?;
        let profile: UserProfile = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse profile file {:?}", path))?;
        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::profile::{ActivityLevel, AgeGroup, Gender};
    use tempfile::TempDir;

    fn setup_test_repo() -> (ProfileRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = CsvConnection::new(temp_dir.path()).expect("Failed to create connection");
        (ProfileRepository::new(connection), temp_dir)
    }

    fn test_profile() -> UserProfile {
        UserProfile {
            name: "Test User".to_string(),
            gender: Gender::Male,
            age_group: AgeGroup::From31To50,
            activity_level: ActivityLevel::Moderate,
            weight_kg: Some(82.5),
            wake_up_time: "06:30".to_string(),
            sleep_time: "22:30".to_string(),
            created_at: "2025-03-01T09:00:00Z".to_string(),
            updated_at: "2025-03-01T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_get_profile_when_none_stored() {
        let (repo, _temp_dir) = setup_test_repo();
        assert_eq!(repo.get_profile().unwrap(), None);
    }

    #[test]
    fn test_store_and_get_profile() {
        let (repo, _temp_dir) = setup_test_repo();
        let profile = test_profile();

        repo.store_profile(&profile).unwrap();
        assert_eq!(repo.get_profile().unwrap(), Some(profile));
    }

    #[test]
    fn test_store_replaces_existing_profile() {
        let (repo, _temp_dir) = setup_test_repo();
        repo.store_profile(&test_profile()).unwrap();

        let mut updated = test_profile();
        updated.weight_kg = None;
        updated.wake_up_time = "05:45".to_string();
        repo.store_profile(&updated).unwrap();

        let loaded = repo.get_profile().unwrap().unwrap();
        assert_eq!(loaded.weight_kg, None);
        assert_eq!(loaded.wake_up_time, "05:45");
    }
}
