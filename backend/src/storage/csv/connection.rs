//! File-backed storage connection.
//!
//! A [`CsvConnection`] is a handle to the data directory. It is cheap
//! to clone and acts as the factory for the concrete repositories.

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use super::{ProfileRepository, SettingsRepository, WaterEntryRepository};
use crate::storage::traits::Connection;

/// Connection to the file-backed storage rooted at a data directory
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new connection, creating the data directory if needed
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_directory).with_context(|| {
            format!("Failed to create data directory {:?}", base_directory)
        })?;
        info!("Opened file storage at {:?}", base_directory);
        Ok(Self { base_directory })
    }

    /// Path of the water entries CSV file
    pub fn water_entries_file_path(&self) -> PathBuf {
        self.base_directory.join("water_entries.csv")
    }

    /// Path of the profile YAML file
    pub fn profile_file_path(&self) -> PathBuf {
        self.base_directory.join("profile.yaml")
    }

    /// Path of the settings YAML file
    pub fn settings_file_path(&self) -> PathBuf {
        self.base_directory.join("settings.yaml")
    }
}

impl Connection for CsvConnection {
    type WaterEntryRepository = WaterEntryRepository;
    type ProfileRepository = ProfileRepository;
    type SettingsRepository = SettingsRepository;

    fn create_water_entry_repository(&self) -> WaterEntryRepository {
        WaterEntryRepository::new(self.clone())
    }

    fn create_profile_repository(&self) -> ProfileRepository {
        ProfileRepository::new(self.clone())
    }

    fn create_settings_repository(&self) -> SettingsRepository {
        SettingsRepository::new(self.clone())
    }
}
