//! # YAML Settings Repository
//!
//! Single-document settings storage in `settings.yaml`. A missing file
//! yields default settings rather than an error.

use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use super::connection::CsvConnection;
use crate::domain::models::settings::Settings;
use crate::storage::traits::SettingsStorage;

/// YAML-based settings repository
#[derive(Clone)]
pub struct SettingsRepository {
    connection: CsvConnection,
}

impl SettingsRepository {
    /// Create a new settings repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn settings_file_path(&self) -> PathBuf {
        self.connection.settings_file_path()
    }
}

impl SettingsStorage for SettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        let path = self.settings_file_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let file = File::open(&path)?;
        let settings: Settings = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        Ok(settings)
    }

    fn store_settings(&self, settings: &Settings) -> Result<()> {
        let path = self.settings_file_path();
        let temp_path = path.with_extension("yaml.tmp");

        let yaml = serde_yaml::to_string(settings).context("Failed to serialize settings")?;
        std::fs::write(&temp_path, yaml)?;
        std::fs::rename(&temp_path, &path)?;

        debug!("Stored settings to {:?}", path);
        Ok(())
    }
}
