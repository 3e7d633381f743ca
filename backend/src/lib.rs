//! # Hydration Tracker Backend
//!
//! Domain and storage layer for a single-user hydration tracker:
//! logging water intake against wake-up-anchored "user days", the
//! multi-factor daily goal computation, reminder planning and
//! progress tracking.
//!
//! Frontends construct a [`Backend`] and call its services; nothing in
//! this crate renders UI or delivers notifications.

use anyhow::Result;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub profile_service: domain::ProfileService<CsvConnection>,
    pub intake_service: domain::IntakeService<CsvConnection>,
    pub reminder_service: domain::ReminderService<CsvConnection>,
}

impl Backend {
    /// Create a new backend instance rooted at the given data directory
    pub fn new(data_directory: impl AsRef<Path>) -> Result<Self> {
        let connection = Arc::new(CsvConnection::new(data_directory)?);

        let profile_service = domain::ProfileService::new(connection.clone());
        let intake_service = domain::IntakeService::new(connection);
        let reminder_service =
            domain::ReminderService::new(profile_service.clone(), intake_service.clone());

        Ok(Backend {
            profile_service,
            intake_service,
            reminder_service,
        })
    }

    /// Create a backend using the platform-conventional data directory
    pub fn with_default_data_directory() -> Result<Self> {
        Self::new(default_data_directory()?)
    }
}

/// Platform-conventional data directory for the app
pub fn default_data_directory() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hydration-tracker", "hydration-tracker")
        .ok_or_else(|| anyhow::anyhow!("Could not determine a home directory for app data"))?;
    Ok(project_dirs.data_dir().to_path_buf())
}
