//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against
//! different storage backends without modification. The domain never
//! touches files or databases directly; services receive repositories
//! through the [`Connection`] factory trait.

use anyhow::Result;

use crate::domain::models::profile::UserProfile;
use crate::domain::models::settings::Settings;
use crate::domain::models::water_entry::WaterEntry;

/// Trait defining the interface for water entry storage operations.
///
/// All operations are synchronous; this is a single-user, single-device
/// app with no concurrent writers.
pub trait WaterEntryStorage: Send + Sync {
    /// Store a new water entry
    fn store_entry(&self, entry: &WaterEntry) -> Result<()>;

    /// Retrieve a specific entry by ID
    fn get_entry(&self, entry_id: &str) -> Result<Option<WaterEntry>>;

    /// List all entries for one user day, ordered by timestamp ascending
    fn list_entries_for_day(&self, user_day: &str) -> Result<Vec<WaterEntry>>;

    /// List all entries whose user day falls in [start_day, end_day]
    /// inclusive, ordered by timestamp ascending
    fn list_entries_between(&self, start_day: &str, end_day: &str) -> Result<Vec<WaterEntry>>;

    /// Delete a single entry.
    /// Returns true if the entry was found and deleted, false otherwise
    fn delete_entry(&self, entry_id: &str) -> Result<bool>;
}

/// Trait defining the interface for profile storage operations.
/// There is exactly one profile per installation.
pub trait ProfileStorage: Send + Sync {
    /// Store (create or replace) the user profile
    fn store_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Retrieve the user profile, if one has been saved
    fn get_profile(&self) -> Result<Option<UserProfile>>;
}

/// Trait defining the interface for settings storage operations.
pub trait SettingsStorage: Send + Sync {
    /// Retrieve the stored settings, defaults if none were saved yet
    fn get_settings(&self) -> Result<Settings>;

    /// Store (create or replace) the settings
    fn store_settings(&self, settings: &Settings) -> Result<()>;
}

/// Trait defining the interface for storage connections.
///
/// Abstracts the concrete backend (CSV/YAML files, a database, an
/// in-memory store for tests) behind factory methods so services can
/// be constructed against any of them.
pub trait Connection: Send + Sync + Clone {
    /// The type of WaterEntryStorage this connection creates
    type WaterEntryRepository: WaterEntryStorage + Clone;

    /// The type of ProfileStorage this connection creates
    type ProfileRepository: ProfileStorage + Clone;

    /// The type of SettingsStorage this connection creates
    type SettingsRepository: SettingsStorage + Clone;

    /// Create a new water entry repository for this connection
    fn create_water_entry_repository(&self) -> Self::WaterEntryRepository;

    /// Create a new profile repository for this connection
    fn create_profile_repository(&self) -> Self::ProfileRepository;

    /// Create a new settings repository for this connection
    fn create_settings_repository(&self) -> Self::SettingsRepository;
}
