//! # File Storage Module
//!
//! File-based storage implementation for the hydration tracker. Row
//! data (water entries) lives in a CSV file; single-document data
//! (profile, settings) lives in YAML files.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── profile.yaml
//! ├── settings.yaml
//! └── water_entries.csv
//! ```
//!
//! ## Features
//!
//! - Append-oriented CSV writes for new entries
//! - Atomic file rewrites with temp files for deletes and YAML updates
//! - Unparseable rows are skipped with a warning, never propagated

pub mod connection;
pub mod profile_repository;
pub mod settings_repository;
pub mod water_entry_repository;

pub use connection::CsvConnection;
pub use profile_repository::ProfileRepository;
pub use settings_repository::SettingsRepository;
pub use water_entry_repository::WaterEntryRepository;
