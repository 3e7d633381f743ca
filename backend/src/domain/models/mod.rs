//! Domain models for the hydration tracker.

pub mod profile;
pub mod settings;
pub mod water_entry;
