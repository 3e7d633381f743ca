//! Storage layer: abstraction traits plus the file-backed
//! implementation used by the desktop app.

pub mod csv;
pub mod traits;

pub use csv::CsvConnection;
pub use traits::{Connection, ProfileStorage, SettingsStorage, WaterEntryStorage};
