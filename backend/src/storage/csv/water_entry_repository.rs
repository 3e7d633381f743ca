//! # CSV Water Entry Repository
//!
//! File-based water entry storage using a single CSV file.
//!
//! ## CSV Format
//!
//! ```csv
//! id,user_day,amount_ml,timestamp
//! water::5f3a...,2025-03-01,250.0,2025-03-01T09:30:00-04:00
//! water::9c1b...,2025-03-01,330.0,2025-03-01T11:05:00-04:00
//! ```
//!
//! New entries are appended; deletes rewrite the file atomically via a
//! temp file. User days are `yyyy-MM-dd` strings, so range filtering
//! is a plain lexicographic comparison.

use anyhow::Result;
use csv::{Reader, Writer};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use super::connection::CsvConnection;
use crate::domain::models::water_entry::WaterEntry;
use crate::storage::traits::WaterEntryStorage;

const WATER_ENTRIES_HEADER: &str = "id,user_day,amount_ml,timestamp\n";

/// CSV record structure for water entries
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WaterEntryRecord {
    id: String,
    user_day: String,
    amount_ml: f64,
    timestamp: String,
}

impl From<WaterEntryRecord> for WaterEntry {
    fn from(record: WaterEntryRecord) -> Self {
        WaterEntry {
            id: record.id,
            user_day: record.user_day,
            amount_ml: record.amount_ml,
            timestamp: record.timestamp,
        }
    }
}

/// CSV-based water entry repository
#[derive(Clone)]
pub struct WaterEntryRepository {
    connection: CsvConnection,
}

impl WaterEntryRepository {
    /// Create a new CSV water entry repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn entries_file_path(&self) -> PathBuf {
        self.connection.water_entries_file_path()
    }

    /// Ensure the entries CSV file exists with its header row
    fn ensure_entries_file_exists(&self) -> Result<()> {
        let path = self.entries_file_path();
        if !path.exists() {
            std::fs::write(&path, WATER_ENTRIES_HEADER)?;
            debug!("Created water entries CSV file: {:?}", path);
        }
        Ok(())
    }

    /// Read all entries from the CSV file, skipping unparseable rows
    fn read_entries(&self) -> Result<Vec<WaterEntry>> {
        self.ensure_entries_file_exists()?;

        let file = File::open(self.entries_file_path())?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut entries = Vec::new();
        for result in csv_reader.deserialize::<WaterEntryRecord>() {
            match result {
                Ok(record) => entries.push(WaterEntry::from(record)),
                Err(e) => {
                    warn!("Failed to parse water entry record: {}. Skipping.", e);
                    continue;
                }
            }
        }

        Ok(entries)
    }

    /// Write all entries back to the CSV file atomically
    fn write_entries(&self, entries: &[WaterEntry]) -> Result<()> {
        let path = self.entries_file_path();
        let temp_path = path.with_extension("csv.tmp");

        // Write to a temporary file first, then rename into place.
        // The header is written explicitly so an empty file still has
        // one and later appends stay aligned with reads.
        {
            use std::io::Write;

            let temp_file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(temp_file);
            writer.write_all(WATER_ENTRIES_HEADER.as_bytes())?;

            let mut csv_writer = Writer::from_writer(writer);
            for entry in entries {
                csv_writer.write_record(&[
                    &entry.id,
                    &entry.user_day,
                    &entry.amount_ml.to_string(),
                    &entry.timestamp,
                ])?;
            }
            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &path)?;
        debug!("Wrote {} water entries to {:?}", entries.len(), path);
        Ok(())
    }
}

impl WaterEntryStorage for WaterEntryRepository {
    fn store_entry(&self, entry: &WaterEntry) -> Result<()> {
        self.ensure_entries_file_exists()?;

        let file = OpenOptions::new()
            .append(true)
            .open(self.entries_file_path())?;

        let mut csv_writer = Writer::from_writer(file);
        // The file already has a header row; append the record only
        csv_writer.write_record(&[
            &entry.id,
            &entry.user_day,
            &entry.amount_ml.to_string(),
            &entry.timestamp,
        ])?;
        csv_writer.flush()?;

        debug!("Appended water entry {} ({} ml)", entry.id, entry.amount_ml);
        Ok(())
    }

    fn get_entry(&self, entry_id: &str) -> Result<Option<WaterEntry>> {
        let entries = self.read_entries()?;
        Ok(entries.into_iter().find(|e| e.id == entry_id))
    }

    fn list_entries_for_day(&self, user_day: &str) -> Result<Vec<WaterEntry>> {
        let mut entries: Vec<WaterEntry> = self
            .read_entries()?
            .into_iter()
            .filter(|e| e.user_day == user_day)
            .collect();
        // RFC 3339 timestamps sort lexicographically
        entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(entries)
    }

    fn list_entries_between(&self, start_day: &str, end_day: &str) -> Result<Vec<WaterEntry>> {
        let mut entries: Vec<WaterEntry> = self
            .read_entries()?
            .into_iter()
            .filter(|e| e.user_day.as_str() >= start_day && e.user_day.as_str() <= end_day)
            .collect();
        entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(entries)
    }

    fn delete_entry(&self, entry_id: &str) -> Result<bool> {
        let entries = self.read_entries()?;
        let original_len = entries.len();

        let remaining: Vec<WaterEntry> =
            entries.into_iter().filter(|e| e.id != entry_id).collect();

        if remaining.len() == original_len {
            return Ok(false);
        }

        self.write_entries(&remaining)?;
        debug!("Deleted water entry {}", entry_id);
        Ok(true)
    }
}
