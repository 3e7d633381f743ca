//! Command and result types for domain service operations.

pub mod profile;
pub mod water;
