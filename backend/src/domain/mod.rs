//! Domain layer: pure calculators, domain models and the services
//! that orchestrate them over the storage abstraction.

pub mod commands;
pub mod intake_service;
pub mod models;
pub mod profile_service;
pub mod reminder_service;
pub mod user_day;
pub mod water_calculator;

pub use intake_service::IntakeService;
pub use profile_service::ProfileService;
pub use reminder_service::ReminderService;
