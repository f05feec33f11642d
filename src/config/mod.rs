/// Database configuration and connection management
pub mod database;

/// Seed trip configuration loading from config.toml
pub mod trips;
