//! Seed trip configuration loading from config.toml
//!
//! This module provides functionality to load initial trip definitions from a
//! TOML configuration file. The trips defined in config.toml are used to seed
//! the database on first run, when the trips table is still empty.

use crate::core::trip::NewTrip;
use crate::entities::Trip;
use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of trip definitions to seed
    #[serde(default)]
    pub trips: Vec<TripConfig>,
}

/// Configuration for a single seed trip
#[derive(Debug, Deserialize, Clone)]
pub struct TripConfig {
    /// Name of the trip
    pub name: String,
    /// Marketing description
    pub description: String,
    /// First riding day
    pub start_date: chrono::NaiveDate,
    /// Last riding day
    pub end_date: chrono::NaiveDate,
    /// Region the trip takes place in
    pub location: String,
    /// Trip length in days
    pub duration_days: i32,
    /// Average distance ridden per day, in kilometers
    pub average_daily_distance_km: f64,
    /// Average ascent per day, in vertical meters
    pub average_daily_climb_m: f64,
    /// Price per participant in a shared room
    pub base_price: Decimal,
    /// Surcharge for a single room
    pub single_room_supplement: Decimal,
    /// Maximum number of non-cancelled registrations
    pub max_participants: i32,
}

impl From<TripConfig> for NewTrip {
    fn from(value: TripConfig) -> Self {
        Self {
            name: value.name,
            description: value.description,
            start_date: value.start_date,
            end_date: value.end_date,
            location: value.location,
            duration_days: value.duration_days,
            average_daily_distance_km: value.average_daily_distance_km,
            average_daily_climb_m: value.average_daily_climb_m,
            base_price: value.base_price,
            single_room_supplement: value.single_room_supplement,
            strava_route_link: None,
            gpx_file_url: None,
            max_participants: value.max_participants,
        }
    }
}

/// Loads trip configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Seeds the trips table from `config.toml`, if present.
///
/// Seeding only runs when the trips table is empty, so restarting the service
/// never duplicates the seed trips. A missing config file is not an error.
pub async fn seed_initial_trips(db: &DatabaseConnection) -> Result<()> {
    let path = Path::new("config.toml");
    if !path.exists() {
        tracing::info!("No config.toml found, skipping trip seeding");
        return Ok(());
    }

    let existing = Trip::find().count(db).await?;
    if existing > 0 {
        tracing::info!(existing, "Trips already present, skipping trip seeding");
        return Ok(());
    }

    let config = load_config(path)?;
    for trip_config in config.trips {
        let name = trip_config.name.clone();
        crate::core::trip::create_trip(db, trip_config.into()).await?;
        tracing::info!(trip = %name, "Seeded trip from config.toml");
    }

    Ok(())
}
