//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        hotel::{self, NewHotel},
        participant::{self, NewParticipant},
        trip::{self, NewTrip},
    },
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds trip input with sensible defaults.
///
/// # Defaults
/// * dates: 2026-06-15 through 2026-06-21, 7 days
/// * `base_price`: 2500.00, `single_room_supplement`: 400.00
/// * `max_participants`: 20
pub fn default_new_trip(name: &str) -> NewTrip {
    NewTrip {
        name: name.to_string(),
        description: "Seven days of climbing through high mountain passes.".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 21).unwrap(),
        location: "Dolomites, Italy".to_string(),
        duration_days: 7,
        average_daily_distance_km: 100.0,
        average_daily_climb_m: 2500.0,
        base_price: Decimal::new(250_000, 2),
        single_room_supplement: Decimal::new(40_000, 2),
        strava_route_link: None,
        gpx_file_url: None,
        max_participants: 20,
    }
}

/// Creates a test trip with the defaults from [`default_new_trip`].
pub async fn create_test_trip(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::trip::Model> {
    trip::create_trip(db, default_new_trip(name)).await
}

/// Creates a test trip with a specific participant limit.
/// Use this when a test needs to exercise the capacity check.
pub async fn create_custom_trip(
    db: &DatabaseConnection,
    name: &str,
    max_participants: i32,
) -> Result<entities::trip::Model> {
    let mut new_trip = default_new_trip(name);
    new_trip.max_participants = max_participants;
    trip::create_trip(db, new_trip).await
}

/// Builds participant input with sensible defaults.
///
/// The email is derived from the name as `first.last@example.com`
/// (lowercased).
pub fn default_new_participant(first_name: &str, last_name: &str) -> NewParticipant {
    NewParticipant {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birthday: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone_number: "+31 6 1234 5678".to_string(),
        strava_account_link: None,
        special_diets: None,
        single_room_request: false,
    }
}

/// Creates a test participant with the defaults from
/// [`default_new_participant`].
pub async fn create_test_participant(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
) -> Result<entities::participant::Model> {
    participant::create_participant(db, default_new_participant(first_name, last_name)).await
}

/// Builds hotel input with sensible defaults for the given trip and night.
pub fn default_new_hotel(trip_id: i64, name: &str, night_number: i32) -> NewHotel {
    NewHotel {
        trip_id,
        name: name.to_string(),
        address: "1 Mountain Pass Road".to_string(),
        city: None,
        country: None,
        phone_number: None,
        website: None,
        night_number,
    }
}

/// Creates a test hotel entry with the defaults from [`default_new_hotel`].
pub async fn create_test_hotel(
    db: &DatabaseConnection,
    trip_id: i64,
    name: &str,
    night_number: i32,
) -> Result<entities::hotel::Model> {
    hotel::create_hotel(db, default_new_hotel(trip_id, name, night_number)).await
}
