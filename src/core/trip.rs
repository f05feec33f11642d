//! Trip business logic - Handles all trip-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deactivating trips.
//! Trips referenced by registrations are never physically removed; deletion is
//! a soft flag flip so existing bookings keep pointing at valid records.

use crate::{
    entities::{Trip, trip},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields required to create a new trip.
#[derive(Debug, Clone)]
pub struct NewTrip {
    /// Human-readable name of the trip
    pub name: String,
    /// Full marketing description
    pub description: String,
    /// First riding day
    pub start_date: Date,
    /// Last riding day
    pub end_date: Date,
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
    /// Optional link to the planned route on Strava
    pub strava_route_link: Option<String>,
    /// Optional URL of a downloadable GPX file
    pub gpx_file_url: Option<String>,
    /// Maximum number of non-cancelled registrations
    pub max_participants: i32,
}

/// Per-field changes applied by [`update_trip`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TripChanges {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New first riding day
    pub start_date: Option<Date>,
    /// New last riding day
    pub end_date: Option<Date>,
    /// New location
    pub location: Option<String>,
    /// New trip length in days
    pub duration_days: Option<i32>,
    /// New average daily distance in kilometers
    pub average_daily_distance_km: Option<f64>,
    /// New average daily ascent in vertical meters
    pub average_daily_climb_m: Option<f64>,
    /// New base price
    pub base_price: Option<Decimal>,
    /// New single-room supplement
    pub single_room_supplement: Option<Decimal>,
    /// New Strava route link (`Some(None)` clears it)
    pub strava_route_link: Option<Option<String>>,
    /// New GPX file URL (`Some(None)` clears it)
    pub gpx_file_url: Option<Option<String>>,
    /// New participant limit
    pub max_participants: Option<i32>,
    /// New active flag
    pub is_active: Option<bool>,
}

fn validate(
    name: &str,
    start_date: Date,
    end_date: Date,
    base_price: Decimal,
    single_room_supplement: Decimal,
    max_participants: i32,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Trip name cannot be empty".to_string(),
        });
    }

    if end_date < start_date {
        return Err(Error::Validation {
            message: "Trip end date cannot be before its start date".to_string(),
        });
    }

    if base_price < Decimal::ZERO || single_room_supplement < Decimal::ZERO {
        return Err(Error::Validation {
            message: "Trip prices cannot be negative".to_string(),
        });
    }

    if max_participants < 0 {
        return Err(Error::Validation {
            message: "Maximum participant count cannot be negative".to_string(),
        });
    }

    Ok(())
}

/// Retrieves all active (non-deactivated) trips, ordered by start date.
///
/// This is the listing shown to prospective participants; deactivated trips
/// stay queryable by id but disappear from here.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_active_trips(db: &DatabaseConnection) -> Result<Vec<trip::Model>> {
    Trip::find()
        .filter(trip::Column::IsActive.eq(true))
        .order_by_asc(trip::Column::StartDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a trip by its unique ID, returning None if it does not exist.
///
/// Deactivated trips are still returned here so existing registrations can
/// always resolve their trip.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_trip_by_id(db: &DatabaseConnection, trip_id: i64) -> Result<Option<trip::Model>> {
    Trip::find_by_id(trip_id).one(db).await.map_err(Into::into)
}

/// Creates a new trip, performing input validation.
///
/// Validates that the name is not empty, the end date is not before the start
/// date, prices are non-negative, and the participant limit is non-negative.
///
/// # Errors
/// Returns an error if validation fails or the database insert fails.
pub async fn create_trip(db: &DatabaseConnection, new_trip: NewTrip) -> Result<trip::Model> {
    validate(
        &new_trip.name,
        new_trip.start_date,
        new_trip.end_date,
        new_trip.base_price,
        new_trip.single_room_supplement,
        new_trip.max_participants,
    )?;

    let trip = trip::ActiveModel {
        name: Set(new_trip.name.trim().to_string()),
        description: Set(new_trip.description),
        start_date: Set(new_trip.start_date),
        end_date: Set(new_trip.end_date),
        location: Set(new_trip.location),
        duration_days: Set(new_trip.duration_days),
        average_daily_distance_km: Set(new_trip.average_daily_distance_km),
        average_daily_climb_m: Set(new_trip.average_daily_climb_m),
        base_price: Set(new_trip.base_price),
        single_room_supplement: Set(new_trip.single_room_supplement),
        strava_route_link: Set(new_trip.strava_route_link),
        gpx_file_url: Set(new_trip.gpx_file_url),
        max_participants: Set(new_trip.max_participants),
        is_active: Set(true),
        ..Default::default()
    };

    trip.insert(db).await.map_err(Into::into)
}

/// Updates an existing trip with the provided field changes.
///
/// The resulting record is re-validated, so an update cannot invert the date
/// range or set a negative price or capacity.
///
/// # Errors
/// Returns `TripNotFound` if the trip does not exist, a validation error if
/// the changes violate trip invariants, or a database error.
pub async fn update_trip(
    db: &DatabaseConnection,
    trip_id: i64,
    changes: TripChanges,
) -> Result<trip::Model> {
    let trip = Trip::find_by_id(trip_id)
        .one(db)
        .await?
        .ok_or(Error::TripNotFound { id: trip_id })?;

    let name = changes.name.unwrap_or_else(|| trip.name.clone());
    let start_date = changes.start_date.unwrap_or(trip.start_date);
    let end_date = changes.end_date.unwrap_or(trip.end_date);
    let base_price = changes.base_price.unwrap_or(trip.base_price);
    let single_room_supplement = changes
        .single_room_supplement
        .unwrap_or(trip.single_room_supplement);
    let max_participants = changes.max_participants.unwrap_or(trip.max_participants);

    validate(
        &name,
        start_date,
        end_date,
        base_price,
        single_room_supplement,
        max_participants,
    )?;

    let mut active: trip::ActiveModel = trip.into();
    active.name = Set(name.trim().to_string());
    active.start_date = Set(start_date);
    active.end_date = Set(end_date);
    active.base_price = Set(base_price);
    active.single_room_supplement = Set(single_room_supplement);
    active.max_participants = Set(max_participants);
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(location) = changes.location {
        active.location = Set(location);
    }
    if let Some(duration_days) = changes.duration_days {
        active.duration_days = Set(duration_days);
    }
    if let Some(distance) = changes.average_daily_distance_km {
        active.average_daily_distance_km = Set(distance);
    }
    if let Some(climb) = changes.average_daily_climb_m {
        active.average_daily_climb_m = Set(climb);
    }
    if let Some(strava_route_link) = changes.strava_route_link {
        active.strava_route_link = Set(strava_route_link);
    }
    if let Some(gpx_file_url) = changes.gpx_file_url {
        active.gpx_file_url = Set(gpx_file_url);
    }
    if let Some(is_active) = changes.is_active {
        active.is_active = Set(is_active);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deactivates a trip (soft delete).
///
/// The trip disappears from active listings but remains in the database so
/// registrations referencing it stay resolvable. Deactivating an already
/// inactive trip succeeds and leaves state unchanged.
///
/// # Errors
/// Returns `TripNotFound` if the trip does not exist, or a database error.
pub async fn deactivate_trip(db: &DatabaseConnection, trip_id: i64) -> Result<trip::Model> {
    let trip = Trip::find_by_id(trip_id)
        .one(db)
        .await?
        .ok_or(Error::TripNotFound { id: trip_id })?;

    if !trip.is_active {
        return Ok(trip);
    }

    let mut active: trip::ActiveModel = trip.into();
    active.is_active = Set(false);
    active.update(db).await.map_err(Into::into)
}
