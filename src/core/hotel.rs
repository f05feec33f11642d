//! Hotel business logic - Per-night lodging entries attached to trips.
//!
//! Hotels are pure reference data: they belong to exactly one trip and carry
//! no invariants beyond that ownership and a 1-based night number.

use crate::{
    entities::{Hotel, Trip, hotel},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields required to create a new hotel entry.
#[derive(Debug, Clone)]
pub struct NewHotel {
    /// ID of the trip this lodging entry belongs to
    pub trip_id: i64,
    /// Hotel name
    pub name: String,
    /// Street address
    pub address: String,
    /// City, if known
    pub city: Option<String>,
    /// Country, if known
    pub country: Option<String>,
    /// Contact phone number, if known
    pub phone_number: Option<String>,
    /// Website URL, if known
    pub website: Option<String>,
    /// Which night of the trip the group stays here (1-based)
    pub night_number: i32,
}

/// Retrieves all hotel entries for a trip, ordered by night number.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_hotels_for_trip(
    db: &DatabaseConnection,
    trip_id: i64,
) -> Result<Vec<hotel::Model>> {
    Hotel::find()
        .filter(hotel::Column::TripId.eq(trip_id))
        .order_by_asc(hotel::Column::NightNumber)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new hotel entry for a trip, performing input validation.
///
/// The referenced trip must exist; the night number is 1-based.
///
/// # Errors
/// Returns `TripNotFound` if the trip does not exist, a validation error for
/// an empty name/address or a night number below 1, or a database error.
pub async fn create_hotel(db: &DatabaseConnection, new_hotel: NewHotel) -> Result<hotel::Model> {
    if new_hotel.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Hotel name cannot be empty".to_string(),
        });
    }

    if new_hotel.address.trim().is_empty() {
        return Err(Error::Validation {
            message: "Hotel address cannot be empty".to_string(),
        });
    }

    if new_hotel.night_number < 1 {
        return Err(Error::Validation {
            message: "Hotel night number must be at least 1".to_string(),
        });
    }

    Trip::find_by_id(new_hotel.trip_id)
        .one(db)
        .await?
        .ok_or(Error::TripNotFound {
            id: new_hotel.trip_id,
        })?;

    let hotel = hotel::ActiveModel {
        trip_id: Set(new_hotel.trip_id),
        name: Set(new_hotel.name.trim().to_string()),
        address: Set(new_hotel.address),
        city: Set(new_hotel.city),
        country: Set(new_hotel.country),
        phone_number: Set(new_hotel.phone_number),
        website: Set(new_hotel.website),
        night_number: Set(new_hotel.night_number),
        ..Default::default()
    };

    hotel.insert(db).await.map_err(Into::into)
}
