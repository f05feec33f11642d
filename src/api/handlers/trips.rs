//! Trip and hotel endpoints.

use crate::{
    api::model::{
        CreateHotelRequest, CreateTripRequest, HotelResponse, RegistrationResponse,
        TripDetailResponse, TripResponse, UpdateTripRequest,
    },
    core,
    errors::Error,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::DatabaseConnection;

/// `GET /api/trips` - lists active trips with their hotel entries.
pub async fn list_trips(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<TripResponse>>, Error> {
    let trips = core::trip::get_all_active_trips(&db).await?;

    let mut responses = Vec::with_capacity(trips.len());
    for trip in trips {
        let hotels = core::hotel::get_hotels_for_trip(&db, trip.id).await?;
        responses.push(TripResponse::from_parts(trip, hotels));
    }

    Ok(Json(responses))
}

/// `GET /api/trips/:trip_id` - one trip with hotels and registrations.
///
/// Inactive trips resolve here too, so existing bookings stay inspectable.
pub async fn show_trip(
    Path(trip_id): Path<i64>,
    State(db): State<DatabaseConnection>,
) -> Result<Json<TripDetailResponse>, Error> {
    let trip = core::trip::get_trip_by_id(&db, trip_id)
        .await?
        .ok_or(Error::TripNotFound { id: trip_id })?;

    let hotels = core::hotel::get_hotels_for_trip(&db, trip_id).await?;
    let registrations = core::registration::get_registrations_for_trip(&db, trip_id).await?;

    Ok(Json(TripDetailResponse {
        trip: TripResponse::from_parts(trip, hotels),
        registrations: registrations
            .into_iter()
            .map(RegistrationResponse::from)
            .collect(),
    }))
}

/// `POST /api/trips` - creates a trip, returning 201 with the new record.
pub async fn create_trip(
    State(db): State<DatabaseConnection>,
    Json(request): Json<CreateTripRequest>,
) -> Result<(StatusCode, Json<TripResponse>), Error> {
    let trip = core::trip::create_trip(&db, request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(TripResponse::from_parts(trip, Vec::new())),
    ))
}

/// `PUT /api/trips/:trip_id` - applies field changes, returning 204.
pub async fn update_trip(
    Path(trip_id): Path<i64>,
    State(db): State<DatabaseConnection>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<StatusCode, Error> {
    core::trip::update_trip(&db, trip_id, request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/trips/:trip_id` - soft delete: flips `is_active` off.
pub async fn delete_trip(
    Path(trip_id): Path<i64>,
    State(db): State<DatabaseConnection>,
) -> Result<StatusCode, Error> {
    core::trip::deactivate_trip(&db, trip_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/trips/:trip_id/hotels` - adds a lodging entry to a trip.
pub async fn add_hotel(
    Path(trip_id): Path<i64>,
    State(db): State<DatabaseConnection>,
    Json(request): Json<CreateHotelRequest>,
) -> Result<(StatusCode, Json<HotelResponse>), Error> {
    let hotel = core::hotel::create_hotel(&db, request.into_new_hotel(trip_id)).await?;
    Ok((StatusCode::CREATED, Json(HotelResponse::from(hotel))))
}
