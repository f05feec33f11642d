//! Request and response wire models for the REST API.
//!
//! DTOs are kept separate from the SeaORM entities so the wire format can
//! stay camelCase and stable while the storage layer evolves. Conversions go
//! through `From` impls in both directions.

use crate::core::{
    hotel::NewHotel,
    participant::{NewParticipant, ParticipantChanges},
    registration::RegistrationChanges,
    trip::{NewTrip, TripChanges},
};
use crate::entities::{RegistrationStatus, hotel, participant, trip, trip_registration};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Trips
// ---------------------------------------------------------------------------

/// Request body for `POST /api/trips`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    /// Trip name
    pub name: String,
    /// Marketing description
    pub description: String,
    /// First riding day
    pub start_date: NaiveDate,
    /// Last riding day
    pub end_date: NaiveDate,
    /// Region the trip takes place in
    pub location: String,
    /// Trip length in days
    pub duration_days: i32,
    /// Average daily distance in kilometers
    pub average_daily_distance_km: f64,
    /// Average daily ascent in vertical meters
    pub average_daily_climb_m: f64,
    /// Shared-room price per participant
    pub base_price: Decimal,
    /// Single-room surcharge
    pub single_room_supplement: Decimal,
    /// Optional Strava route link
    #[serde(default)]
    pub strava_route_link: Option<String>,
    /// Optional GPX file URL
    #[serde(default)]
    pub gpx_file_url: Option<String>,
    /// Participant limit
    pub max_participants: i32,
}

impl From<CreateTripRequest> for NewTrip {
    fn from(value: CreateTripRequest) -> Self {
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
            strava_route_link: value.strava_route_link,
            gpx_file_url: value.gpx_file_url,
            max_participants: value.max_participants,
        }
    }
}

/// Request body for `PUT /api/trips/:trip_id`. Absent fields are untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New first riding day
    pub start_date: Option<NaiveDate>,
    /// New last riding day
    pub end_date: Option<NaiveDate>,
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
    /// New single-room surcharge
    pub single_room_supplement: Option<Decimal>,
    /// New Strava route link
    pub strava_route_link: Option<Option<String>>,
    /// New GPX file URL
    pub gpx_file_url: Option<Option<String>>,
    /// New participant limit
    pub max_participants: Option<i32>,
    /// New active flag
    pub is_active: Option<bool>,
}

impl From<UpdateTripRequest> for TripChanges {
    fn from(value: UpdateTripRequest) -> Self {
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
            strava_route_link: value.strava_route_link,
            gpx_file_url: value.gpx_file_url,
            max_participants: value.max_participants,
            is_active: value.is_active,
        }
    }
}

/// Trip payload returned by listing and creation endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    /// Trip id
    pub id: i64,
    /// Trip name
    pub name: String,
    /// Marketing description
    pub description: String,
    /// First riding day
    pub start_date: NaiveDate,
    /// Last riding day
    pub end_date: NaiveDate,
    /// Region the trip takes place in
    pub location: String,
    /// Trip length in days
    pub duration_days: i32,
    /// Average daily distance in kilometers
    pub average_daily_distance_km: f64,
    /// Average daily ascent in vertical meters
    pub average_daily_climb_m: f64,
    /// Shared-room price per participant
    pub base_price: Decimal,
    /// Single-room surcharge
    pub single_room_supplement: Decimal,
    /// Optional Strava route link
    pub strava_route_link: Option<String>,
    /// Optional GPX file URL
    pub gpx_file_url: Option<String>,
    /// Participant limit
    pub max_participants: i32,
    /// Active flag
    pub is_active: bool,
    /// Per-night hotel listings for this trip
    pub hotels: Vec<HotelResponse>,
}

impl TripResponse {
    /// Builds a response from a trip and its hotel entries.
    pub fn from_parts(trip: trip::Model, hotels: Vec<hotel::Model>) -> Self {
        Self {
            id: trip.id,
            name: trip.name,
            description: trip.description,
            start_date: trip.start_date,
            end_date: trip.end_date,
            location: trip.location,
            duration_days: trip.duration_days,
            average_daily_distance_km: trip.average_daily_distance_km,
            average_daily_climb_m: trip.average_daily_climb_m,
            base_price: trip.base_price,
            single_room_supplement: trip.single_room_supplement,
            strava_route_link: trip.strava_route_link,
            gpx_file_url: trip.gpx_file_url,
            max_participants: trip.max_participants,
            is_active: trip.is_active,
            hotels: hotels.into_iter().map(HotelResponse::from).collect(),
        }
    }
}

/// Trip payload for `GET /api/trips/:trip_id`, including registrations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetailResponse {
    /// Trip with its hotel listings
    #[serde(flatten)]
    pub trip: TripResponse,
    /// All registrations for this trip, cancelled ones included
    pub registrations: Vec<RegistrationResponse>,
}

// ---------------------------------------------------------------------------
// Hotels
// ---------------------------------------------------------------------------

/// Request body for `POST /api/trips/:trip_id/hotels`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelRequest {
    /// Hotel name
    pub name: String,
    /// Street address
    pub address: String,
    /// City, if known
    #[serde(default)]
    pub city: Option<String>,
    /// Country, if known
    #[serde(default)]
    pub country: Option<String>,
    /// Contact phone number, if known
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Website URL, if known
    #[serde(default)]
    pub website: Option<String>,
    /// Which night of the trip the group stays here (1-based)
    pub night_number: i32,
}

impl CreateHotelRequest {
    /// Attaches the path trip id to build the core input.
    pub fn into_new_hotel(self, trip_id: i64) -> NewHotel {
        NewHotel {
            trip_id,
            name: self.name,
            address: self.address,
            city: self.city,
            country: self.country,
            phone_number: self.phone_number,
            website: self.website,
            night_number: self.night_number,
        }
    }
}

/// Hotel payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    /// Hotel entry id
    pub id: i64,
    /// Owning trip id
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

impl From<hotel::Model> for HotelResponse {
    fn from(value: hotel::Model) -> Self {
        Self {
            id: value.id,
            trip_id: value.trip_id,
            name: value.name,
            address: value.address,
            city: value.city,
            country: value.country,
            phone_number: value.phone_number,
            website: value.website,
            night_number: value.night_number,
        }
    }
}

// ---------------------------------------------------------------------------
// Participants
// ---------------------------------------------------------------------------

/// Request body for `POST /api/participants`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipantRequest {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Date of birth
    pub birthday: NaiveDate,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone_number: String,
    /// Optional Strava profile link
    #[serde(default)]
    pub strava_account_link: Option<String>,
    /// Free-form dietary requirements
    #[serde(default)]
    pub special_diets: Option<String>,
    /// Default single-room preference
    #[serde(default)]
    pub single_room_request: bool,
}

impl From<CreateParticipantRequest> for NewParticipant {
    fn from(value: CreateParticipantRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            birthday: value.birthday,
            email: value.email,
            phone_number: value.phone_number,
            strava_account_link: value.strava_account_link,
            special_diets: value.special_diets,
            single_room_request: value.single_room_request,
        }
    }
}

/// Request body for `PUT /api/participants/:participant_id`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipantRequest {
    /// New given name
    pub first_name: Option<String>,
    /// New family name
    pub last_name: Option<String>,
    /// New date of birth
    pub birthday: Option<NaiveDate>,
    /// New email address
    pub email: Option<String>,
    /// New phone number
    pub phone_number: Option<String>,
    /// New Strava profile link
    pub strava_account_link: Option<Option<String>>,
    /// New dietary requirements
    pub special_diets: Option<Option<String>>,
    /// New default single-room preference
    pub single_room_request: Option<bool>,
}

impl From<UpdateParticipantRequest> for ParticipantChanges {
    fn from(value: UpdateParticipantRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            birthday: value.birthday,
            email: value.email,
            phone_number: value.phone_number,
            strava_account_link: value.strava_account_link,
            special_diets: value.special_diets,
            single_room_request: value.single_room_request,
        }
    }
}

/// Participant payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    /// Participant id
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Date of birth
    pub birthday: NaiveDate,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone_number: String,
    /// Optional Strava profile link
    pub strava_account_link: Option<String>,
    /// Free-form dietary requirements
    pub special_diets: Option<String>,
    /// Default single-room preference
    pub single_room_request: bool,
}

impl From<participant::Model> for ParticipantResponse {
    fn from(value: participant::Model) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            birthday: value.birthday,
            email: value.email,
            phone_number: value.phone_number,
            strava_account_link: value.strava_account_link,
            special_diets: value.special_diets,
            single_room_request: value.single_room_request,
        }
    }
}

/// Participant payload for `GET /api/participants/:participant_id`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDetailResponse {
    /// The participant record
    #[serde(flatten)]
    pub participant: ParticipantResponse,
    /// All registrations this participant has submitted
    pub registrations: Vec<RegistrationResponse>,
}

// ---------------------------------------------------------------------------
// Registrations
// ---------------------------------------------------------------------------

/// Request body for `POST /api/registrations`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    /// Trip being booked
    pub trip_id: i64,
    /// Registering participant
    pub participant_id: i64,
    /// Whether a single room is requested
    #[serde(default)]
    pub single_room_requested: bool,
}

/// Request body for `PUT /api/registrations/:registration_id`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationRequest {
    /// New lifecycle state
    pub status: Option<RegistrationStatus>,
    /// New single-room flag; the stored price is not recomputed
    pub single_room_requested: Option<bool>,
}

impl From<UpdateRegistrationRequest> for RegistrationChanges {
    fn from(value: UpdateRegistrationRequest) -> Self {
        Self {
            status: value.status,
            single_room_requested: value.single_room_requested,
        }
    }
}

/// Registration payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    /// Registration id
    pub id: i64,
    /// Trip being booked
    pub trip_id: i64,
    /// Registering participant
    pub participant_id: i64,
    /// When the registration was submitted
    pub registration_date: chrono::DateTime<chrono::Utc>,
    /// Current lifecycle state
    pub status: RegistrationStatus,
    /// Whether a single room was requested
    pub single_room_requested: bool,
    /// Price computed at admission time
    pub total_price: Decimal,
}

impl From<trip_registration::Model> for RegistrationResponse {
    fn from(value: trip_registration::Model) -> Self {
        Self {
            id: value.id,
            trip_id: value.trip_id,
            participant_id: value.participant_id,
            registration_date: value.registration_date,
            status: value.status,
            single_room_requested: value.single_room_requested,
            total_price: value.total_price,
        }
    }
}
