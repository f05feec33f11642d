//! Trip entity - Represents an offered cycling tour.
//!
//! Each trip has fixed dates, a location, riding statistics, pricing, and a
//! participant limit. Trips are never physically removed while registrations
//! reference them; "deletion" flips the `is_active` flag.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Trip database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    /// Unique identifier for the trip
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the trip (e.g., "Alpine Adventure - Dolomites")
    pub name: String,
    /// Full marketing description shown to participants
    pub description: String,
    /// First riding day
    pub start_date: Date,
    /// Last riding day, never before `start_date`
    pub end_date: Date,
    /// Region the trip takes place in (e.g., "Dolomites, Italy")
    pub location: String,
    /// Trip length in days
    pub duration_days: i32,
    /// Average distance ridden per day, in kilometers
    pub average_daily_distance_km: f64,
    /// Average ascent per day, in vertical meters
    pub average_daily_climb_m: f64,
    /// Price per participant in a shared room
    pub base_price: Decimal,
    /// Surcharge for a single room, added to the base price on request
    pub single_room_supplement: Decimal,
    /// Optional link to the planned route on Strava
    pub strava_route_link: Option<String>,
    /// Optional URL of a downloadable GPX file for the route
    pub gpx_file_url: Option<String>,
    /// Maximum number of non-cancelled registrations this trip accepts
    pub max_participants: i32,
    /// Soft delete flag - inactive trips are hidden from listings but preserved
    pub is_active: bool,
}

/// Defines relationships between Trip and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One trip has many per-night hotel listings
    #[sea_orm(has_many = "super::hotel::Entity")]
    Hotels,
    /// One trip has many registrations
    #[sea_orm(has_many = "super::trip_registration::Entity")]
    TripRegistrations,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotels.def()
    }
}

impl Related<super::trip_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
