//! Hotel entity - A lodging entry tied to a trip and a specific night.
//!
//! Pure reference data: each hotel row belongs to exactly one trip and names
//! where the group sleeps on the given night of the tour.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hotel database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    /// Unique identifier for the hotel entry
    #[sea_orm(primary_key)]
    pub id: i64,
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

/// Defines relationships between Hotel and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each hotel entry belongs to one trip
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::TripId",
        to = "super::trip::Column::Id"
    )]
    Trip,
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
