//! Participant entity - Represents a person who may register for trips.
//!
//! Participants are created once and referenced by zero or more registrations.
//! There is no deletion path; registrations must always resolve their rider.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Participant database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    /// Unique identifier for the participant
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Date of birth
    pub birthday: Date,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone_number: String,
    /// Optional link to the participant's Strava profile
    pub strava_account_link: Option<String>,
    /// Free-form dietary requirements, if any
    pub special_diets: Option<String>,
    /// Default single-room preference applied when registering
    pub single_room_request: bool,
}

/// Defines relationships between Participant and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One participant has many registrations
    #[sea_orm(has_many = "super::trip_registration::Entity")]
    TripRegistrations,
}

impl Related<super::trip_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
