//! Trip registration entity - Links one participant to one trip.
//!
//! A registration carries its admission-time status and computed total price.
//! Registrations are never hard-deleted; their lifetime is controlled by the
//! `status` field, and cancelled rows do not count toward trip capacity.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a registration.
///
/// Transitions: `Pending -> Confirmed` (via update), and
/// `Pending | Confirmed -> Cancelled` (via the cancellation path).
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Created by the admission workflow, awaiting confirmation
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Confirmed by an administrative action
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    /// Cancelled; frees one capacity slot on the trip
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Trip registration database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trip_registrations")]
pub struct Model {
    /// Unique identifier for the registration
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the trip being booked
    pub trip_id: i64,
    /// ID of the registering participant
    pub participant_id: i64,
    /// When the registration was submitted
    pub registration_date: DateTimeUtc,
    /// Current lifecycle state
    pub status: RegistrationStatus,
    /// Whether a single room was requested for this booking
    pub single_room_requested: bool,
    /// Computed at admission: base price plus the single-room supplement if requested
    pub total_price: Decimal,
}

/// Defines relationships between `TripRegistration` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each registration belongs to one trip
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::TripId",
        to = "super::trip::Column::Id"
    )]
    Trip,
    /// Each registration belongs to one participant
    #[sea_orm(
        belongs_to = "super::participant::Entity",
        from = "Column::ParticipantId",
        to = "super::participant::Column::Id"
    )]
    Participant,
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl Related<super::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
