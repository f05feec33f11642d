//! Registration admission logic - The capacity-checked booking workflow.
//!
//! Submitting a registration validates the referenced trip and participant,
//! computes the total price, and enforces the trip's participant limit. The
//! capacity check and the insert run inside a single database transaction
//! with the insert first: the insert takes the write lock before the count
//! runs, so two concurrent submissions for the same trip cannot both observe
//! a count below the limit and both slip in. Cancellation is idempotent and
//! frees one capacity slot, because counts exclude cancelled registrations.

use crate::{
    entities::{Participant, RegistrationStatus, Trip, TripRegistration, trip_registration},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, TransactionTrait, prelude::*};

/// Per-field changes applied by [`update_registration`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationChanges {
    /// New lifecycle state (e.g. confirmation)
    pub status: Option<RegistrationStatus>,
    /// New single-room flag; the stored price is not recomputed
    pub single_room_requested: Option<bool>,
}

/// Counts registrations for a trip whose status is not `Cancelled`.
///
/// This is the number the capacity check compares against `max_participants`.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_active_registrations<C>(db: &C, trip_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    TripRegistration::find()
        .filter(trip_registration::Column::TripId.eq(trip_id))
        .filter(trip_registration::Column::Status.ne(RegistrationStatus::Cancelled))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Submits a registration request for a trip.
///
/// Validates that the trip and participant exist, computes the total price
/// (`base_price`, plus `single_room_supplement` when a single room is
/// requested), and admits the registration only if the trip still has a free
/// slot. On success exactly one new `Pending` registration exists; on any
/// error no new state is created.
///
/// The admission runs as one transaction: the row is inserted first and the
/// non-cancelled registrations are then re-counted inside the same
/// transaction. If the count exceeds the trip's limit the transaction is
/// rolled back, so concurrent submissions serialize on the insert and the
/// capacity invariant holds without relying on call-site ordering.
///
/// # Errors
/// Returns `TripNotFound` or `ParticipantNotFound` for dangling references,
/// `CapacityExceeded` when the trip is fully booked, or a database error.
pub async fn submit_registration(
    db: &DatabaseConnection,
    trip_id: i64,
    participant_id: i64,
    single_room_requested: bool,
) -> Result<trip_registration::Model> {
    let txn = db.begin().await?;

    let trip = Trip::find_by_id(trip_id)
        .one(&txn)
        .await?
        .ok_or(Error::TripNotFound { id: trip_id })?;

    Participant::find_by_id(participant_id)
        .one(&txn)
        .await?
        .ok_or(Error::ParticipantNotFound { id: participant_id })?;

    let mut total_price = trip.base_price;
    if single_room_requested {
        total_price += trip.single_room_supplement;
    }

    let registration = trip_registration::ActiveModel {
        trip_id: Set(trip_id),
        participant_id: Set(participant_id),
        registration_date: Set(chrono::Utc::now()),
        status: Set(RegistrationStatus::Pending),
        single_room_requested: Set(single_room_requested),
        total_price: Set(total_price),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let active = count_active_registrations(&txn, trip_id).await?;
    let capacity = u64::try_from(trip.max_participants.max(0)).unwrap_or(0);
    if active > capacity {
        txn.rollback().await?;
        return Err(Error::CapacityExceeded {
            trip_id,
            max_participants: trip.max_participants,
        });
    }

    txn.commit().await?;
    Ok(registration)
}

/// Cancels a registration, freeing one capacity slot on its trip.
///
/// Idempotent: cancelling an already-cancelled registration succeeds silently
/// and leaves state unchanged. The row is never deleted.
///
/// # Errors
/// Returns `RegistrationNotFound` if the registration does not exist, or a
/// database error.
pub async fn cancel_registration(
    db: &DatabaseConnection,
    registration_id: i64,
) -> Result<trip_registration::Model> {
    let registration = TripRegistration::find_by_id(registration_id)
        .one(db)
        .await?
        .ok_or(Error::RegistrationNotFound {
            id: registration_id,
        })?;

    if registration.status == RegistrationStatus::Cancelled {
        return Ok(registration);
    }

    let mut active: trip_registration::ActiveModel = registration.into();
    active.status = Set(RegistrationStatus::Cancelled);
    active.update(db).await.map_err(Into::into)
}

/// Applies a generic field overwrite to a registration.
///
/// Used for status transitions such as confirmation. Constrained only by the
/// existence of the record: neither capacity nor the stored price is
/// re-validated here.
///
/// # Errors
/// Returns `RegistrationNotFound` if the registration does not exist, or a
/// database error.
pub async fn update_registration(
    db: &DatabaseConnection,
    registration_id: i64,
    changes: RegistrationChanges,
) -> Result<trip_registration::Model> {
    let registration = TripRegistration::find_by_id(registration_id)
        .one(db)
        .await?
        .ok_or(Error::RegistrationNotFound {
            id: registration_id,
        })?;

    let mut active: trip_registration::ActiveModel = registration.into();
    if let Some(status) = changes.status {
        active.status = Set(status);
    }
    if let Some(single_room_requested) = changes.single_room_requested {
        active.single_room_requested = Set(single_room_requested);
    }

    active.update(db).await.map_err(Into::into)
}

/// Retrieves a registration by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_registration_by_id(
    db: &DatabaseConnection,
    registration_id: i64,
) -> Result<Option<trip_registration::Model>> {
    TripRegistration::find_by_id(registration_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all registrations, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_registrations(
    db: &DatabaseConnection,
) -> Result<Vec<trip_registration::Model>> {
    TripRegistration::find()
        .order_by_desc(trip_registration::Column::RegistrationDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all registrations for a trip, newest first.
///
/// Cancelled registrations are included; callers that need the capacity view
/// should use [`count_active_registrations`].
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_registrations_for_trip(
    db: &DatabaseConnection,
    trip_id: i64,
) -> Result<Vec<trip_registration::Model>> {
    TripRegistration::find()
        .filter(trip_registration::Column::TripId.eq(trip_id))
        .order_by_desc(trip_registration::Column::RegistrationDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all registrations submitted by a participant, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_registrations_for_participant(
    db: &DatabaseConnection,
    participant_id: i64,
) -> Result<Vec<trip_registration::Model>> {
    TripRegistration::find()
        .filter(trip_registration::Column::ParticipantId.eq(participant_id))
        .order_by_desc(trip_registration::Column::RegistrationDate)
        .all(db)
        .await
        .map_err(Into::into)
}
