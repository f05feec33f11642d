//! Unified error types for the trip-booking system.
//!
//! Business errors (missing records, a fully booked trip, rejected input) are
//! distinct variants so callers can react to them; storage failures are
//! propagated unchanged through the `Database` variant.

use thiserror::Error;

/// All errors produced by the configuration, core, and API layers.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected user input (empty name, negative capacity, inverted dates, ...)
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of what was rejected
        message: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration problem
        message: String,
    },

    /// The referenced trip does not exist
    #[error("Trip {id} not found")]
    TripNotFound {
        /// The trip id that was looked up
        id: i64,
    },

    /// The referenced participant does not exist
    #[error("Participant {id} not found")]
    ParticipantNotFound {
        /// The participant id that was looked up
        id: i64,
    },

    /// The referenced registration does not exist
    #[error("Registration {id} not found")]
    RegistrationNotFound {
        /// The registration id that was looked up
        id: i64,
    },

    /// The trip already has `max_participants` non-cancelled registrations
    #[error("Trip {trip_id} is fully booked ({max_participants} participants)")]
    CapacityExceeded {
        /// The trip that rejected the registration
        trip_id: i64,
        /// The trip's participant limit
        max_participants: i32,
    },

    /// Underlying storage failure, propagated unchanged
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
