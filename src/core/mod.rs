//! Core business logic for the trip-booking system.
//!
//! These modules are framework-agnostic: every operation takes an explicit
//! database handle and returns a `Result`, so they can be driven by the REST
//! layer, a future CLI, or tests without modification.

/// Hotel operations - per-night lodging entries attached to trips
pub mod hotel;
/// Participant operations - rider records referenced by registrations
pub mod participant;
/// Registration admission, cancellation, and updates
pub mod registration;
/// Trip operations - creation, listing, updates, and soft deletion
pub mod trip;
