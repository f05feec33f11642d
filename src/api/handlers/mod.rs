//! Request handlers, one module per resource.

/// Liveness endpoint
pub mod health;
/// Participant endpoints
pub mod participants;
/// Registration endpoints - the admission workflow lives behind these
pub mod registrations;
/// Trip and hotel endpoints
pub mod trips;
