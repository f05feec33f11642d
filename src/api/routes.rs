//! Router assembly.

use crate::api::handlers::{health, participants, registrations, trips};
use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

fn health_routes() -> Router<DatabaseConnection> {
    Router::new().route("/health", get(health::health_check))
}

fn trip_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route("/api/trips", get(trips::list_trips).post(trips::create_trip))
        .route(
            "/api/trips/:trip_id",
            get(trips::show_trip)
                .put(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .route("/api/trips/:trip_id/hotels", post(trips::add_hotel))
}

fn participant_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route(
            "/api/participants",
            get(participants::list_participants).post(participants::create_participant),
        )
        .route(
            "/api/participants/:participant_id",
            get(participants::show_participant).put(participants::update_participant),
        )
}

fn registration_routes() -> Router<DatabaseConnection> {
    Router::new()
        .route(
            "/api/registrations",
            get(registrations::list_registrations).post(registrations::create_registration),
        )
        .route(
            "/api/registrations/:registration_id",
            get(registrations::show_registration)
                .put(registrations::update_registration)
                .delete(registrations::delete_registration),
        )
}

/// Builds the application router with all routes and shared state.
pub fn app(db: DatabaseConnection) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(trip_routes())
        .merge(participant_routes())
        .merge(registration_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
