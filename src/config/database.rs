//! Database connection and schema setup.
//!
//! The schema is generated straight from the entity definitions with
//! `Schema::create_table_from_entity`; there are no hand-written migrations.
//! Tables are created idempotently at startup, so a fresh `SQLite` file and an
//! existing one go through the same path.

use crate::entities::{Hotel, Participant, Trip, TripRegistration};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Resolves the database URL: `DATABASE_URL` if set, otherwise a local
/// `SQLite` file under `data/`.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/tourbook.sqlite".to_string())
}

/// Opens the database connection for [`get_database_url`].
///
/// # Errors
/// Returns an error if the database cannot be reached or opened.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the trips, participants, hotels, and trip registration tables from
/// their entity definitions.
///
/// # Errors
/// Returns an error if a table cannot be created.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut trip_table = schema.create_table_from_entity(Trip);
    let mut participant_table = schema.create_table_from_entity(Participant);
    let mut hotel_table = schema.create_table_from_entity(Hotel);
    let mut registration_table = schema.create_table_from_entity(TripRegistration);

    db.execute(builder.build(trip_table.if_not_exists())).await?;
    db.execute(builder.build(participant_table.if_not_exists())).await?;
    db.execute(builder.build(hotel_table.if_not_exists())).await?;
    db.execute(builder.build(registration_table.if_not_exists())).await?;

    Ok(())
}
