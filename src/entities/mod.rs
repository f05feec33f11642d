//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod hotel;
pub mod participant;
pub mod trip;
pub mod trip_registration;

// Re-export specific types to avoid conflicts
pub use hotel::{Column as HotelColumn, Entity as Hotel, Model as HotelModel};
pub use participant::{Column as ParticipantColumn, Entity as Participant, Model as ParticipantModel};
pub use trip::{Column as TripColumn, Entity as Trip, Model as TripModel};
pub use trip_registration::{
    Column as TripRegistrationColumn, Entity as TripRegistration, Model as TripRegistrationModel,
    RegistrationStatus,
};
