//! Participant business logic - Handles all participant-related operations.
//!
//! Provides functions for creating, retrieving, and updating participants.
//! There is deliberately no deletion path: registrations keep referencing
//! their participant for the lifetime of the system.

use crate::{
    entities::{Participant, participant},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields required to create a new participant.
#[derive(Debug, Clone)]
pub struct NewParticipant {
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
    /// Free-form dietary requirements
    pub special_diets: Option<String>,
    /// Default single-room preference
    pub single_room_request: bool,
}

/// Per-field changes applied by [`update_participant`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ParticipantChanges {
    /// New given name
    pub first_name: Option<String>,
    /// New family name
    pub last_name: Option<String>,
    /// New date of birth
    pub birthday: Option<Date>,
    /// New email address
    pub email: Option<String>,
    /// New phone number
    pub phone_number: Option<String>,
    /// New Strava profile link (`Some(None)` clears it)
    pub strava_account_link: Option<Option<String>>,
    /// New dietary requirements (`Some(None)` clears them)
    pub special_diets: Option<Option<String>>,
    /// New default single-room preference
    pub single_room_request: Option<bool>,
}

fn validate(first_name: &str, last_name: &str, email: &str) -> Result<()> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Participant name cannot be empty".to_string(),
        });
    }

    if !email.contains('@') {
        return Err(Error::Validation {
            message: format!("'{email}' is not a valid email address"),
        });
    }

    Ok(())
}

/// Retrieves all participants, ordered alphabetically by last name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_participants(db: &DatabaseConnection) -> Result<Vec<participant::Model>> {
    Participant::find()
        .order_by_asc(participant::Column::LastName)
        .order_by_asc(participant::Column::FirstName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a participant by their unique ID, returning None if not found.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_participant_by_id(
    db: &DatabaseConnection,
    participant_id: i64,
) -> Result<Option<participant::Model>> {
    Participant::find_by_id(participant_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new participant, performing input validation.
///
/// Validates that both name parts are non-empty and the email address looks
/// plausible. Names are stored trimmed.
///
/// # Errors
/// Returns an error if validation fails or the database insert fails.
pub async fn create_participant(
    db: &DatabaseConnection,
    new_participant: NewParticipant,
) -> Result<participant::Model> {
    validate(
        &new_participant.first_name,
        &new_participant.last_name,
        &new_participant.email,
    )?;

    let participant = participant::ActiveModel {
        first_name: Set(new_participant.first_name.trim().to_string()),
        last_name: Set(new_participant.last_name.trim().to_string()),
        birthday: Set(new_participant.birthday),
        email: Set(new_participant.email),
        phone_number: Set(new_participant.phone_number),
        strava_account_link: Set(new_participant.strava_account_link),
        special_diets: Set(new_participant.special_diets),
        single_room_request: Set(new_participant.single_room_request),
        ..Default::default()
    };

    participant.insert(db).await.map_err(Into::into)
}

/// Updates an existing participant with the provided field changes.
///
/// The resulting record is re-validated against the same rules as creation.
///
/// # Errors
/// Returns `ParticipantNotFound` if the participant does not exist, a
/// validation error if the changes are invalid, or a database error.
pub async fn update_participant(
    db: &DatabaseConnection,
    participant_id: i64,
    changes: ParticipantChanges,
) -> Result<participant::Model> {
    let participant = Participant::find_by_id(participant_id)
        .one(db)
        .await?
        .ok_or(Error::ParticipantNotFound { id: participant_id })?;

    let first_name = changes
        .first_name
        .unwrap_or_else(|| participant.first_name.clone());
    let last_name = changes
        .last_name
        .unwrap_or_else(|| participant.last_name.clone());
    let email = changes.email.unwrap_or_else(|| participant.email.clone());

    validate(&first_name, &last_name, &email)?;

    let mut active: participant::ActiveModel = participant.into();
    active.first_name = Set(first_name.trim().to_string());
    active.last_name = Set(last_name.trim().to_string());
    active.email = Set(email);
    if let Some(birthday) = changes.birthday {
        active.birthday = Set(birthday);
    }
    if let Some(phone_number) = changes.phone_number {
        active.phone_number = Set(phone_number);
    }
    if let Some(strava_account_link) = changes.strava_account_link {
        active.strava_account_link = Set(strava_account_link);
    }
    if let Some(special_diets) = changes.special_diets {
        active.special_diets = Set(special_diets);
    }
    if let Some(single_room_request) = changes.single_room_request {
        active.single_room_request = Set(single_room_request);
    }

    active.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_participant_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Empty first name
        let mut new_participant = default_new_participant("", "Rider");
        let result = create_participant(&db, new_participant).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        // Whitespace-only last name
        new_participant = default_new_participant("Anna", "   ");
        let result = create_participant(&db, new_participant).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        // Email without an @
        new_participant = default_new_participant("Anna", "Rider");
        new_participant.email = "not-an-email".to_string();
        let result = create_participant(&db, new_participant).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        // Rejected input never reaches the database
        assert!(get_all_participants(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_participant_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let participant = create_test_participant(&db, "Anna", "Rider").await?;

        assert_eq!(participant.first_name, "Anna");
        assert_eq!(participant.last_name, "Rider");
        assert_eq!(participant.email, "anna.rider@example.com");
        assert!(!participant.single_room_request);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_participants_ordering() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_participant(&db, "Zoe", "Young").await?;
        create_test_participant(&db, "Anna", "Albers").await?;

        let participants = get_all_participants(&db).await?;
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].last_name, "Albers");
        assert_eq!(participants[1].last_name, "Young");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_participant_by_id_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_test_participant(&db, "Anna", "Rider").await?;

        let found = get_participant_by_id(&db, created.id).await?;
        assert!(found.is_some());
        assert_eq!(found.unwrap().id, created.id);

        let not_found = get_participant_by_id(&db, 999).await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_participant_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let participant = create_test_participant(&db, "Anna", "Rider").await?;

        let updated = update_participant(
            &db,
            participant.id,
            ParticipantChanges {
                email: Some("anna.new@example.com".to_string()),
                special_diets: Some(Some("vegetarian".to_string())),
                single_room_request: Some(true),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(updated.email, "anna.new@example.com");
        assert_eq!(updated.special_diets, Some("vegetarian".to_string()));
        assert!(updated.single_room_request);
        assert_eq!(updated.first_name, "Anna");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_participant_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_participant(&db, 999, ParticipantChanges::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ParticipantNotFound { id: 999 }
        ));

        Ok(())
    }
}
