//! Participant endpoints.

use crate::{
    api::model::{
        CreateParticipantRequest, ParticipantDetailResponse, ParticipantResponse,
        RegistrationResponse, UpdateParticipantRequest,
    },
    core,
    errors::Error,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::DatabaseConnection;

/// `GET /api/participants` - lists all participants.
pub async fn list_participants(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<ParticipantResponse>>, Error> {
    let participants = core::participant::get_all_participants(&db).await?;
    Ok(Json(
        participants.into_iter().map(ParticipantResponse::from).collect(),
    ))
}

/// `GET /api/participants/:participant_id` - one participant with their
/// registration history.
pub async fn show_participant(
    Path(participant_id): Path<i64>,
    State(db): State<DatabaseConnection>,
) -> Result<Json<ParticipantDetailResponse>, Error> {
    let participant = core::participant::get_participant_by_id(&db, participant_id)
        .await?
        .ok_or(Error::ParticipantNotFound { id: participant_id })?;

    let registrations =
        core::registration::get_registrations_for_participant(&db, participant_id).await?;

    Ok(Json(ParticipantDetailResponse {
        participant: ParticipantResponse::from(participant),
        registrations: registrations
            .into_iter()
            .map(RegistrationResponse::from)
            .collect(),
    }))
}

/// `POST /api/participants` - registers a new participant, returning 201.
pub async fn create_participant(
    State(db): State<DatabaseConnection>,
    Json(request): Json<CreateParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantResponse>), Error> {
    let participant = core::participant::create_participant(&db, request.into()).await?;
    Ok((StatusCode::CREATED, Json(ParticipantResponse::from(participant))))
}

/// `PUT /api/participants/:participant_id` - applies field changes.
pub async fn update_participant(
    Path(participant_id): Path<i64>,
    State(db): State<DatabaseConnection>,
    Json(request): Json<UpdateParticipantRequest>,
) -> Result<StatusCode, Error> {
    core::participant::update_participant(&db, participant_id, request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::api;
    use crate::test_utils::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_create_participant_returns_201() {
        let db = setup_test_db().await.unwrap();
        let app = api::app(db);

        let payload = serde_json::json!({
            "firstName": "Anna",
            "lastName": "Rider",
            "birthday": "1990-04-12",
            "email": "anna.rider@example.com",
            "phoneNumber": "+31 6 1234 5678",
            "singleRoomRequest": true
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/participants")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let participant: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(participant["firstName"], "Anna");
        assert_eq!(participant["singleRoomRequest"], true);
    }

    #[tokio::test]
    async fn test_create_participant_with_bad_email_is_rejected() {
        let db = setup_test_db().await.unwrap();
        let app = api::app(db);

        let payload = serde_json::json!({
            "firstName": "Anna",
            "lastName": "Rider",
            "birthday": "1990-04-12",
            "email": "not-an-email",
            "phoneNumber": "+31 6 1234 5678",
            "singleRoomRequest": false
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/participants")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_show_participant_includes_registrations() {
        let db = setup_test_db().await.unwrap();
        let trip = create_test_trip(&db, "Dolomites").await.unwrap();
        let participant = create_test_participant(&db, "Anna", "Rider").await.unwrap();
        crate::core::registration::submit_registration(&db, trip.id, participant.id, false)
            .await
            .unwrap();

        let app = api::app(db);
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/participants/{}", participant.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let detail: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(detail["email"], "anna.rider@example.com");
        assert_eq!(detail["registrations"].as_array().unwrap().len(), 1);

        let missing = app
            .oneshot(
                Request::builder()
                    .uri("/api/participants/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_participant_returns_204() {
        let db = setup_test_db().await.unwrap();
        let participant = create_test_participant(&db, "Anna", "Rider").await.unwrap();
        let app = api::app(db.clone());

        let payload = serde_json::json!({ "phoneNumber": "+31 6 9999 0000" });
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/participants/{}", participant.id))
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let updated = crate::core::participant::get_participant_by_id(&db, participant.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.phone_number, "+31 6 9999 0000");
    }
}
