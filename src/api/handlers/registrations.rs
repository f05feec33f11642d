//! Registration endpoints.
//!
//! `POST` runs the full admission workflow (existence checks, price
//! computation, capacity enforcement); `DELETE` cancels rather than removes,
//! so booking history survives.

use crate::{
    api::model::{CreateRegistrationRequest, RegistrationResponse, UpdateRegistrationRequest},
    core,
    errors::Error,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::DatabaseConnection;

/// `GET /api/registrations` - lists all registrations, newest first.
pub async fn list_registrations(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<RegistrationResponse>>, Error> {
    let registrations = core::registration::get_all_registrations(&db).await?;
    Ok(Json(
        registrations.into_iter().map(RegistrationResponse::from).collect(),
    ))
}

/// `GET /api/registrations/:registration_id` - one registration or 404.
pub async fn show_registration(
    Path(registration_id): Path<i64>,
    State(db): State<DatabaseConnection>,
) -> Result<Json<RegistrationResponse>, Error> {
    let registration = core::registration::get_registration_by_id(&db, registration_id)
        .await?
        .ok_or(Error::RegistrationNotFound {
            id: registration_id,
        })?;
    Ok(Json(RegistrationResponse::from(registration)))
}

/// `POST /api/registrations` - submits a booking for admission.
///
/// Returns 201 with the admitted registration (including the computed
/// price), 404 when the trip or participant does not exist, and 400 with
/// code `TRIP_FULL` when the trip is at capacity.
pub async fn create_registration(
    State(db): State<DatabaseConnection>,
    Json(request): Json<CreateRegistrationRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), Error> {
    let registration = core::registration::submit_registration(
        &db,
        request.trip_id,
        request.participant_id,
        request.single_room_requested,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    ))
}

/// `PUT /api/registrations/:registration_id` - status or flag changes.
pub async fn update_registration(
    Path(registration_id): Path<i64>,
    State(db): State<DatabaseConnection>,
    Json(request): Json<UpdateRegistrationRequest>,
) -> Result<StatusCode, Error> {
    core::registration::update_registration(&db, registration_id, request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/registrations/:registration_id` - cancels the registration.
pub async fn delete_registration(
    Path(registration_id): Path<i64>,
    State(db): State<DatabaseConnection>,
) -> Result<StatusCode, Error> {
    core::registration::cancel_registration(&db, registration_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::api::{self, model::RegistrationResponse};
    use crate::entities::RegistrationStatus;
    use crate::test_utils::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    async fn post_registration(
        app: axum::Router,
        trip_id: i64,
        participant_id: i64,
        single_room: bool,
    ) -> axum::response::Response {
        let payload = serde_json::json!({
            "tripId": trip_id,
            "participantId": participant_id,
            "singleRoomRequested": single_room
        });
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/registrations")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_registration_returns_201_with_price() {
        let db = setup_test_db().await.unwrap();
        let trip = create_test_trip(&db, "Dolomites").await.unwrap();
        let participant = create_test_participant(&db, "Anna", "Rider").await.unwrap();
        let app = api::app(db);

        let response = post_registration(app, trip.id, participant.id, true).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let registration: RegistrationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(registration.status, RegistrationStatus::Pending);
        assert!(registration.single_room_requested);
        assert_eq!(registration.total_price, Decimal::new(290_000, 2));
    }

    #[tokio::test]
    async fn test_create_registration_for_missing_trip_is_404() {
        let db = setup_test_db().await.unwrap();
        let participant = create_test_participant(&db, "Anna", "Rider").await.unwrap();
        let app = api::app(db);

        let response = post_registration(app, 999, participant.id, false).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["code"], "TRIP_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_full_trip_rejects_with_trip_full() {
        let db = setup_test_db().await.unwrap();
        let trip = create_custom_trip(&db, "Solo Trip", 1).await.unwrap();
        let anna = create_test_participant(&db, "Anna", "Rider").await.unwrap();
        let ben = create_test_participant(&db, "Ben", "Walker").await.unwrap();
        let app = api::app(db);

        let first = post_registration(app.clone(), trip.id, anna.id, false).await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = post_registration(app, trip.id, ben.id, false).await;
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(second.into_body(), usize::MAX).await.unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["code"], "TRIP_FULL");
    }

    #[tokio::test]
    async fn test_delete_cancels_instead_of_removing() {
        let db = setup_test_db().await.unwrap();
        let trip = create_test_trip(&db, "Dolomites").await.unwrap();
        let participant = create_test_participant(&db, "Anna", "Rider").await.unwrap();
        let app = api::app(db.clone());

        let created = post_registration(app.clone(), trip.id, participant.id, false).await;
        let body = axum::body::to_bytes(created.into_body(), usize::MAX).await.unwrap();
        let registration: RegistrationResponse = serde_json::from_slice(&body).unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/registrations/{}", registration.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Still retrievable, just cancelled
        let show = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/registrations/{}", registration.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(show.status(), StatusCode::OK);
        let body = axum::body::to_bytes(show.into_body(), usize::MAX).await.unwrap();
        let cancelled: RegistrationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(cancelled.status, RegistrationStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_update_registration_confirms() {
        let db = setup_test_db().await.unwrap();
        let trip = create_test_trip(&db, "Dolomites").await.unwrap();
        let participant = create_test_participant(&db, "Anna", "Rider").await.unwrap();
        let app = api::app(db.clone());

        let created = post_registration(app.clone(), trip.id, participant.id, false).await;
        let body = axum::body::to_bytes(created.into_body(), usize::MAX).await.unwrap();
        let registration: RegistrationResponse = serde_json::from_slice(&body).unwrap();

        let payload = serde_json::json!({ "status": "confirmed" });
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/registrations/{}", registration.id))
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let confirmed = crate::core::registration::get_registration_by_id(&db, registration.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(confirmed.status, RegistrationStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_show_missing_registration_is_404() {
        let db = setup_test_db().await.unwrap();
        let app = api::app(db);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/registrations/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
