use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_disability_profile::aggregate::{
    DisabilityProfile, DisabilityProfileDto, ProfileId, SubmitProfileResponse,
};
use contracts::domain::common::AggregateId;
use serde_json::json;

use crate::domain::a004_disability_profile;

/// POST /api/disability_profile
pub async fn create(
    Json(dto): Json<DisabilityProfileDto>,
) -> Result<Json<SubmitProfileResponse>, (StatusCode, Json<serde_json::Value>)> {
    if let Err(e) = dto.validate() {
        return Err((StatusCode::BAD_REQUEST, Json(json!({ "error": e }))));
    }
    match a004_disability_profile::service::create(dto).await {
        Ok(id) => Ok(Json(SubmitProfileResponse {
            id: id.as_string(),
        })),
        Err(e) => {
            tracing::error!("Failed to store disability profile: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Could not save the profile" })),
            ))
        }
    }
}

/// GET /api/disability_profile/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<DisabilityProfile>, StatusCode> {
    let profile_id = match ProfileId::from_string(&id) {
        Ok(v) => v,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a004_disability_profile::service::get_by_id(&profile_id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load disability profile {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
