use axum::Json;
use contracts::domain::a002_care_home::aggregate::CareHome;

use crate::domain::a002_care_home;

/// GET /api/care_homes
pub async fn list_all() -> Result<Json<Vec<CareHome>>, axum::http::StatusCode> {
    match a002_care_home::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list care homes: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
