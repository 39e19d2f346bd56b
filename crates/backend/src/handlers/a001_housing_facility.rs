use axum::{extract::Path, Json};
use contracts::domain::a001_housing_facility::aggregate::{FacilityId, HousingFacility};

use crate::domain::a001_housing_facility;

/// GET /api/housing
pub async fn list_all() -> Result<Json<Vec<HousingFacility>>, axum::http::StatusCode> {
    match a001_housing_facility::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list housing facilities: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/housing/:id
pub async fn get_by_id(
    Path(id): Path<u32>,
) -> Result<Json<HousingFacility>, axum::http::StatusCode> {
    match a001_housing_facility::service::get_by_id(FacilityId(id)).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load housing facility {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
