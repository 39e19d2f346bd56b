use crate::shared::api_utils::get_json;
use contracts::domain::a001_housing_facility::aggregate::HousingFacility;
use contracts::domain::a001_housing_facility::catalog::builtin_facilities;

/// GET /api/housing
pub async fn fetch_facilities() -> Result<Vec<HousingFacility>, String> {
    get_json("/api/housing").await
}

/// Catalog from the backend, or the built-in one when it is unreachable or empty
pub async fn load_catalog() -> Vec<HousingFacility> {
    match fetch_facilities().await {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => builtin_facilities().into_records(),
        Err(e) => {
            log::warn!("housing catalog unavailable, using built-in data: {}", e);
            builtin_facilities().into_records()
        }
    }
}
