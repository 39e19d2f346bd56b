use crate::shared::api_utils::get_json;
use contracts::domain::a002_care_home::aggregate::CareHome;
use contracts::domain::a002_care_home::catalog::builtin_care_homes;

/// GET /api/care_homes
pub async fn fetch_care_homes() -> Result<Vec<CareHome>, String> {
    get_json("/api/care_homes").await
}

/// Catalog from the backend, or the built-in one when it is unreachable or empty
pub async fn load_catalog() -> Vec<CareHome> {
    match fetch_care_homes().await {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => builtin_care_homes().into_records(),
        Err(e) => {
            log::warn!("care home catalog unavailable, using built-in data: {}", e);
            builtin_care_homes().into_records()
        }
    }
}
