use super::repository;
use contracts::domain::a001_housing_facility::aggregate::{FacilityId, HousingFacility};
use contracts::domain::a001_housing_facility::catalog::builtin_facilities;
use contracts::shared::catalog::CatalogSource;

/// Fill an empty table with the built-in catalog
pub async fn seed_if_empty() -> anyhow::Result<usize> {
    if repository::count().await? > 0 {
        return Ok(0);
    }
    let catalog = builtin_facilities();
    for facility in catalog.records() {
        repository::insert(facility).await?;
    }
    tracing::info!("Seeded {} housing facilities", catalog.records().len());
    Ok(catalog.records().len())
}

pub async fn list_all() -> anyhow::Result<Vec<HousingFacility>> {
    repository::list_all().await
}

pub async fn get_by_id(id: FacilityId) -> anyhow::Result<Option<HousingFacility>> {
    repository::get_by_id(id).await
}
