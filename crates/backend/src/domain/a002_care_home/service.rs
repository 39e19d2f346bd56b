use super::repository;
use contracts::domain::a002_care_home::aggregate::{CareHome, CareHomeId};
use contracts::domain::a002_care_home::catalog::builtin_care_homes;
use contracts::shared::catalog::CatalogSource;

/// Fill an empty table with the built-in comparison catalog
pub async fn seed_if_empty() -> anyhow::Result<usize> {
    if repository::count().await? > 0 {
        return Ok(0);
    }
    let catalog = builtin_care_homes();
    for (position, home) in catalog.records().iter().enumerate() {
        repository::insert(home, position as i32).await?;
    }
    tracing::info!("Seeded {} care homes", catalog.records().len());
    Ok(catalog.records().len())
}

pub async fn list_all() -> anyhow::Result<Vec<CareHome>> {
    repository::list_all().await
}

pub async fn get_by_id(id: &CareHomeId) -> anyhow::Result<Option<CareHome>> {
    repository::get_by_id(id).await
}
