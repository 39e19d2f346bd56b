use super::repository;
use contracts::domain::a004_disability_profile::aggregate::{
    DisabilityProfile, DisabilityProfileDto, ProfileId,
};

/// Validate and store the answers of the jobs profile form
pub async fn create(dto: DisabilityProfileDto) -> anyhow::Result<ProfileId> {
    let aggregate = DisabilityProfile::new_for_insert(&dto)
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Disability profile {} stored ({})",
        id.value(),
        aggregate.disability_type.display_name()
    );
    Ok(id)
}

pub async fn get_by_id(id: &ProfileId) -> anyhow::Result<Option<DisabilityProfile>> {
    repository::get_by_id(id).await
}
