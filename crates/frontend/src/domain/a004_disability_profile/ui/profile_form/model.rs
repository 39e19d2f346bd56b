use crate::shared::api_utils::post_json;
use contracts::domain::a004_disability_profile::aggregate::{
    DisabilityProfileDto, SubmitProfileResponse,
};

/// POST /api/disability_profile
pub async fn submit_profile(dto: &DisabilityProfileDto) -> Result<SubmitProfileResponse, String> {
    let response = post_json("/api/disability_profile", dto).await?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<SubmitProfileResponse>()
        .await
        .map_err(|e| e.to_string())
}
