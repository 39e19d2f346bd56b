use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a003_donation::aggregate::{
    MonthlyDonationTotals, RecentDonation, SubmitDonationRequest, SubmitDonationResponse,
};

/// GET /api/donations/recent?limit=N
pub async fn fetch_recent_donations(limit: u32) -> Result<Vec<RecentDonation>, String> {
    get_json(&format!("/api/donations/recent?limit={}", limit)).await
}

/// GET /api/donations/monthly
pub async fn fetch_monthly_totals() -> Result<MonthlyDonationTotals, String> {
    get_json("/api/donations/monthly").await
}

/// POST /api/donations
///
/// A 400 answer still carries `{success: false, error}` and is returned as `Ok`.
pub async fn submit_donation(
    request: &SubmitDonationRequest,
) -> Result<SubmitDonationResponse, String> {
    let response = post_json("/api/donations", request).await?;

    let status = response.status();
    match response.json::<SubmitDonationResponse>().await {
        Ok(body) => Ok(body),
        Err(_) if !(200..300).contains(&status) => Err(format!("HTTP {}", status)),
        Err(e) => Err(e.to_string()),
    }
}
