use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a003_donation::aggregate::{
    MonthlyDonationTotals, RecentDonation, SubmitDonationRequest, SubmitDonationResponse,
};
use serde::Deserialize;

use crate::domain::a003_donation::service::{self, SubmitError};
use crate::shared::config;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u64>,
}

/// GET /api/donations/recent?limit=N
pub async fn recent(
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<RecentDonation>>, StatusCode> {
    let limit = service::effective_limit(query.limit, config::current().donations.recent_limit);
    match service::recent(limit).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to load recent donations: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/donations/monthly
pub async fn monthly() -> Result<Json<MonthlyDonationTotals>, StatusCode> {
    let target = config::current().donations.monthly_target;
    match service::monthly_totals(target).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to compute monthly totals: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/donations
pub async fn submit(
    Json(request): Json<SubmitDonationRequest>,
) -> (StatusCode, Json<SubmitDonationResponse>) {
    match service::submit(request).await {
        Ok(id) => (StatusCode::OK, Json(SubmitDonationResponse::accepted(id))),
        Err(SubmitError::Invalid(e)) => {
            tracing::warn!("Donation rejected: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(SubmitDonationResponse::rejected(e.to_string())),
            )
        }
        Err(SubmitError::Storage(e)) => {
            tracing::error!("Failed to store donation: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitDonationResponse::rejected(
                    "Could not record the donation, please try again.",
                )),
            )
        }
    }
}
