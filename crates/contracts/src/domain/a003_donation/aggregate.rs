use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonationId(pub Uuid);

impl DonationId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for DonationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DonationId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A recorded donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: DonationId,
    /// Whole rupees
    pub amount: i64,
    pub donor_name: String,
    pub donor_email: String,
    pub is_monthly: bool,
    pub is_anonymous: bool,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    pub fn new_for_insert(request: &SubmitDonationRequest) -> Self {
        Self {
            id: DonationId::new_v4(),
            amount: request.amount,
            donor_name: request.donor_name.trim().to_string(),
            donor_email: request.donor_email.trim().to_string(),
            is_monthly: request.is_monthly,
            is_anonymous: request.is_anonymous,
            message: request.message.clone(),
            created_at: Utc::now(),
        }
    }

    /// Name shown in the recent donors list
    pub fn public_name(&self) -> String {
        if self.is_anonymous {
            "Anonymous".to_string()
        } else {
            self.donor_name.clone()
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// POST /api/donations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitDonationRequest {
    pub amount: i64,
    pub donor_name: String,
    pub donor_email: String,
    #[serde(default)]
    pub is_monthly: bool,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitDonationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitDonationResponse {
    pub fn accepted(id: DonationId) -> Self {
        Self {
            success: true,
            id: Some(id.as_string()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(error.into()),
        }
    }
}

/// Entry of the "Recent Donors" list, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentDonation {
    pub name: String,
    /// "₹1,000"
    pub amount: String,
    /// "2 hours ago"
    pub time: String,
}

/// Donations collected this month against the monthly goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDonationTotals {
    pub total: i64,
    pub target: i64,
}

impl Default for MonthlyDonationTotals {
    fn default() -> Self {
        Self {
            total: 0,
            target: DEFAULT_MONTHLY_TARGET,
        }
    }
}

/// Goal shown before the first totals arrive
pub const DEFAULT_MONTHLY_TARGET: i64 = 100_000;

impl MonthlyDonationTotals {
    pub fn progress_percentage(&self) -> u8 {
        progress_percentage(self.total, self.target)
    }
}

/// `min(round(total / target * 100), 100)`, clamped to 0..=100.
///
/// A zero or negative target gives 0.
pub fn progress_percentage(total: i64, target: i64) -> u8 {
    if target <= 0 || total <= 0 {
        return 0;
    }
    let pct = (total as f64 / target as f64 * 100.0).round();
    pct.min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage(0, 100_000), 0);
        assert_eq!(progress_percentage(25_000, 100_000), 25);
        assert_eq!(progress_percentage(33_333, 100_000), 33);
        assert_eq!(progress_percentage(66_667, 100_000), 67);
        assert_eq!(progress_percentage(250_000, 100_000), 100);
        assert_eq!(progress_percentage(500, 0), 0);
        assert_eq!(progress_percentage(-50, 100), 0);
        assert_eq!(progress_percentage(50, -100), 0);
    }

    #[test]
    fn test_default_totals() {
        let totals = MonthlyDonationTotals::default();
        assert_eq!(totals.target, 100_000);
        assert_eq!(totals.progress_percentage(), 0);
    }

    #[test]
    fn test_public_name_hides_anonymous_donors() {
        let request = SubmitDonationRequest {
            amount: 500,
            donor_name: "  Asha  ".into(),
            donor_email: "asha@example.com".into(),
            is_monthly: false,
            is_anonymous: false,
            message: String::new(),
        };
        let mut donation = Donation::new_for_insert(&request);
        assert_eq!(donation.public_name(), "Asha");
        donation.is_anonymous = true;
        assert_eq!(donation.public_name(), "Anonymous");
    }

    #[test]
    fn test_response_omits_empty_fields() {
        let json = serde_json::to_string(&SubmitDonationResponse::rejected("bad")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"bad"}"#);
    }
}
