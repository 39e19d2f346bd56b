use chrono::{DateTime, Datelike, TimeZone, Utc};
use contracts::domain::a003_donation::aggregate::{
    Donation, DonationId, MonthlyDonationTotals, RecentDonation, SubmitDonationRequest,
};
use contracts::domain::a003_donation::validation::DonationValidationError;
use contracts::shared::format::format_rupees;

use super::repository;

/// Upper bound for the recent donors query
pub const MAX_RECENT_LIMIT: u64 = 20;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] DonationValidationError),
    #[error("storage error: {0}")]
    Storage(anyhow::Error),
}

/// "just now", "5 minutes ago", "2 hours ago", "3 days ago"
pub fn format_relative_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    let (value, unit) = if minutes < 60 {
        (minutes, "minute")
    } else if elapsed.num_hours() < 24 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{} {}{} ago", value, unit, plural)
}

/// First instant of the calendar month containing `now`
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

pub fn to_recent(donation: &Donation, now: DateTime<Utc>) -> RecentDonation {
    RecentDonation {
        name: donation.public_name(),
        amount: format_rupees(donation.amount),
        time: format_relative_time(now, donation.created_at),
    }
}

/// Clamp a client supplied limit to 1..=MAX_RECENT_LIMIT
pub fn effective_limit(requested: Option<u64>, default_limit: u64) -> u64 {
    requested
        .unwrap_or(default_limit)
        .clamp(1, MAX_RECENT_LIMIT)
}

pub async fn recent(limit: u64) -> anyhow::Result<Vec<RecentDonation>> {
    let now = Utc::now();
    let donations = repository::list_recent(limit).await?;
    Ok(donations.iter().map(|d| to_recent(d, now)).collect())
}

pub async fn monthly_totals(target: i64) -> anyhow::Result<MonthlyDonationTotals> {
    let since = month_start(Utc::now());
    let total = repository::amounts_since(since)
        .await?
        .into_iter()
        .fold(0i64, |acc, amount| acc.saturating_add(amount));
    Ok(MonthlyDonationTotals { total, target })
}

pub async fn submit(request: SubmitDonationRequest) -> Result<DonationId, SubmitError> {
    request.validate()?;
    let donation = Donation::new_for_insert(&request);
    let id = repository::insert(&donation)
        .await
        .map_err(SubmitError::Storage)?;
    tracing::info!(
        "Donation {} recorded: amount={}, monthly={}, anonymous={}",
        id.value(),
        donation.amount,
        donation.is_monthly,
        donation.is_anonymous
    );
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = at(2024, 5, 10, 12, 0);
        assert_eq!(format_relative_time(now, now), "just now");
        assert_eq!(format_relative_time(now, now - Duration::seconds(59)), "just now");
        assert_eq!(format_relative_time(now, now - Duration::minutes(1)), "1 minute ago");
        assert_eq!(format_relative_time(now, now - Duration::minutes(5)), "5 minutes ago");
        assert_eq!(format_relative_time(now, now - Duration::hours(2)), "2 hours ago");
        assert_eq!(format_relative_time(now, now - Duration::days(3)), "3 days ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = at(2024, 5, 10, 12, 0);
        assert_eq!(format_relative_time(now, now + Duration::minutes(3)), "just now");
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(at(2024, 2, 29, 23, 59)), at(2024, 2, 1, 0, 0));
        assert_eq!(month_start(at(2024, 1, 1, 0, 0)), at(2024, 1, 1, 0, 0));
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(effective_limit(None, 3), 3);
        assert_eq!(effective_limit(Some(0), 3), 1);
        assert_eq!(effective_limit(Some(500), 3), MAX_RECENT_LIMIT);
    }

    #[test]
    fn test_recent_entry_hides_anonymous_donor() {
        let request = SubmitDonationRequest {
            amount: 1000,
            donor_name: "Asha Rao".into(),
            donor_email: "asha@example.com".into(),
            is_monthly: false,
            is_anonymous: true,
            message: String::new(),
        };
        let mut donation = Donation::new_for_insert(&request);
        let now = donation.created_at + Duration::hours(2);
        let entry = to_recent(&donation, now);
        assert_eq!(entry.name, "Anonymous");
        assert_eq!(entry.amount, "₹1,000");
        assert_eq!(entry.time, "2 hours ago");

        donation.is_anonymous = false;
        assert_eq!(to_recent(&donation, now).name, "Asha Rao");
    }

    #[test]
    fn test_submit_error_wraps_validation_and_storage() {
        use std::error::Error;

        let invalid: SubmitError = DonationValidationError::InvalidEmail.into();
        assert!(matches!(
            invalid,
            SubmitError::Invalid(DonationValidationError::InvalidEmail)
        ));
        assert_eq!(invalid.to_string(), "Please enter a valid email address.");
        assert!(invalid.source().is_some());

        let storage = SubmitError::Storage(anyhow::anyhow!("disk full"));
        assert_eq!(storage.to_string(), "storage error: disk full");
    }
}
