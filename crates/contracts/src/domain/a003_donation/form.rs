//! Donation form state and the submit lifecycle around it.

use super::aggregate::{SubmitDonationRequest, SubmitDonationResponse};
use super::validation::{is_valid_email, parse_amount, DonationField, DonationValidationError};
use crate::shared::format::format_rupees;

/// Preset amounts offered as buttons, in rupees
pub const DONATION_PRESETS: [i64; 5] = [100, 500, 1000, 2500, 5000];

/// Amount selected when the form opens and after a reset
pub const DEFAULT_DONATION_AMOUNT: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountChoice {
    Preset(i64),
    /// Amount typed into the custom field
    Custom,
}

impl AmountChoice {
    pub fn label(&self) -> String {
        match self {
            AmountChoice::Preset(v) => format_rupees(*v),
            AmountChoice::Custom => "Custom".to_string(),
        }
    }

    /// Every button, presets first
    pub fn all() -> Vec<AmountChoice> {
        DONATION_PRESETS
            .iter()
            .map(|v| AmountChoice::Preset(*v))
            .chain(std::iter::once(AmountChoice::Custom))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationForm {
    pub amount: AmountChoice,
    /// Only read when `amount` is `Custom`
    pub custom_amount: String,
    pub full_name: String,
    pub email: String,
    pub is_anonymous: bool,
}

impl Default for DonationForm {
    fn default() -> Self {
        Self {
            amount: AmountChoice::Preset(DEFAULT_DONATION_AMOUNT),
            custom_amount: String::new(),
            full_name: String::new(),
            email: String::new(),
            is_anonymous: false,
        }
    }
}

impl DonationForm {
    /// Check the form and build the request.
    ///
    /// Required fields are checked first (amount, name, email), then the
    /// email shape, then the custom amount value.
    pub fn validate(&self) -> Result<SubmitDonationRequest, DonationValidationError> {
        if self.amount == AmountChoice::Custom && self.custom_amount.trim().is_empty() {
            return Err(DonationValidationError::MissingField(DonationField::Amount));
        }
        if self.full_name.trim().is_empty() {
            return Err(DonationValidationError::MissingField(DonationField::FullName));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DonationValidationError::MissingField(DonationField::Email));
        }
        if !is_valid_email(email) {
            return Err(DonationValidationError::InvalidEmail);
        }
        let amount = match self.amount {
            AmountChoice::Preset(v) => v,
            AmountChoice::Custom => parse_amount(&self.custom_amount)?,
        };

        Ok(SubmitDonationRequest {
            amount,
            donor_name: self.full_name.trim().to_string(),
            donor_email: email.to_string(),
            is_monthly: false,
            is_anonymous: self.is_anonymous,
            message: String::new(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Why a submit did not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submit has not resolved yet
    InFlight,
    Invalid(DonationValidationError),
}

/// How a submit ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Recorded; the form was reset and the aggregates must be reloaded
    Accepted { amount: i64 },
    /// The server answered but refused the donation
    Declined(String),
    /// Transport error; the form is left as it was
    Failed,
}

impl SubmitOutcome {
    /// Whether recent donors and monthly totals should be fetched again
    pub fn needs_refresh(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    pub fn title(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted { .. } => "Thank you for your support!",
            SubmitOutcome::Declined(_) | SubmitOutcome::Failed => "Donation failed",
        }
    }

    pub fn description(&self) -> String {
        match self {
            SubmitOutcome::Accepted { amount } => format!(
                "Your contribution of {} will help us make a difference.",
                format_rupees(*amount)
            ),
            SubmitOutcome::Declined(reason) => reason.clone(),
            SubmitOutcome::Failed => {
                "There was an error processing your support. Please try again.".to_string()
            }
        }
    }
}

/// Form plus the in-flight flag driving the submit button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationSubmission {
    pub form: DonationForm,
    pub is_submitting: bool,
}

impl DonationSubmission {
    /// Validate and mark the submit as in flight.
    ///
    /// Nothing may be sent unless this returns `Ok`.
    pub fn begin(&mut self) -> Result<SubmitDonationRequest, SubmitBlocked> {
        if self.is_submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let request = self.form.validate().map_err(SubmitBlocked::Invalid)?;
        self.is_submitting = true;
        Ok(request)
    }

    /// Record the server answer for the request returned by [`begin`](Self::begin).
    pub fn finish(
        &mut self,
        request: &SubmitDonationRequest,
        result: Result<SubmitDonationResponse, String>,
    ) -> SubmitOutcome {
        self.is_submitting = false;
        match result {
            Ok(resp) if resp.success => {
                self.form.reset();
                SubmitOutcome::Accepted {
                    amount: request.amount,
                }
            }
            Ok(resp) => SubmitOutcome::Declined(
                resp.error
                    .unwrap_or_else(|| "Your donation could not be recorded.".to_string()),
            ),
            Err(_) => SubmitOutcome::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> DonationForm {
        DonationForm {
            full_name: "Meera".into(),
            email: "meera@example.com".into(),
            ..DonationForm::default()
        }
    }

    #[test]
    fn test_default_amount_is_500() {
        let form = DonationForm::default();
        assert_eq!(form.amount, AmountChoice::Preset(500));
        assert_eq!(AmountChoice::all().len(), 6);
        assert_eq!(AmountChoice::Preset(1000).label(), "₹1,000");
    }

    #[test]
    fn test_missing_name_is_rejected_before_send() {
        let mut submission = DonationSubmission::default();
        submission.form.email = "a@b.com".into();

        let result = submission.begin();
        assert_eq!(
            result,
            Err(SubmitBlocked::Invalid(DonationValidationError::MissingField(
                DonationField::FullName
            )))
        );
        assert!(!submission.is_submitting);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut form = filled_form();
        form.email = "meera@example".into();
        assert_eq!(form.validate(), Err(DonationValidationError::InvalidEmail));
    }

    #[test]
    fn test_custom_amount_must_be_given() {
        let mut form = filled_form();
        form.amount = AmountChoice::Custom;
        assert_eq!(
            form.validate(),
            Err(DonationValidationError::MissingField(DonationField::Amount))
        );

        form.custom_amount = "abc".into();
        assert_eq!(form.validate(), Err(DonationValidationError::InvalidAmount));

        form.custom_amount = "1200".into();
        assert_eq!(form.validate().unwrap().amount, 1200);
    }

    #[test]
    fn test_request_carries_form_values() {
        let mut form = filled_form();
        form.amount = AmountChoice::Preset(2500);
        form.is_anonymous = true;
        let request = form.validate().unwrap();
        assert_eq!(request.amount, 2500);
        assert_eq!(request.donor_name, "Meera");
        assert!(request.is_anonymous);
        assert!(!request.is_monthly);
        assert!(request.message.is_empty());
    }

    #[test]
    fn test_success_resets_form_and_asks_for_one_refresh() {
        let mut submission = DonationSubmission {
            form: DonationForm {
                amount: AmountChoice::Preset(1000),
                is_anonymous: true,
                ..filled_form()
            },
            is_submitting: false,
        };
        let request = submission.begin().unwrap();
        assert!(submission.is_submitting);
        assert_eq!(submission.begin(), Err(SubmitBlocked::InFlight));

        let outcome = submission.finish(
            &request,
            Ok(SubmitDonationResponse {
                success: true,
                id: None,
                error: None,
            }),
        );
        assert_eq!(outcome, SubmitOutcome::Accepted { amount: 1000 });
        assert!(outcome.needs_refresh());
        assert_eq!(submission.form, DonationForm::default());
        assert!(!submission.is_submitting);
        assert_eq!(
            outcome.description(),
            "Your contribution of ₹1,000 will help us make a difference."
        );
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut submission = DonationSubmission {
            form: filled_form(),
            is_submitting: false,
        };
        let request = submission.begin().unwrap();
        let outcome = submission.finish(&request, Err("network down".into()));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!outcome.needs_refresh());
        assert_eq!(submission.form, filled_form());
        assert!(!submission.is_submitting);
    }

    #[test]
    fn test_declined_reports_server_reason() {
        let mut submission = DonationSubmission {
            form: filled_form(),
            is_submitting: false,
        };
        let request = submission.begin().unwrap();
        let outcome = submission.finish(
            &request,
            Ok(SubmitDonationResponse::rejected("Please enter a valid email address.")),
        );
        assert_eq!(outcome.title(), "Donation failed");
        assert_eq!(outcome.description(), "Please enter a valid email address.");
        assert_eq!(submission.form, filled_form());
    }
}
