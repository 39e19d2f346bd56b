//! Validation rules for donations, shared by the form and the API.

use thiserror::Error;

use super::aggregate::SubmitDonationRequest;

/// Fields that must be filled in before a donation is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationField {
    Amount,
    FullName,
    Email,
}

impl DonationField {
    pub fn label(&self) -> &'static str {
        match self {
            DonationField::Amount => "Amount",
            DonationField::FullName => "Full Name",
            DonationField::Email => "Email Address",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DonationValidationError {
    #[error("Please fill in all required fields.")]
    MissingField(DonationField),

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a whole amount greater than zero.")]
    InvalidAmount,
}

impl DonationValidationError {
    /// Notification title
    pub fn title(&self) -> &'static str {
        match self {
            DonationValidationError::MissingField(_) => "Missing information",
            DonationValidationError::InvalidEmail => "Invalid email",
            DonationValidationError::InvalidAmount => "Invalid amount",
        }
    }

    /// Field to highlight, if any
    pub fn field(&self) -> Option<DonationField> {
        match self {
            DonationValidationError::MissingField(f) => Some(*f),
            DonationValidationError::InvalidEmail => Some(DonationField::Email),
            DonationValidationError::InvalidAmount => Some(DonationField::Amount),
        }
    }
}

/// `local@domain.tld`: no whitespace anywhere, exactly one `@` between
/// non-empty parts, and a dot in the domain with something on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some '.' must have a non-empty host before it and a non-empty tail after it
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Parse a user-typed amount. Only positive whole numbers are accepted.
pub fn parse_amount(raw: &str) -> Result<i64, DonationValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DonationValidationError::MissingField(DonationField::Amount));
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<i64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(DonationValidationError::InvalidAmount),
    }
}

impl SubmitDonationRequest {
    /// Server-side re-check of what the form already validated
    pub fn validate(&self) -> Result<(), DonationValidationError> {
        if self.donor_name.trim().is_empty() {
            return Err(DonationValidationError::MissingField(DonationField::FullName));
        }
        if self.donor_email.trim().is_empty() {
            return Err(DonationValidationError::MissingField(DonationField::Email));
        }
        if !is_valid_email(self.donor_email.trim()) {
            return Err(DonationValidationError::InvalidEmail);
        }
        if self.amount <= 0 {
            return Err(DonationValidationError::InvalidAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b.c m"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("750"), Ok(750));
        assert_eq!(parse_amount(" 1,000 "), Ok(1000));
        assert_eq!(
            parse_amount(""),
            Err(DonationValidationError::MissingField(DonationField::Amount))
        );
        assert_eq!(parse_amount("0"), Err(DonationValidationError::InvalidAmount));
        assert_eq!(parse_amount("-5"), Err(DonationValidationError::InvalidAmount));
        assert_eq!(parse_amount("12.5"), Err(DonationValidationError::InvalidAmount));
        assert_eq!(parse_amount("lots"), Err(DonationValidationError::InvalidAmount));
    }

    #[test]
    fn test_request_validate() {
        let mut request = SubmitDonationRequest {
            amount: 500,
            donor_name: "Ravi".into(),
            donor_email: "ravi@example.com".into(),
            is_monthly: false,
            is_anonymous: false,
            message: String::new(),
        };
        assert!(request.validate().is_ok());

        request.amount = 0;
        assert_eq!(request.validate(), Err(DonationValidationError::InvalidAmount));

        request.amount = 500;
        request.donor_email = "ravi".into();
        assert_eq!(request.validate(), Err(DonationValidationError::InvalidEmail));

        request.donor_name = "   ".into();
        assert_eq!(
            request.validate(),
            Err(DonationValidationError::MissingField(DonationField::FullName))
        );
    }

    #[test]
    fn test_error_titles() {
        let err = DonationValidationError::MissingField(DonationField::FullName);
        assert_eq!(err.title(), "Missing information");
        assert_eq!(err.to_string(), "Please fill in all required fields.");
        assert_eq!(err.field(), Some(DonationField::FullName));
        assert_eq!(DonationValidationError::InvalidEmail.title(), "Invalid email");
    }
}
