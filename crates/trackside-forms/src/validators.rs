//! Standalone validators backing the typed form fields
//!
//! Each validator owns its rule and an optional custom message; the field
//! types delegate to these so hosts can also run them against raw input
//! without constructing a field.

use crate::field::{FieldError, FieldResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// Intentionally simple local@domain.tld shape. Anything stricter rejects
// real addresses; deliverability is the webhook's problem.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// UK phone numbers after whitespace stripping: 0-prefixed 10-11 digit
// numbers, or +44 followed by 9-10 digits (mobile and landline variants).
static UK_PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?:0\d{9,10}|\+44\d{9,10})$").expect("UK_PHONE_REGEX: invalid regex pattern")
});

/// Earliest birth year accepted for a subject's date of birth.
pub const MIN_BIRTH_YEAR: i32 = 1920;

/// Validates that a string value has a plausible email shape.
///
/// # Examples
///
/// ```
/// use trackside_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("jane@example.com").is_ok());
/// assert!(validator.validate("jane@example").is_err());
/// assert!(validator.validate("not an email").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a string value is a UK phone number.
///
/// Whitespace is stripped before matching, so `07123 456 789` and
/// `+44 7123 456789` both pass.
///
/// # Examples
///
/// ```
/// use trackside_forms::validators::UkPhoneValidator;
///
/// let validator = UkPhoneValidator::new();
/// assert!(validator.validate("07123 456789").is_ok());
/// assert!(validator.validate("+44 7123 456789").is_ok());
/// assert!(validator.validate("020 7946 0958").is_ok());
/// assert!(validator.validate("12345").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UkPhoneValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl UkPhoneValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let stripped: String = value.split_whitespace().collect();
		if UK_PHONE_REGEX.is_match(&stripped) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid UK phone number");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for UkPhoneValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates a subject's date of birth against a reference date.
///
/// Rejects dates after the reference date and years before
/// [`MIN_BIRTH_YEAR`]. The reference date is injected so callers (and
/// tests) are not tied to the wall clock.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trackside_forms::validators::BirthDateValidator;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let validator = BirthDateValidator::new(today);
///
/// let dob = NaiveDate::from_ymd_opt(2008, 6, 15).unwrap();
/// assert!(validator.validate(dob).is_ok());
///
/// let future = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
/// assert!(validator.validate(future).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BirthDateValidator {
	reference: NaiveDate,
}

impl BirthDateValidator {
	pub fn new(reference: NaiveDate) -> Self {
		Self { reference }
	}

	pub fn validate(&self, date_of_birth: NaiveDate) -> FieldResult<()> {
		if date_of_birth > self.reference {
			return Err(FieldError::Validation(
				"Date of birth cannot be in the future".to_string(),
			));
		}
		if date_of_birth.year() < MIN_BIRTH_YEAR {
			return Err(FieldError::Validation(format!(
				"Date of birth cannot be before {}",
				MIN_BIRTH_YEAR
			)));
		}
		Ok(())
	}
}
