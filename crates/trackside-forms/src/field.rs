use serde::{Deserialize, Serialize};

/// Error raised when a single field fails validation.
///
/// The variants mirror the three failure classes a field can produce:
/// a required value was missing, the raw value had the wrong shape for
/// the field type, or a well-shaped value broke a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Required(String),
	#[error("{0}")]
	Invalid(String),
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// Required-field error, with the default message unless one is given.
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::FieldError;
	///
	/// assert_eq!(
	/// 	FieldError::required(None).to_string(),
	/// 	"This field is required."
	/// );
	/// assert_eq!(
	/// 	FieldError::required(Some("Please enter a name")).to_string(),
	/// 	"Please enter a name"
	/// );
	/// ```
	pub fn required(message: Option<&str>) -> Self {
		Self::Required(
			message
				.unwrap_or("This field is required.")
				.to_string(),
		)
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Rendering hint telling a host which input control a field expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
	TextInput,
	EmailInput,
	PhoneInput,
	DateInput,
	NumberInput,
	CheckboxInput,
	Select,
}

/// A single named input with validation rules.
///
/// `clean` follows one contract for every field type: a missing or empty
/// value fails with [`FieldError::Required`] when the field is required
/// and cleans to `Null` when it is not; type-specific checks only run on
/// non-empty input. Cleaning never panics.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;
	fn label(&self) -> Option<&str>;
	fn required(&self) -> bool;
	/// Toggle the required flag at runtime.
	///
	/// Conditional sections (the guardian block) flip requiredness as the
	/// subject's computed age changes.
	fn set_required(&mut self, required: bool);
	fn widget(&self) -> &Widget;
	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;
}
