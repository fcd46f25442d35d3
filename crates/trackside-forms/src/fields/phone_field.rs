use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::validators::UkPhoneValidator;

/// PhoneField for UK phone number input
///
/// Whitespace is stripped before matching; the cleaned value keeps the
/// user's original spacing so hosts can echo it back unchanged.
pub struct PhoneField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
}

impl PhoneField {
	/// Create a new PhoneField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::fields::PhoneField;
	///
	/// let field = PhoneField::new("phone".to_string());
	/// assert_eq!(field.name, "phone");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::PhoneInput,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}
}

impl FormField for PhoneField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn set_required(&mut self, required: bool) {
		self.required = required;
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		match value {
			None if self.required => Err(FieldError::required(None)),
			None => Ok(serde_json::Value::Null),
			Some(v) => {
				let s = v
					.as_str()
					.ok_or_else(|| FieldError::Invalid("Expected text".to_string()))?;

				let s = s.trim();

				if s.is_empty() {
					if self.required {
						return Err(FieldError::required(None));
					}
					return Ok(serde_json::Value::Null);
				}

				UkPhoneValidator::new().validate(s)?;

				Ok(serde_json::json!(s))
			}
		}
	}
}
