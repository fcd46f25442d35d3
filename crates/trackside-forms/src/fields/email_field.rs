use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::validators::EmailValidator;

/// EmailField for email address input
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
}

impl EmailField {
	/// Create a new EmailField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::fields::EmailField;
	///
	/// let field = EmailField::new("email".to_string());
	/// assert_eq!(field.name, "email");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::EmailInput,
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

impl FormField for EmailField {
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

				EmailValidator::new().validate(s)?;

				Ok(serde_json::json!(s))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("jane@example.com")]
	#[case("coach.smith@club.org.uk")]
	fn test_email_field_valid(#[case] input: &str) {
		let field = EmailField::new("email".to_string());

		let result = field.clean(Some(&serde_json::json!(input)));

		assert_eq!(result.unwrap(), serde_json::json!(input));
	}

	#[rstest]
	#[case("no-at-sign")]
	#[case("jane@nodot")]
	#[case("two words@example.com")]
	fn test_email_field_invalid(#[case] input: &str) {
		let field = EmailField::new("email".to_string());

		let result = field.clean(Some(&serde_json::json!(input)));

		assert!(
			matches!(result, Err(FieldError::Validation(_))),
			"Expected '{input}' to be rejected"
		);
	}

	#[test]
	fn test_email_field_required() {
		let field = EmailField::new("email".to_string());

		assert!(field.clean(None).is_err());
		assert!(field.clean(Some(&serde_json::json!(""))).is_err());
	}

	#[test]
	fn test_email_field_optional_empty_is_null() {
		let field = EmailField::new("email".to_string()).optional();

		assert_eq!(field.clean(None).unwrap(), serde_json::Value::Null);
		assert_eq!(
			field.clean(Some(&serde_json::json!(""))).unwrap(),
			serde_json::Value::Null
		);
	}

	#[test]
	fn test_email_field_trims_before_validation() {
		let field = EmailField::new("email".to_string());

		assert_eq!(
			field
				.clean(Some(&serde_json::json!("  jane@example.com  ")))
				.unwrap(),
			serde_json::json!("jane@example.com")
		);
	}
}
