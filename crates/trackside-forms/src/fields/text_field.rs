use crate::field::{FieldError, FieldResult, FormField, Widget};

/// TextField for free-text input
///
/// Values are trimmed before any other check; input that is empty after
/// trimming behaves exactly like missing input.
pub struct TextField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub max_length: Option<usize>,
}

impl TextField {
	/// Create a new TextField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::fields::TextField;
	///
	/// let field = TextField::new("first_name".to_string());
	/// assert_eq!(field.name, "first_name");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::TextInput,
			max_length: None,
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

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}
}

impl FormField for TextField {
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

				if let Some(max) = self.max_length
					&& s.chars().count() > max
				{
					return Err(FieldError::Validation(format!(
						"Ensure this value has at most {} characters",
						max
					)));
				}

				Ok(serde_json::json!(s))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_text_field_required() {
		let field = TextField::new("name".to_string());

		assert!(field.clean(None).is_err());
		assert!(field.clean(Some(&serde_json::json!(""))).is_err());
		assert!(field.clean(Some(&serde_json::json!("   "))).is_err());
	}

	#[test]
	fn test_text_field_optional_empty_is_null() {
		let field = TextField::new("notes".to_string()).optional();

		assert_eq!(field.clean(None).unwrap(), serde_json::Value::Null);
		assert_eq!(
			field.clean(Some(&serde_json::json!(""))).unwrap(),
			serde_json::Value::Null
		);
		assert_eq!(
			field.clean(Some(&serde_json::json!("  "))).unwrap(),
			serde_json::Value::Null
		);
	}

	#[test]
	fn test_text_field_trims() {
		let field = TextField::new("name".to_string());

		assert_eq!(
			field.clean(Some(&serde_json::json!("  Jane  "))).unwrap(),
			serde_json::json!("Jane")
		);
	}

	#[test]
	fn test_text_field_max_length() {
		let field = TextField::new("name".to_string()).with_max_length(5);

		assert!(field.clean(Some(&serde_json::json!("Jane"))).is_ok());
		assert!(matches!(
			field.clean(Some(&serde_json::json!("Too long a name"))),
			Err(FieldError::Validation(_))
		));
	}

	#[test]
	fn test_text_field_rejects_non_string() {
		let field = TextField::new("name".to_string());

		assert!(matches!(
			field.clean(Some(&serde_json::json!(42))),
			Err(FieldError::Invalid(_))
		));
	}

	#[test]
	fn test_text_field_toggle_required() {
		let mut field = TextField::new("name".to_string());
		field.set_required(false);

		assert!(!field.required());
		assert_eq!(field.clean(None).unwrap(), serde_json::Value::Null);
	}
}
