use crate::field::{FieldError, FieldResult, FormField, Widget};

/// CheckboxField for consent and other boolean input
///
/// A required checkbox is a consent box: leaving it unchecked fails with
/// the consent message rather than the generic required message.
pub struct CheckboxField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
}

impl CheckboxField {
	/// Create a new CheckboxField with the given name
	///
	/// Checkboxes default to optional; call [`CheckboxField::consent`]
	/// for a box that must be ticked.
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::fields::CheckboxField;
	///
	/// let field = CheckboxField::new("photo_consent".to_string());
	/// assert!(!field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			widget: Widget::CheckboxInput,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Require this box to be ticked.
	pub fn consent(mut self) -> Self {
		self.required = true;
		self
	}
}

impl FormField for CheckboxField {
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
		let checked = match value {
			None => false,
			Some(serde_json::Value::Null) => false,
			Some(v) => v
				.as_bool()
				.ok_or_else(|| FieldError::Invalid("Expected a checkbox value".to_string()))?,
		};

		if self.required && !checked {
			return Err(FieldError::required(Some("This consent is required.")));
		}

		Ok(serde_json::json!(checked))
	}
}
