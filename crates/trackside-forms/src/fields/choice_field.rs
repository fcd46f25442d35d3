use crate::field::{FieldError, FieldResult, FormField, Widget};

/// ChoiceField for select input with a fixed set of values
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub choices: Vec<String>,
}

impl ChoiceField {
	/// Create a new ChoiceField with the given name and choices
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::fields::ChoiceField;
	///
	/// let field = ChoiceField::new(
	/// 	"relationship".to_string(),
	/// 	vec!["parent".to_string(), "guardian".to_string()],
	/// );
	/// assert_eq!(field.choices.len(), 2);
	/// ```
	pub fn new(name: String, choices: Vec<String>) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::Select,
			choices,
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

impl FormField for ChoiceField {
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

				if !self.choices.iter().any(|c| c == s) {
					return Err(FieldError::Validation(
						"Select a valid choice".to_string(),
					));
				}

				Ok(serde_json::json!(s))
			}
		}
	}
}
