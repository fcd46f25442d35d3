use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::validators::BirthDateValidator;
use chrono::{NaiveDate, Utc};

/// DateField for date input
///
/// Accepts ISO (`2008-06-15`) and UK (`15/06/2008`) input and cleans to
/// the ISO form. With [`DateField::birth_date`] set, the subject
/// date-of-birth rules apply on top: no future dates, no years before
/// 1920.
pub struct DateField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub input_formats: Vec<String>,
	pub birth_date: bool,
}

impl DateField {
	/// Create a new DateField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::fields::DateField;
	///
	/// let field = DateField::new("date_of_birth".to_string());
	/// assert_eq!(field.name, "date_of_birth");
	/// assert!(field.required);
	/// assert!(!field.birth_date);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::DateInput,
			input_formats: vec![
				"%Y-%m-%d".to_string(), // 2008-06-15
				"%d/%m/%Y".to_string(), // 15/06/2008
			],
			birth_date: false,
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

	/// Mark this field as the subject's date of birth.
	pub fn birth_date(mut self) -> Self {
		self.birth_date = true;
		self
	}

	/// Parse a raw string against the accepted input formats.
	pub fn parse_date(&self, s: &str) -> FieldResult<NaiveDate> {
		for format in &self.input_formats {
			if let Ok(date) = NaiveDate::parse_from_str(s, format) {
				return Ok(date);
			}
		}
		Err(FieldError::Validation("Enter a valid date".to_string()))
	}

	/// Clean against an explicit reference date instead of the wall clock.
	///
	/// The reference date only matters for birth-date fields, where it
	/// anchors the future-date check.
	pub fn clean_on(
		&self,
		reference: NaiveDate,
		value: Option<&serde_json::Value>,
	) -> FieldResult<serde_json::Value> {
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

				let date = self.parse_date(s)?;

				if self.birth_date {
					BirthDateValidator::new(reference).validate(date)?;
				}

				Ok(serde_json::json!(date.format("%Y-%m-%d").to_string()))
			}
		}
	}
}

impl FormField for DateField {
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
		self.clean_on(Utc::now().date_naive(), value)
	}
}
