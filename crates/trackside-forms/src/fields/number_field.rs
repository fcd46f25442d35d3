use crate::field::{FieldError, FieldResult, FormField, Widget};

/// NumberField for numeric input
///
/// Range is enforced only when BOTH `min_value` and `max_value` are
/// declared; a single declared bound on its own is never checked. This
/// matches the behaviour the discovery form has always had, and the test
/// suite encodes it deliberately.
pub struct NumberField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub min_value: Option<f64>,
	pub max_value: Option<f64>,
}

impl NumberField {
	/// Create a new NumberField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::fields::NumberField;
	///
	/// let field = NumberField::new("sessions_per_week".to_string());
	/// assert_eq!(field.name, "sessions_per_week");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::NumberInput,
			min_value: None,
			max_value: None,
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

	pub fn with_min(mut self, min: f64) -> Self {
		self.min_value = Some(min);
		self
	}

	pub fn with_max(mut self, max: f64) -> Self {
		self.max_value = Some(max);
		self
	}
}

impl FormField for NumberField {
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
				let num = if let Some(f) = v.as_f64() {
					f
				} else if let Some(s) = v.as_str() {
					let s = s.trim();

					if s.is_empty() {
						if self.required {
							return Err(FieldError::required(None));
						}
						return Ok(serde_json::Value::Null);
					}

					s.parse::<f64>()
						.map_err(|_| FieldError::Invalid("Enter a number".to_string()))?
				} else {
					return Err(FieldError::Invalid("Expected number or text".to_string()));
				};

				if !num.is_finite() {
					return Err(FieldError::Invalid("Enter a valid number".to_string()));
				}

				// Both bounds or nothing; a lone min or max is not enforced.
				if let (Some(min), Some(max)) = (self.min_value, self.max_value)
					&& !(min..=max).contains(&num)
				{
					return Err(FieldError::Validation(format!(
						"Enter a value between {} and {}",
						min, max
					)));
				}

				Ok(serde_json::json!(num))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_number_field_basic() {
		let field = NumberField::new("sessions".to_string());

		assert_eq!(
			field.clean(Some(&serde_json::json!(3.5))).unwrap(),
			serde_json::json!(3.5)
		);
		assert_eq!(
			field.clean(Some(&serde_json::json!("4"))).unwrap(),
			serde_json::json!(4.0)
		);
	}

	#[rstest]
	fn test_number_field_invalid() {
		let field = NumberField::new("sessions".to_string());

		assert!(matches!(
			field.clean(Some(&serde_json::json!("abc"))),
			Err(FieldError::Invalid(_))
		));
		assert!(field.clean(Some(&serde_json::json!(f64::NAN))).is_err());
	}

	#[rstest]
	fn test_number_field_required() {
		let field = NumberField::new("sessions".to_string());

		assert!(field.clean(None).is_err());
		assert!(field.clean(Some(&serde_json::json!(""))).is_err());
	}

	#[rstest]
	fn test_number_field_optional_empty_is_null() {
		let field = NumberField::new("sessions".to_string()).optional();

		assert_eq!(field.clean(None).unwrap(), serde_json::Value::Null);
		assert_eq!(
			field.clean(Some(&serde_json::json!(""))).unwrap(),
			serde_json::Value::Null
		);
	}

	#[rstest]
	fn test_number_field_range_with_both_bounds() {
		let field = NumberField::new("sessions".to_string())
			.with_min(1.0)
			.with_max(14.0);

		assert!(field.clean(Some(&serde_json::json!(1.0))).is_ok());
		assert!(field.clean(Some(&serde_json::json!(14.0))).is_ok());
		assert!(matches!(
			field.clean(Some(&serde_json::json!(0.0))),
			Err(FieldError::Validation(_))
		));
		assert!(matches!(
			field.clean(Some(&serde_json::json!(15.0))),
			Err(FieldError::Validation(_))
		));
	}

	// The single-bound cases below pin long-standing behaviour: a lone
	// bound is NOT enforced. Do not "fix" these without changing the
	// forms that rely on it.

	#[rstest]
	#[case(-5.0)]
	#[case(0.0)]
	#[case(1000.0)]
	fn test_number_field_lone_min_not_enforced(#[case] value: f64) {
		// Arrange
		let field = NumberField::new("years_training".to_string()).with_min(0.0);

		// Act
		let result = field.clean(Some(&serde_json::json!(value)));

		// Assert
		assert!(
			result.is_ok(),
			"A lone min bound must not reject {value}"
		);
	}

	#[rstest]
	#[case(23.0)]
	#[case(25.0)]
	fn test_number_field_lone_max_not_enforced(#[case] value: f64) {
		// Arrange
		let field = NumberField::new("sleep_hours".to_string()).with_max(24.0);

		// Act
		let result = field.clean(Some(&serde_json::json!(value)));

		// Assert
		assert!(
			result.is_ok(),
			"A lone max bound must not reject {value}"
		);
	}
}
