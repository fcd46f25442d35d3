use crate::field::{FieldResult, FormField};
use std::collections::HashMap;

/// A form: fields in document order plus bound data and validation state.
///
/// Fields are validated in the order they were added, which mirrors the
/// document order of the inputs a host renders; the first failure in that
/// order is what the host should focus.
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
	first_invalid: Option<String>,
	is_bound: bool,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(!form.is_bound());
	/// assert!(form.fields().is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			errors: HashMap::new(),
			first_invalid: None,
			is_bound: false,
		}
	}

	/// Add a field to the form
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::{Form, TextField};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(TextField::new("first_name".to_string())));
	/// assert_eq!(form.field_count(), 1);
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Bind form data for validation
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}

	/// Validate every field in document order.
	///
	/// Returns overall validity (the AND of all individual results),
	/// records per-field errors, remembers the first invalid field for
	/// focusing, and writes cleaned values back into the data map.
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::{Form, TextField};
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(TextField::new("first_name".to_string())));
	///
	/// let mut data = HashMap::new();
	/// data.insert("first_name".to_string(), json!("Jane"));
	/// form.bind(data);
	///
	/// assert!(form.is_valid());
	/// assert!(form.errors().is_empty());
	/// assert!(form.first_invalid().is_none());
	/// ```
	pub fn is_valid(&mut self) -> bool {
		if !self.is_bound {
			return false;
		}

		self.errors.clear();
		self.first_invalid = None;

		for field in &self.fields {
			let value = self.data.get(field.name());

			match field.clean(value) {
				Ok(cleaned) => {
					self.data.insert(field.name().to_string(), cleaned);
				}
				Err(e) => {
					if self.first_invalid.is_none() {
						self.first_invalid = Some(field.name().to_string());
					}
					self.errors
						.entry(field.name().to_string())
						.or_default()
						.push(e.to_string());
				}
			}
		}

		self.errors.is_empty()
	}

	/// Validate a single field against the given raw value.
	///
	/// Used for per-field (blur) validation; form-level state is not
	/// touched.
	pub fn clean_field(
		&self,
		name: &str,
		value: Option<&serde_json::Value>,
	) -> Option<FieldResult<serde_json::Value>> {
		self.get_field(name).map(|field| field.clean(value))
	}

	pub fn cleaned_data(&self) -> &HashMap<String, serde_json::Value> {
		&self.data
	}

	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	/// First field that failed validation, in document order.
	pub fn first_invalid(&self) -> Option<&str> {
		self.first_invalid.as_deref()
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Field names in document order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|f| f.name())
	}

	/// Toggle a field's required flag; returns whether the field exists.
	///
	/// # Examples
	///
	/// ```
	/// use trackside_forms::{Form, TextField};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(TextField::new("parent_name".to_string())));
	///
	/// assert!(form.set_required("parent_name", false));
	/// assert!(!form.get_field("parent_name").unwrap().required());
	/// assert!(!form.set_required("missing", true));
	/// ```
	pub fn set_required(&mut self, name: &str, required: bool) -> bool {
		match self.fields.iter_mut().find(|f| f.name() == name) {
			Some(field) => {
				field.set_required(required);
				true
			}
			None => false,
		}
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}
