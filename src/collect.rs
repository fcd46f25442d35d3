//! Reading field values out of host handles
//!
//! Both controllers collect the same way: checkbox fields read their
//! checked state, everything else reads its string value. The helpers
//! here also carry the validation glue shared by the two forms — binding
//! the current values into a [`Form`], pushing error annotations back to
//! the handles and focusing the first failure.

use std::collections::HashMap;
use trackside_forms::{FieldHandle, Form, Widget};

/// Trimmed free text, with emptiness mapped to an explicit absent value.
pub fn optional_text(raw: &str) -> Option<String> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(trimmed.to_string())
	}
}

/// Parsed number, with empty or unparseable input mapped to absent.
pub fn optional_number(raw: &str) -> Option<f64> {
	raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Current raw value of one field, shaped for binding.
pub fn raw_value<H: FieldHandle>(
	form: &Form,
	handles: &HashMap<String, H>,
	name: &str,
) -> serde_json::Value {
	let Some(handle) = handles.get(name) else {
		return serde_json::Value::Null;
	};
	match form.get_field(name).map(|f| f.widget()) {
		Some(Widget::CheckboxInput) => serde_json::json!(handle.checked()),
		_ => serde_json::json!(handle.value()),
	}
}

/// Snapshot every field's current value in document order.
pub fn read_all<H: FieldHandle>(
	form: &Form,
	handles: &HashMap<String, H>,
) -> HashMap<String, serde_json::Value> {
	form.field_names()
		.map(|name| (name.to_string(), raw_value(form, handles, name)))
		.collect()
}

/// Mirror the form's validation result onto the handles.
///
/// Every field gets its annotation set or cleared; the first invalid
/// field in document order receives focus.
pub fn push_error_states<H: FieldHandle>(form: &Form, handles: &mut HashMap<String, H>) {
	let names: Vec<String> = form.field_names().map(str::to_string).collect();
	for name in &names {
		if let Some(handle) = handles.get_mut(name) {
			let message = form
				.errors()
				.get(name)
				.and_then(|msgs| msgs.first())
				.map(String::as_str);
			handle.set_error_state(message);
		}
	}

	if let Some(first) = form.first_invalid()
		&& let Some(handle) = handles.get_mut(first)
	{
		handle.focus();
	}
}

/// Validate a single field in place (the blur handler).
///
/// Clears the existing annotation, re-validates, re-attaches on failure.
/// Unknown fields are treated as valid. Never panics.
pub fn validate_single<H: FieldHandle>(
	form: &Form,
	handles: &mut HashMap<String, H>,
	name: &str,
) -> bool {
	let value = raw_value(form, handles, name);
	let Some(result) = form.clean_field(name, Some(&value)) else {
		return true;
	};

	let Some(handle) = handles.get_mut(name) else {
		return result.is_ok();
	};

	match result {
		Ok(_) => {
			handle.set_error_state(None);
			true
		}
		Err(e) => {
			handle.set_error_state(Some(&e.to_string()));
			false
		}
	}
}
