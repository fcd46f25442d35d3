//! Host-side field access
//!
//! Validation and collection never touch a live document. A host exposes
//! each input through the small [`FieldHandle`] capability; the engine
//! reads values and pushes error/required/focus state back through it.
//! [`MemoryHandle`] is the reference implementation, used by every unit
//! test and by hosts that have no document at all.

/// Capability interface over a single rendered input.
///
/// `set_error_state(Some(msg))` means: show `msg` as the field's single
/// inline annotation and flag the input as invalid for assistive
/// technology (an invalid flag plus a described-by reference to the
/// annotation). `set_error_state(None)` removes the annotation and the
/// flags. At most one annotation exists per field at a time.
pub trait FieldHandle {
	/// Current raw string value of the input.
	fn value(&self) -> String;

	/// Replace the input's value (prefill, programmatic updates).
	fn set_value(&mut self, value: &str);

	/// Current checked state; meaningful for checkbox inputs only.
	fn checked(&self) -> bool;

	/// Attach or remove the field's inline error annotation.
	fn set_error_state(&mut self, message: Option<&str>);

	/// Mirror a requiredness change onto the input.
	fn set_required(&mut self, required: bool);

	/// Prevent further edits (locked prefilled identifiers).
	fn set_readonly(&mut self, readonly: bool);

	/// Move input focus to this field.
	fn focus(&mut self);

	/// Clear value, checked state and any error annotation.
	fn reset(&mut self);
}

/// In-memory [`FieldHandle`] recording every state change.
///
/// # Examples
///
/// ```
/// use trackside_forms::handle::{FieldHandle, MemoryHandle};
///
/// let mut handle = MemoryHandle::text("email", "jane@example.com");
/// handle.set_error_state(Some("Enter a valid email address"));
///
/// assert!(handle.has_error());
/// assert_eq!(handle.described_by(), "email-error");
///
/// handle.set_error_state(None);
/// assert!(!handle.has_error());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryHandle {
	name: String,
	pub value: String,
	pub checked: bool,
	pub error: Option<String>,
	pub required: bool,
	pub readonly: bool,
	pub focused: bool,
}

impl MemoryHandle {
	/// Text-like handle (text, email, phone, date, number, select).
	pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			..Default::default()
		}
	}

	/// Checkbox handle.
	pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
		Self {
			name: name.into(),
			checked,
			..Default::default()
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}

	/// Identifier of the annotation element this field is described by.
	pub fn described_by(&self) -> String {
		format!("{}-error", self.name)
	}
}

impl FieldHandle for MemoryHandle {
	fn value(&self) -> String {
		self.value.clone()
	}

	fn set_value(&mut self, value: &str) {
		self.value = value.to_string();
	}

	fn checked(&self) -> bool {
		self.checked
	}

	fn set_error_state(&mut self, message: Option<&str>) {
		self.error = message.map(|m| m.to_string());
	}

	fn set_required(&mut self, required: bool) {
		self.required = required;
	}

	fn set_readonly(&mut self, readonly: bool) {
		self.readonly = readonly;
	}

	fn focus(&mut self) {
		self.focused = true;
	}

	fn reset(&mut self) {
		self.value.clear();
		self.checked = false;
		self.error = None;
		self.focused = false;
	}
}
