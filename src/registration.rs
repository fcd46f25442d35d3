//! Registration form controller
//!
//! One controller instance per rendered registration form, constructed
//! with injected field handles and a webhook client. The host wires its
//! events (blur, date-of-birth change, submit click) to the command
//! handlers here and applies the returned records to the page.

use crate::collect::{self, optional_text, read_all, validate_single};
use crate::guardian::{GuardianState, SectionDirectives};
use crate::payload::{
	canonical_case, AthleteIdentity, EmergencyContact, GuardianBlock, RegistrationConsent,
	RegistrationPayload,
};
use crate::ui::{self, StatusPanel, SubmitButton};
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use trackside_forms::{
	CheckboxField, ChoiceField, DateField, EmailField, FieldHandle, Form, PhoneField, TextField,
};
use trackside_webhook::{WebhookClient, WebhookError};

// Element identifiers the registration page exposes. Markup is an
// external contract; renaming an id here is a breaking change for hosts.
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const DATE_OF_BIRTH: &str = "dateOfBirth";
pub const GENDER: &str = "gender";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const PARENT_NAME: &str = "parentName";
pub const PARENT_RELATIONSHIP: &str = "parentRelationship";
pub const PARENT_EMAIL: &str = "parentEmail";
pub const PARENT_PHONE: &str = "parentPhone";
pub const EMERGENCY_NAME: &str = "emergencyName";
pub const EMERGENCY_PHONE: &str = "emergencyPhone";
pub const PHOTO_CONSENT: &str = "photoConsent";
pub const DATA_CONSENT: &str = "dataConsent";

/// Fields belonging to the conditional guardian section.
pub const GUARDIAN_FIELDS: [&str; 4] = [
	PARENT_NAME,
	PARENT_RELATIONSHIP,
	PARENT_EMAIL,
	PARENT_PHONE,
];

/// The registration form's fields, in document order.
///
/// Guardian fields start optional; the state machine flips them to
/// required while the subject is a minor.
pub fn registration_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		TextField::new(FIRST_NAME.to_string()).with_label("First name"),
	));
	form.add_field(Box::new(
		TextField::new(LAST_NAME.to_string()).with_label("Last name"),
	));
	form.add_field(Box::new(
		DateField::new(DATE_OF_BIRTH.to_string())
			.with_label("Date of birth")
			.birth_date(),
	));
	form.add_field(Box::new(
		ChoiceField::new(
			GENDER.to_string(),
			vec![
				"female".to_string(),
				"male".to_string(),
				"non-binary".to_string(),
				"prefer-not-to-say".to_string(),
			],
		)
		.with_label("Gender")
		.optional(),
	));
	form.add_field(Box::new(
		EmailField::new(EMAIL.to_string()).with_label("Email address"),
	));
	form.add_field(Box::new(
		PhoneField::new(PHONE.to_string()).with_label("Phone number"),
	));
	form.add_field(Box::new(
		TextField::new(PARENT_NAME.to_string())
			.with_label("Parent/guardian name")
			.optional(),
	));
	form.add_field(Box::new(
		ChoiceField::new(
			PARENT_RELATIONSHIP.to_string(),
			vec![
				"parent".to_string(),
				"guardian".to_string(),
				"carer".to_string(),
				"other".to_string(),
			],
		)
		.with_label("Relationship to athlete")
		.optional(),
	));
	form.add_field(Box::new(
		EmailField::new(PARENT_EMAIL.to_string())
			.with_label("Parent/guardian email")
			.optional(),
	));
	form.add_field(Box::new(
		PhoneField::new(PARENT_PHONE.to_string())
			.with_label("Parent/guardian phone")
			.optional(),
	));
	form.add_field(Box::new(
		TextField::new(EMERGENCY_NAME.to_string()).with_label("Emergency contact name"),
	));
	form.add_field(Box::new(
		PhoneField::new(EMERGENCY_PHONE.to_string()).with_label("Emergency contact phone"),
	));
	form.add_field(Box::new(
		CheckboxField::new(PHOTO_CONSENT.to_string()).with_label("Photography consent"),
	));
	form.add_field(Box::new(
		CheckboxField::new(DATA_CONSENT.to_string())
			.with_label("Data processing consent")
			.consent(),
	));
	form
}

/// Controller for the registration form.
pub struct RegistrationController<H: FieldHandle> {
	form: Form,
	handles: HashMap<String, H>,
	guardian_state: GuardianState,
	pub button: SubmitButton,
	client: WebhookClient,
}

impl<H: FieldHandle> RegistrationController<H> {
	pub fn new(handles: HashMap<String, H>, client: WebhookClient) -> Self {
		let form = registration_form();
		tracing::info!(
			fields = form.field_count(),
			endpoint = client.url(),
			"registration controller initialised"
		);

		let mut controller = Self {
			form,
			handles,
			guardian_state: GuardianState::Unset,
			button: SubmitButton::new("Register", "Submitting…"),
			client,
		};
		let directives = controller.guardian_state.directives();
		controller.apply_directives(&directives);
		controller
	}

	pub fn guardian_state(&self) -> GuardianState {
		self.guardian_state
	}

	/// Directives for the current guardian state, for initial rendering.
	pub fn section_directives(&self) -> SectionDirectives {
		self.guardian_state.directives()
	}

	pub fn handles(&self) -> &HashMap<String, H> {
		&self.handles
	}

	pub fn handles_mut(&mut self) -> &mut HashMap<String, H> {
		&mut self.handles
	}

	/// Blur handler: clear the field's annotation and re-validate it.
	pub fn handle_field_blur(&mut self, name: &str) -> bool {
		validate_single(&self.form, &mut self.handles, name)
	}

	/// Change handler for the date-of-birth field.
	pub fn handle_birth_date_change(&mut self) -> SectionDirectives {
		self.handle_birth_date_change_on(Utc::now().date_naive())
	}

	/// Clock-injected variant of [`Self::handle_birth_date_change`].
	pub fn handle_birth_date_change_on(&mut self, today: NaiveDate) -> SectionDirectives {
		let raw = self
			.handles
			.get(DATE_OF_BIRTH)
			.map(|h| h.value())
			.unwrap_or_default();

		self.guardian_state = self.guardian_state.on_birth_date_input(&raw, today);
		let directives = self.guardian_state.directives();
		self.apply_directives(&directives);
		directives
	}

	/// Validate every field, annotate failures, focus the first one.
	pub fn validate_all(&mut self) -> bool {
		let data = read_all(&self.form, &self.handles);
		self.form.bind(data);
		let valid = self.form.is_valid();
		collect::push_error_states(&self.form, &mut self.handles);
		valid
	}

	/// Assemble the payload from the current field values.
	pub fn collect(&self) -> RegistrationPayload {
		self.collect_on(Utc::now().date_naive())
	}

	/// Clock-injected variant of [`Self::collect`].
	///
	/// The guardian block follows the state computed from the field's
	/// value right now, not a state cached from an earlier change event.
	pub fn collect_on(&self, today: NaiveDate) -> RegistrationPayload {
		let text = |name: &str| {
			self.handles
				.get(name)
				.map(|h| h.value())
				.unwrap_or_default()
		};
		let checked = |name: &str| self.handles.get(name).map(|h| h.checked()).unwrap_or(false);

		let dob_raw = text(DATE_OF_BIRTH);
		let date_of_birth = DateField::new(DATE_OF_BIRTH.to_string())
			.parse_date(dob_raw.trim())
			.map(|d| d.format("%Y-%m-%d").to_string())
			.unwrap_or_else(|_| dob_raw.trim().to_string());

		let guardian = match GuardianState::from_birth_date_value(&dob_raw, today) {
			GuardianState::Minor => Some(GuardianBlock {
				name: text(PARENT_NAME).trim().to_string(),
				relationship: optional_text(&text(PARENT_RELATIONSHIP))
					.map(|r| canonical_case(&r)),
				email: text(PARENT_EMAIL).trim().to_string(),
				phone: text(PARENT_PHONE).trim().to_string(),
			}),
			_ => None,
		};

		RegistrationPayload {
			form_type: "registration",
			athlete: AthleteIdentity {
				first_name: text(FIRST_NAME).trim().to_string(),
				last_name: text(LAST_NAME).trim().to_string(),
				date_of_birth,
				gender: optional_text(&text(GENDER)).map(|g| canonical_case(&g)),
				email: text(EMAIL).trim().to_string(),
				phone: text(PHONE).trim().to_string(),
			},
			guardian,
			emergency_contact: EmergencyContact {
				name: text(EMERGENCY_NAME).trim().to_string(),
				phone: text(EMERGENCY_PHONE).trim().to_string(),
			},
			consent: RegistrationConsent {
				photography: checked(PHOTO_CONSENT),
				data_processing: checked(DATA_CONSENT),
				submitted_at: Utc::now(),
			},
		}
	}

	/// Submit handler: validate, collect, POST, report.
	///
	/// The submit control is disabled for the duration of the request
	/// and re-enabled unconditionally afterwards.
	pub async fn submit(&mut self) -> StatusPanel {
		if self.button.busy {
			return StatusPanel::info("Your submission is already in progress.");
		}

		if !self.validate_all() {
			return ui::form_invalid_banner();
		}

		let payload = self.collect();
		self.button.begin_submit();
		let outcome = self.client.submit(&payload).await;
		self.button.finish(true);

		match outcome {
			Ok(receipt) => {
				let athlete_name = receipt.athlete_name.unwrap_or_else(|| {
					format!(
						"{} {}",
						payload.athlete.first_name, payload.athlete.last_name
					)
				});
				self.reset_after_success();
				ui::registration_success_panel(&athlete_name)
			}
			Err(error) => {
				log_submit_failure(&error);
				ui::submission_failed_banner(&error)
			}
		}
	}

	fn reset_after_success(&mut self) {
		for handle in self.handles.values_mut() {
			handle.reset();
		}
		self.guardian_state = GuardianState::Unset;
		let directives = self.guardian_state.directives();
		self.apply_directives(&directives);
	}

	fn apply_directives(&mut self, directives: &SectionDirectives) {
		for name in GUARDIAN_FIELDS {
			self.form.set_required(name, directives.guardian_required);
			if let Some(handle) = self.handles.get_mut(name) {
				handle.set_required(directives.guardian_required);
				if directives.clear_guardian_errors {
					handle.set_error_state(None);
				}
			}
		}
	}
}

fn log_submit_failure(error: &WebhookError) {
	match error {
		WebhookError::Rejected { message, details } => {
			tracing::warn!(%message, detail_count = details.len(), "registration rejected");
		}
		other => {
			tracing::error!(error = %other, "registration submission failed");
		}
	}
}
