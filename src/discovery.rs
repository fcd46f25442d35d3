//! Discovery form controller
//!
//! The discovery questionnaire runs after registration. Its subject
//! identifier arrives through the URL query string and is locked once
//! prefilled; the submit control is deliberately disabled until both
//! consent boxes are ticked and an identifier is present.

use crate::collect::{self, optional_number, optional_text, read_all, validate_single};
use crate::handoff::athlete_from_query;
use crate::payload::{
	canonical_case, DiscoveryConsent, DiscoveryPayload, HealthBlock, LifestyleBlock,
	TrainingBlock,
};
use crate::ui::{self, StatusPanel, SubmitButton};
use std::collections::HashMap;
use trackside_forms::{
	CheckboxField, ChoiceField, FieldHandle, Form, NumberField, TextField,
};
use trackside_webhook::{WebhookClient, WebhookError};

// Element identifiers the discovery page exposes.
pub const ATHLETE_NAME: &str = "athleteName";
pub const PRIMARY_EVENT: &str = "primaryEvent";
pub const SESSIONS_PER_WEEK: &str = "sessionsPerWeek";
pub const YEARS_TRAINING: &str = "yearsTraining";
pub const PERSONAL_BESTS: &str = "personalBests";
pub const INJURIES: &str = "injuries";
pub const MEDICAL_CONDITIONS: &str = "medicalConditions";
pub const SLEEP_HOURS: &str = "sleepHours";
pub const OCCUPATION: &str = "occupation";
pub const DATA_CONSENT: &str = "dataConsent";
pub const CONTACT_CONSENT: &str = "contactConsent";

/// Outcome of whole-form validation for this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
	Valid,
	Invalid,
	/// The subject identifier is empty; per-field validation did not run.
	NotIdentified,
}

/// The discovery form's fields, in document order.
///
/// `yearsTraining` declares only a minimum and `sleepHours` only a
/// maximum; neither lone bound is enforced (see `NumberField`).
pub fn discovery_form() -> Form {
	let mut form = Form::new();
	form.add_field(Box::new(
		TextField::new(ATHLETE_NAME.to_string()).with_label("Athlete name"),
	));
	form.add_field(Box::new(
		ChoiceField::new(
			PRIMARY_EVENT.to_string(),
			vec![
				"sprints".to_string(),
				"middle-distance".to_string(),
				"endurance".to_string(),
				"jumps".to_string(),
				"throws".to_string(),
				"multi-events".to_string(),
			],
		)
		.with_label("Primary event"),
	));
	form.add_field(Box::new(
		NumberField::new(SESSIONS_PER_WEEK.to_string())
			.with_label("Training sessions per week")
			.with_min(1.0)
			.with_max(14.0),
	));
	form.add_field(Box::new(
		NumberField::new(YEARS_TRAINING.to_string())
			.with_label("Years of structured training")
			.with_min(0.0)
			.optional(),
	));
	form.add_field(Box::new(
		TextField::new(PERSONAL_BESTS.to_string())
			.with_label("Personal bests")
			.optional(),
	));
	form.add_field(Box::new(
		TextField::new(INJURIES.to_string())
			.with_label("Current or past injuries")
			.optional(),
	));
	form.add_field(Box::new(
		TextField::new(MEDICAL_CONDITIONS.to_string())
			.with_label("Medical conditions")
			.optional(),
	));
	form.add_field(Box::new(
		NumberField::new(SLEEP_HOURS.to_string())
			.with_label("Average hours of sleep")
			.with_max(24.0)
			.optional(),
	));
	form.add_field(Box::new(
		TextField::new(OCCUPATION.to_string())
			.with_label("Occupation or school year")
			.optional(),
	));
	form.add_field(Box::new(
		CheckboxField::new(DATA_CONSENT.to_string())
			.with_label("Data processing consent")
			.consent(),
	));
	form.add_field(Box::new(
		CheckboxField::new(CONTACT_CONSENT.to_string())
			.with_label("Coach contact consent")
			.consent(),
	));
	form
}

/// Controller for the discovery form.
pub struct DiscoveryController<H: FieldHandle> {
	form: Form,
	handles: HashMap<String, H>,
	pub button: SubmitButton,
	client: WebhookClient,
}

impl<H: FieldHandle> DiscoveryController<H> {
	pub fn new(handles: HashMap<String, H>, client: WebhookClient) -> Self {
		let form = discovery_form();
		tracing::info!(
			fields = form.field_count(),
			endpoint = client.url(),
			"discovery controller initialised"
		);

		Self {
			form,
			handles,
			// Pre-disabled until both consents are ticked.
			button: SubmitButton::disabled("Send my details", "Sending…"),
			client,
		}
	}

	pub fn handles(&self) -> &HashMap<String, H> {
		&self.handles
	}

	pub fn handles_mut(&mut self) -> &mut HashMap<String, H> {
		&mut self.handles
	}

	/// Prefill and lock the identifier from the page's query string.
	///
	/// Returns the athlete name when one was found.
	pub fn prefill_from_query(&mut self, query: &str) -> Option<String> {
		let name = athlete_from_query(query)?;
		if let Some(handle) = self.handles.get_mut(ATHLETE_NAME) {
			handle.set_value(&name);
			handle.set_readonly(true);
		}
		tracing::info!(athlete = %name, "identifier prefilled from query string");
		self.refresh_submit_gate();
		Some(name)
	}

	/// Re-evaluate whether the submit control may be enabled.
	///
	/// Both consent boxes ticked and a non-blank identifier present;
	/// never enabled while a submission is in flight.
	pub fn refresh_submit_gate(&mut self) -> bool {
		let consents = self.checked(DATA_CONSENT) && self.checked(CONTACT_CONSENT);
		let identified = !self.identifier().trim().is_empty();
		let ready = consents && identified;
		if !self.button.busy {
			self.button.enabled = ready;
		}
		ready
	}

	/// Blur handler: clear the field's annotation and re-validate it.
	pub fn handle_field_blur(&mut self, name: &str) -> bool {
		validate_single(&self.form, &mut self.handles, name)
	}

	/// Validate the whole form.
	///
	/// Short-circuits without per-field validation when the identifier
	/// is empty.
	pub fn validate_all(&mut self) -> FormOutcome {
		if self.identifier().trim().is_empty() {
			return FormOutcome::NotIdentified;
		}

		let data = read_all(&self.form, &self.handles);
		self.form.bind(data);
		let valid = self.form.is_valid();
		collect::push_error_states(&self.form, &mut self.handles);
		if valid {
			FormOutcome::Valid
		} else {
			FormOutcome::Invalid
		}
	}

	/// Assemble the payload from the current field values.
	pub fn collect(&self) -> DiscoveryPayload {
		let text = |name: &str| {
			self.handles
				.get(name)
				.map(|h| h.value())
				.unwrap_or_default()
		};

		DiscoveryPayload {
			form_type: "discovery",
			athlete_name: self.identifier().trim().to_string(),
			training: TrainingBlock {
				primary_event: optional_text(&text(PRIMARY_EVENT)).map(|e| canonical_case(&e)),
				sessions_per_week: optional_number(&text(SESSIONS_PER_WEEK)),
				years_training: optional_number(&text(YEARS_TRAINING)),
				personal_bests: optional_text(&text(PERSONAL_BESTS)),
			},
			health: HealthBlock {
				injuries: optional_text(&text(INJURIES)),
				medical_conditions: optional_text(&text(MEDICAL_CONDITIONS)),
			},
			lifestyle: LifestyleBlock {
				sleep_hours: optional_number(&text(SLEEP_HOURS)),
				occupation: optional_text(&text(OCCUPATION)),
			},
			consent: DiscoveryConsent {
				data_processing: self.checked(DATA_CONSENT),
				coach_contact: self.checked(CONTACT_CONSENT),
				submitted_at: chrono::Utc::now(),
			},
		}
	}

	/// Submit handler: validate, collect, POST, report.
	///
	/// Afterwards the submit gate is re-evaluated rather than the
	/// control being re-enabled unconditionally.
	pub async fn submit(&mut self) -> StatusPanel {
		if self.button.busy {
			return StatusPanel::info("Your submission is already in progress.");
		}

		match self.validate_all() {
			FormOutcome::NotIdentified => {
				return StatusPanel::error(
					"We could not identify the athlete. Please open this form \
					 through the link in your registration confirmation.",
				);
			}
			FormOutcome::Invalid => return ui::form_invalid_banner(),
			FormOutcome::Valid => {}
		}

		let payload = self.collect();
		self.button.begin_submit();
		let outcome = self.client.submit(&payload).await;
		self.button.finish(false);

		let panel = match outcome {
			Ok(_) => {
				for handle in self.handles.values_mut() {
					handle.reset();
				}
				ui::discovery_success_panel()
			}
			Err(error) => {
				log_submit_failure(&error);
				ui::submission_failed_banner(&error)
			}
		};
		self.refresh_submit_gate();
		panel
	}

	fn identifier(&self) -> String {
		self.handles
			.get(ATHLETE_NAME)
			.map(|h| h.value())
			.unwrap_or_default()
	}

	fn checked(&self, name: &str) -> bool {
		self.handles.get(name).map(|h| h.checked()).unwrap_or(false)
	}
}

fn log_submit_failure(error: &WebhookError) {
	match error {
		WebhookError::Rejected { message, details } => {
			tracing::warn!(%message, detail_count = details.len(), "discovery rejected");
		}
		other => {
			tracing::error!(error = %other, "discovery submission failed");
		}
	}
}
