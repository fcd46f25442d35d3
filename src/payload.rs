//! Submission payload shapes
//!
//! The webhook receives one nested JSON record per submission. Optional
//! free text and numbers serialise as explicit `null` when absent, never
//! as an empty string; the guardian block is omitted entirely unless the
//! subject is a minor at submit time.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Capitalise an enumerated value to its canonical display form.
///
/// # Examples
///
/// ```
/// use trackside::payload::canonical_case;
///
/// assert_eq!(canonical_case("female"), "Female");
/// assert_eq!(canonical_case("middle-distance"), "Middle-distance");
/// assert_eq!(canonical_case(""), "");
/// ```
pub fn canonical_case(value: &str) -> String {
	let mut chars = value.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// Payload for the registration form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
	pub form_type: &'static str,
	pub athlete: AthleteIdentity,
	/// Present if and only if the subject is under the guardian age
	/// threshold at submit time.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guardian: Option<GuardianBlock>,
	pub emergency_contact: EmergencyContact,
	pub consent: RegistrationConsent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteIdentity {
	pub first_name: String,
	pub last_name: String,
	/// ISO `YYYY-MM-DD`.
	pub date_of_birth: String,
	pub gender: Option<String>,
	pub email: String,
	pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianBlock {
	pub name: String,
	pub relationship: Option<String>,
	pub email: String,
	pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
	pub name: String,
	pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationConsent {
	pub photography: bool,
	pub data_processing: bool,
	pub submitted_at: DateTime<Utc>,
}

/// Payload for the discovery form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryPayload {
	pub form_type: &'static str,
	pub athlete_name: String,
	pub training: TrainingBlock,
	pub health: HealthBlock,
	pub lifestyle: LifestyleBlock,
	pub consent: DiscoveryConsent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingBlock {
	pub primary_event: Option<String>,
	pub sessions_per_week: Option<f64>,
	pub years_training: Option<f64>,
	pub personal_bests: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBlock {
	pub injuries: Option<String>,
	pub medical_conditions: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleBlock {
	pub sleep_hours: Option<f64>,
	pub occupation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryConsent {
	pub data_processing: bool,
	pub coach_contact: bool,
	pub submitted_at: DateTime<Utc>,
}
