use serde::Deserialize;

/// Body the webhook answers with.
///
/// The transport-level status code is not part of the contract; the
/// body's `success` flag decides the outcome.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
	pub success: bool,

	/// Canonical subject name echoed back on success; the registration
	/// form builds its follow-up link from this.
	#[serde(default)]
	pub athlete_name: Option<String>,

	/// Human-readable failure message.
	#[serde(default)]
	pub message: Option<String>,

	/// Itemised failure details.
	#[serde(default)]
	pub details: Option<Vec<String>>,
}

/// The success half of a submission outcome.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
	/// Canonical subject name echoed by the server, when provided.
	pub athlete_name: Option<String>,

	/// The full response body, for hosts that need more than the name.
	pub response: WebhookResponse,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_response_success_shape() {
		let body = r#"{"success":true,"athleteName":"Jane Doe"}"#;

		let response: WebhookResponse = serde_json::from_str(body).unwrap();

		assert!(response.success);
		assert_eq!(response.athlete_name.as_deref(), Some("Jane Doe"));
		assert!(response.message.is_none());
	}

	#[test]
	fn test_response_failure_shape() {
		let body = r#"{"success":false,"message":"Invalid payload","details":["phone is not a UK number"]}"#;

		let response: WebhookResponse = serde_json::from_str(body).unwrap();

		assert!(!response.success);
		assert_eq!(response.message.as_deref(), Some("Invalid payload"));
		assert_eq!(response.details.as_ref().unwrap().len(), 1);
	}

	#[test]
	fn test_response_requires_success_flag() {
		let body = r#"{"athleteName":"Jane Doe"}"#;

		assert!(serde_json::from_str::<WebhookResponse>(body).is_err());
	}
}
