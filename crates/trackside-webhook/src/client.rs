use crate::config::WebhookConfig;
use crate::error::WebhookError;
use crate::response::{SubmissionReceipt, WebhookResponse};
use serde::Serialize;

/// Client issuing the single bounded POST a submission consists of.
///
/// One request per submit attempt: no retry, no persistence of failed
/// payloads. The configured timeout aborts the in-flight request, which
/// also enforces the at-most-one-in-flight invariant upstream — the
/// submit control stays disabled for the duration of the await.
pub struct WebhookClient {
	config: WebhookConfig,
	client: reqwest::Client,
}

impl WebhookClient {
	/// Create a new client for the configured endpoint
	///
	/// # Examples
	///
	/// ```
	/// use trackside_webhook::{WebhookClient, WebhookConfig};
	///
	/// let config = WebhookConfig::new("https://hooks.example.org/intake");
	/// let client = WebhookClient::new(config).unwrap();
	/// assert_eq!(client.url(), "https://hooks.example.org/intake");
	/// ```
	pub fn new(config: WebhookConfig) -> Result<Self, WebhookError> {
		let client = reqwest::Client::builder()
			.timeout(config.timeout)
			.build()
			.map_err(|e| WebhookError::Client(e.to_string()))?;

		Ok(Self { config, client })
	}

	pub fn url(&self) -> &str {
		&self.config.url
	}

	/// Serialize the payload and POST it as JSON.
	///
	/// Transport failures distinguish timing out from failing to
	/// connect. Once the transport succeeds, the body's `success` flag
	/// decides the outcome regardless of HTTP status.
	pub async fn submit<T: Serialize + ?Sized>(
		&self,
		payload: &T,
	) -> Result<SubmissionReceipt, WebhookError> {
		let response = self
			.client
			.post(&self.config.url)
			.json(payload)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					WebhookError::Timeout
				} else {
					WebhookError::Connection(e.to_string())
				}
			})?;

		let body: WebhookResponse = response.json().await.map_err(|e| {
			if e.is_timeout() {
				WebhookError::Timeout
			} else {
				WebhookError::InvalidResponse(e.to_string())
			}
		})?;

		if body.success {
			tracing::debug!(athlete_name = ?body.athlete_name, "submission accepted");
			Ok(SubmissionReceipt {
				athlete_name: body.athlete_name.clone(),
				response: body,
			})
		} else {
			let message = body
				.message
				.clone()
				.unwrap_or_else(|| "Submission was rejected.".to_string());
			let details = body.details.clone().unwrap_or_default();
			tracing::warn!(%message, detail_count = details.len(), "submission rejected");
			Err(WebhookError::Rejected { message, details })
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn test_client(url: String) -> WebhookClient {
		WebhookClient::new(WebhookConfig::new(url)).unwrap()
	}

	#[tokio::test]
	async fn test_submit_success_carries_echoed_name() {
		let mut server = mockito::Server::new_async().await;

		let _m = server
			.mock("POST", "/webhook")
			.match_header("content-type", "application/json")
			.with_status(200)
			.with_header("content-type", "application/json")
			.with_body(r#"{"success":true,"athleteName":"Jane Doe"}"#)
			.expect(1)
			.create_async()
			.await;

		let client = test_client(format!("{}/webhook", server.url()));

		let receipt = client
			.submit(&serde_json::json!({"formType": "registration"}))
			.await
			.unwrap();

		assert_eq!(receipt.athlete_name.as_deref(), Some("Jane Doe"));
	}

	#[tokio::test]
	async fn test_submit_rejection_carries_message_and_details() {
		let mut server = mockito::Server::new_async().await;

		let _m = server
			.mock("POST", "/webhook")
			.with_status(200)
			.with_header("content-type", "application/json")
			.with_body(
				r#"{"success":false,"message":"Invalid payload","details":["phone is invalid","email is invalid"]}"#,
			)
			.expect(1)
			.create_async()
			.await;

		let client = test_client(format!("{}/webhook", server.url()));

		let err = client
			.submit(&serde_json::json!({"formType": "registration"}))
			.await
			.unwrap_err();

		match err {
			WebhookError::Rejected { message, details } => {
				assert_eq!(message, "Invalid payload");
				assert_eq!(details.len(), 2);
			}
			other => panic!("Expected rejection, got {:?}", other),
		}
	}

	#[tokio::test]
	async fn test_submit_rejection_without_message_uses_default() {
		let mut server = mockito::Server::new_async().await;

		let _m = server
			.mock("POST", "/webhook")
			.with_status(200)
			.with_header("content-type", "application/json")
			.with_body(r#"{"success":false}"#)
			.create_async()
			.await;

		let client = test_client(format!("{}/webhook", server.url()));

		let err = client
			.submit(&serde_json::json!({"formType": "discovery"}))
			.await
			.unwrap_err();

		match err {
			WebhookError::Rejected { message, details } => {
				assert_eq!(message, "Submission was rejected.");
				assert!(details.is_empty());
			}
			other => panic!("Expected rejection, got {:?}", other),
		}
	}

	#[tokio::test]
	async fn test_submit_non_json_body_is_invalid_response() {
		let mut server = mockito::Server::new_async().await;

		let _m = server
			.mock("POST", "/webhook")
			.with_status(200)
			.with_body("<html>maintenance</html>")
			.create_async()
			.await;

		let client = test_client(format!("{}/webhook", server.url()));

		let err = client
			.submit(&serde_json::json!({"formType": "discovery"}))
			.await
			.unwrap_err();

		assert!(matches!(err, WebhookError::InvalidResponse(_)));
	}

	#[tokio::test]
	async fn test_submit_body_success_flag_decides_despite_http_error_status() {
		// The body contract wins over the HTTP status line.
		let mut server = mockito::Server::new_async().await;

		let _m = server
			.mock("POST", "/webhook")
			.with_status(500)
			.with_header("content-type", "application/json")
			.with_body(r#"{"success":true,"athleteName":"Jane Doe"}"#)
			.create_async()
			.await;

		let client = test_client(format!("{}/webhook", server.url()));

		let receipt = client
			.submit(&serde_json::json!({"formType": "registration"}))
			.await
			.unwrap();

		assert_eq!(receipt.athlete_name.as_deref(), Some("Jane Doe"));
	}

	#[tokio::test]
	async fn test_submit_connection_failure() {
		// Nothing listens on this port.
		let client = test_client("http://127.0.0.1:9/webhook".to_string());

		let err = client
			.submit(&serde_json::json!({"formType": "discovery"}))
			.await
			.unwrap_err();

		assert!(matches!(err, WebhookError::Connection(_)));
	}

	#[tokio::test]
	async fn test_submit_timeout_aborts_and_reports_timeout() {
		use wiremock::matchers::{method, path};
		use wiremock::{Mock, MockServer, ResponseTemplate};

		let server = MockServer::start().await;

		Mock::given(method("POST"))
			.and(path("/webhook"))
			.respond_with(
				ResponseTemplate::new(200)
					.set_body_json(serde_json::json!({"success": true}))
					.set_delay(Duration::from_millis(500)),
			)
			.mount(&server)
			.await;

		let config = WebhookConfig::new(format!("{}/webhook", server.uri()))
			.with_timeout(Duration::from_millis(50));
		let client = WebhookClient::new(config).unwrap();

		let err = client
			.submit(&serde_json::json!({"formType": "registration"}))
			.await
			.unwrap_err();

		assert!(matches!(err, WebhookError::Timeout));
		assert!(err.to_string().contains("timed out"));
	}
}
