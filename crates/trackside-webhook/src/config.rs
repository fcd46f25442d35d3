use std::time::Duration;

/// How long a submission may stay in flight before it is aborted.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Webhook endpoint configuration
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct WebhookConfig {
	/// Endpoint receiving submitted payloads
	pub url: String,

	/// Request timeout; the in-flight request is aborted when it elapses
	pub timeout: Duration,
}

impl WebhookConfig {
	/// Create a new webhook configuration with the default 30 second timeout
	///
	/// # Examples
	///
	/// ```
	/// use trackside_webhook::WebhookConfig;
	/// use std::time::Duration;
	///
	/// let config = WebhookConfig::new("https://hooks.example.org/intake");
	/// assert_eq!(config.timeout, Duration::from_secs(30));
	/// ```
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			timeout: DEFAULT_SUBMIT_TIMEOUT,
		}
	}

	/// Set the request timeout
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}
