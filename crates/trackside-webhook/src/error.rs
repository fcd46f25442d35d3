/// Errors a submission attempt can end in.
///
/// Every variant's `Display` text is user-facing; controllers render it
/// into the status banner verbatim. A failed attempt is terminal: nothing
/// is retried or persisted, the user edits and resubmits.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
	/// The configured timeout elapsed and the request was aborted.
	#[error("The request timed out. Please check your connection and try again.")]
	Timeout,

	/// The endpoint could not be reached at all.
	#[error("Could not reach the server. Please try again.")]
	Connection(String),

	/// The endpoint answered, but not with the expected JSON shape.
	#[error("The server returned an unexpected response. Please try again.")]
	InvalidResponse(String),

	/// The endpoint processed the request and rejected the payload.
	#[error("{message}")]
	Rejected {
		message: String,
		details: Vec<String>,
	},

	/// The HTTP client could not be constructed.
	#[error("Failed to initialise the submission client: {0}")]
	Client(String),
}

impl WebhookError {
	/// Itemised details accompanying a server rejection, if any.
	pub fn details(&self) -> &[String] {
		match self {
			Self::Rejected { details, .. } => details,
			_ => &[],
		}
	}
}
