//! Submit control and status region state
//!
//! The single status region has three mutually exclusive modes; the
//! submit control is disabled while a submission is in flight so at most
//! one request per form is ever outstanding. Everything here is plain
//! data for a renderer to apply.

use crate::handoff::discovery_link;
use trackside_webhook::WebhookError;

/// Visual mode of the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
	Info,
	Error,
	Success,
}

/// Content for the single status region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
	pub kind: StatusKind,
	/// HTML fragment for the region; plain messages are escaped and
	/// wrapped in a paragraph.
	pub html: String,
	/// The page should scroll back to the top after rendering.
	pub scroll_to_top: bool,
}

impl StatusPanel {
	pub fn info(message: &str) -> Self {
		Self {
			kind: StatusKind::Info,
			html: format!("<p>{}</p>", escape_html(message)),
			scroll_to_top: false,
		}
	}

	pub fn error(message: &str) -> Self {
		Self {
			kind: StatusKind::Error,
			html: format!("<p>{}</p>", escape_html(message)),
			scroll_to_top: false,
		}
	}

	pub fn success(html: String) -> Self {
		Self {
			kind: StatusKind::Success,
			html,
			scroll_to_top: false,
		}
	}
}

/// Banner shown when form-level validation fails.
pub fn form_invalid_banner() -> StatusPanel {
	StatusPanel::error("Please correct the highlighted fields above and try again.")
}

/// Banner for a failed submission attempt.
///
/// Transport failures render their user-facing message; a server
/// rejection combines the server's message with its itemised details.
pub fn submission_failed_banner(error: &WebhookError) -> StatusPanel {
	let mut html = format!("<p>{}</p>", escape_html(&error.to_string()));

	let details = error.details();
	if !details.is_empty() {
		html.push_str("<ul>");
		for detail in details {
			html.push_str(&format!("<li>{}</li>", escape_html(detail)));
		}
		html.push_str("</ul>");
	}

	StatusPanel {
		kind: StatusKind::Error,
		html,
		scroll_to_top: false,
	}
}

/// Success panel for the registration form.
///
/// Carries the follow-up link to the discovery form with the athlete's
/// canonical name in the query string, and scrolls the page to the top.
pub fn registration_success_panel(athlete_name: &str) -> StatusPanel {
	let html = format!(
		"<p>Thank you! {}'s registration has been received.</p>\
		 <p><a href=\"{}\">Continue to the athlete discovery form</a></p>",
		escape_html(athlete_name),
		discovery_link(athlete_name)
	);

	StatusPanel {
		kind: StatusKind::Success,
		html,
		scroll_to_top: true,
	}
}

/// Success panel for the discovery form: a plain confirmation.
pub fn discovery_success_panel() -> StatusPanel {
	StatusPanel {
		kind: StatusKind::Success,
		html: "<p>Thank you! Your details have been received. A coach will be in touch.</p>"
			.to_string(),
		scroll_to_top: false,
	}
}

/// State of a form's submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
	pub enabled: bool,
	pub busy: bool,
	idle_label: String,
	busy_label: String,
}

impl SubmitButton {
	/// An enabled submit control.
	pub fn new(idle_label: impl Into<String>, busy_label: impl Into<String>) -> Self {
		Self {
			enabled: true,
			busy: false,
			idle_label: idle_label.into(),
			busy_label: busy_label.into(),
		}
	}

	/// A control that starts disabled (consent-gated forms).
	pub fn disabled(idle_label: impl Into<String>, busy_label: impl Into<String>) -> Self {
		Self {
			enabled: false,
			..Self::new(idle_label, busy_label)
		}
	}

	/// Disable the control and swap its label for the in-flight one.
	pub fn begin_submit(&mut self) {
		self.busy = true;
		self.enabled = false;
	}

	/// Submission finished; restore the label and the given enablement.
	pub fn finish(&mut self, enabled: bool) {
		self.busy = false;
		self.enabled = enabled;
	}

	pub fn label(&self) -> &str {
		if self.busy {
			&self.busy_label
		} else {
			&self.idle_label
		}
	}
}

/// Minimal HTML escaping for text interpolated into status fragments.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
