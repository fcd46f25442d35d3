//! # Trackside
//!
//! Client-side engine for a pair of athlete intake forms: registration
//! and discovery. Each form gets one controller, constructed with
//! injected field handles and a webhook client; the host wires its UI
//! events to the controller's command handlers and renders the plain
//! data records they return.
//!
//! The engine splits into three layers:
//!
//! - [`forms`] (`trackside-forms`) — typed field validation, the form
//!   aggregate, and the `FieldHandle` capability that keeps validation
//!   off the live document
//! - [`webhook`] (`trackside-webhook`) — the single bounded JSON POST a
//!   submission consists of
//! - this crate — the controllers plus the guardian-section state
//!   machine, payload shaping, submit/status UI state, and the
//!   page-to-page handoff
//!
//! ## Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use trackside::forms::MemoryHandle;
//! use trackside::webhook::{WebhookClient, WebhookConfig};
//! use trackside::RegistrationController;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let handles: HashMap<String, MemoryHandle> = HashMap::new();
//! let client = WebhookClient::new(WebhookConfig::new("https://hooks.example.org/intake"))?;
//!
//! let mut controller = RegistrationController::new(handles, client);
//! let panel = controller.submit().await;
//! # Ok(())
//! # }
//! ```

pub use trackside_forms as forms;
pub use trackside_webhook as webhook;

pub mod collect;
pub mod discovery;
pub mod guardian;
pub mod handoff;
pub mod payload;
pub mod registration;
pub mod ui;

pub use discovery::{DiscoveryController, FormOutcome};
pub use guardian::{age_on, GuardianState, SectionDirectives, GUARDIAN_AGE_THRESHOLD};
pub use registration::RegistrationController;
pub use ui::{StatusKind, StatusPanel, SubmitButton};
