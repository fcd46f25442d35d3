//! Bounded single-shot webhook submission for the Trackside intake forms
//!
//! A submission is one JSON POST to a fixed endpoint, bounded by a
//! timeout that aborts the in-flight request. The error taxonomy keeps
//! "timed out" and "could not connect" apart so the status banner can
//! say which happened, and server rejections carry the server's own
//! message plus any itemised details.

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::WebhookClient;
pub use config::{WebhookConfig, DEFAULT_SUBMIT_TIMEOUT};
pub use error::WebhookError;
pub use response::{SubmissionReceipt, WebhookResponse};
