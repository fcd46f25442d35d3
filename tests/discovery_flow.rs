//! End-to-end discovery flow against a mock webhook

use std::collections::HashMap;
use trackside::discovery::{self, DiscoveryController};
use trackside::forms::MemoryHandle;
use trackside::ui::StatusKind;
use trackside::webhook::{WebhookClient, WebhookConfig};

fn handles() -> HashMap<String, MemoryHandle> {
	let mut handles = HashMap::new();
	for name in [
		discovery::ATHLETE_NAME,
		discovery::PRIMARY_EVENT,
		discovery::SESSIONS_PER_WEEK,
		discovery::YEARS_TRAINING,
		discovery::PERSONAL_BESTS,
		discovery::INJURIES,
		discovery::MEDICAL_CONDITIONS,
		discovery::SLEEP_HOURS,
		discovery::OCCUPATION,
	] {
		handles.insert(name.to_string(), MemoryHandle::text(name, ""));
	}
	for name in [discovery::DATA_CONSENT, discovery::CONTACT_CONSENT] {
		handles.insert(name.to_string(), MemoryHandle::checkbox(name, false));
	}
	handles
}

fn set(controller: &mut DiscoveryController<MemoryHandle>, name: &str, value: &str) {
	controller.handles_mut().get_mut(name).unwrap().value = value.to_string();
}

fn tick(controller: &mut DiscoveryController<MemoryHandle>, name: &str) {
	controller.handles_mut().get_mut(name).unwrap().checked = true;
}

fn fill_valid(controller: &mut DiscoveryController<MemoryHandle>) {
	controller.prefill_from_query("?athlete=Jane%20Doe");
	set(controller, discovery::PRIMARY_EVENT, "sprints");
	set(controller, discovery::SESSIONS_PER_WEEK, "4");
	tick(controller, discovery::DATA_CONSENT);
	tick(controller, discovery::CONTACT_CONSENT);
	controller.refresh_submit_gate();
}

#[tokio::test]
async fn page_load_prefills_and_keeps_submit_disabled() {
	let client = WebhookClient::new(WebhookConfig::new("http://127.0.0.1:9/webhook")).unwrap();
	let mut controller = DiscoveryController::new(handles(), client);

	let name = controller.prefill_from_query("?athlete=Jane%20Doe");

	assert_eq!(name.as_deref(), Some("Jane Doe"));
	assert_eq!(controller.handles()[discovery::ATHLETE_NAME].value, "Jane Doe");
	assert!(controller.handles()[discovery::ATHLETE_NAME].readonly);

	// Disabled until both consent boxes are ticked.
	assert!(!controller.button.enabled);
	tick(&mut controller, discovery::DATA_CONSENT);
	controller.refresh_submit_gate();
	assert!(!controller.button.enabled);
	tick(&mut controller, discovery::CONTACT_CONSENT);
	controller.refresh_submit_gate();
	assert!(controller.button.enabled);
}

#[tokio::test]
async fn successful_discovery_confirms_and_resets() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/webhook")
		.match_header("content-type", "application/json")
		.match_body(mockito::Matcher::PartialJson(serde_json::json!({
			"formType": "discovery",
			"athleteName": "Jane Doe",
			"training": {"primaryEvent": "Sprints", "sessionsPerWeek": 4.0}
		})))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"success":true}"#)
		.expect(1)
		.create_async()
		.await;

	let client =
		WebhookClient::new(WebhookConfig::new(format!("{}/webhook", server.url()))).unwrap();
	let mut controller = DiscoveryController::new(handles(), client);
	fill_valid(&mut controller);

	let panel = controller.submit().await;

	mock.assert_async().await;
	assert_eq!(panel.kind, StatusKind::Success);
	assert!(panel.html.contains("Your details have been received"));

	// Fields reset; the gate closes again because the consents cleared.
	assert_eq!(controller.handles()[discovery::PRIMARY_EVENT].value, "");
	assert!(!controller.handles()[discovery::DATA_CONSENT].checked);
	assert!(!controller.button.enabled);
	assert!(!controller.button.busy);
}

#[tokio::test]
async fn missing_identifier_short_circuits_with_distinct_status() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/webhook")
		.expect(0)
		.create_async()
		.await;

	let client =
		WebhookClient::new(WebhookConfig::new(format!("{}/webhook", server.url()))).unwrap();
	let mut controller = DiscoveryController::new(handles(), client);
	set(&mut controller, discovery::PRIMARY_EVENT, "sprints");
	tick(&mut controller, discovery::DATA_CONSENT);
	tick(&mut controller, discovery::CONTACT_CONSENT);

	let panel = controller.submit().await;

	mock.assert_async().await;
	assert_eq!(panel.kind, StatusKind::Error);
	assert!(panel.html.contains("could not identify the athlete"));
	// No per-field annotations were attached.
	assert!(!controller.handles()[discovery::SESSIONS_PER_WEEK].has_error());
}

#[tokio::test]
async fn rejection_keeps_values_for_resubmission() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("POST", "/webhook")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"success":false,"message":"Athlete not on file"}"#)
		.create_async()
		.await;

	let client =
		WebhookClient::new(WebhookConfig::new(format!("{}/webhook", server.url()))).unwrap();
	let mut controller = DiscoveryController::new(handles(), client);
	fill_valid(&mut controller);

	let panel = controller.submit().await;

	assert_eq!(panel.kind, StatusKind::Error);
	assert!(panel.html.contains("Athlete not on file"));
	assert_eq!(controller.handles()[discovery::ATHLETE_NAME].value, "Jane Doe");
	// Gate re-evaluates: consents still ticked, so the user may retry.
	assert!(controller.button.enabled);
}
