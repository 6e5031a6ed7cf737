use crate::chat::model::ChatMessage;
use crate::emergency_notification::model::EmergencyNotification;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server_tests::{connect_to_relay, receive_chat_message, send_chat_message, start_test_server};
use crate::utils::time_source::TimeSource;
use chrono::{TimeDelta, Utc};
use js_int::{int, uint};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn should_create_chat_message() {
	let (test_client, _) = start_test_server(TimeSource::default()).await;
	let before = Utc::now();

	let response = test_client
		.post("/api/chat/messages")
		.json(&json!({"content": "oi", "authorId": 2}))
		.send()
		.await
		.expect("Request failed.");
	let after = Utc::now();

	assert_eq!(StatusCode::CREATED, response.status());
	let ChatMessage {
		id,
		content,
		author_id,
		created_at,
	} = response.json().await.expect("Failed to parse chat message JSON");
	assert_eq!(uint!(1), id);
	assert_eq!("oi", content);
	assert_eq!(int!(2), author_id);
	assert!(before <= created_at && created_at <= after);
}

#[tokio::test]
async fn should_list_chat_messages_oldest_first() {
	let (test_client, application_context) = start_test_server(TimeSource::test()).await;

	let mut created = Vec::new();
	for (content, author_id) in [("first", 1), ("second", 2), ("third", 1)] {
		application_context.time_source.advance_time(TimeDelta::seconds(1));
		let chat_message: ChatMessage = test_client
			.post("/api/chat/messages")
			.json(&json!({"content": content, "authorId": author_id}))
			.send()
			.await
			.expect("Request failed.")
			.json()
			.await
			.expect("Failed to parse chat message JSON");
		created.push(chat_message);
	}

	let response = test_client.get("/api/chat/messages").send().await.expect("Request failed.");

	assert_eq!(StatusCode::OK, response.status());
	let listed: Vec<ChatMessage> = response.json().await.expect("Failed to parse chat messages JSON");
	assert_eq!(created, listed);
}

#[tokio::test]
async fn should_list_no_chat_messages_initially() {
	let (test_client, _) = start_test_server(TimeSource::test()).await;

	let listed: Vec<ChatMessage> = test_client
		.get("/api/chat/messages")
		.send()
		.await
		.expect("Request failed.")
		.json()
		.await
		.expect("Failed to parse chat messages JSON");

	assert!(listed.is_empty());
}

#[tokio::test]
async fn should_reject_malformed_chat_messages() {
	let (test_client, application_context) = start_test_server(TimeSource::test()).await;

	let invalid_requests = [
		test_client
			.post("/api/chat/messages")
			.header("content-type", "application/json")
			.body("{not json"),
		test_client
			.post("/api/chat/messages")
			.json(&json!({"content": "missing author"})),
		test_client
			.post("/api/chat/messages")
			.json(&json!({"content": 42, "authorId": 1})),
		test_client.post("/api/chat/messages").body(r#"{"content":"oi","authorId":2}"#),
	];

	for request in invalid_requests {
		let response = request.send().await.expect("Request failed.");

		assert_eq!(StatusCode::BAD_REQUEST, response.status());
		let error: ApiErrorResponse = response.json().await.expect("Failed to parse error JSON");
		assert_eq!(ApiErrorResponse::invalid_data(), error);
	}
	assert!(
		application_context
			.chat_repository
			.list()
			.expect("Failed to list")
			.is_empty()
	);
}

#[tokio::test]
async fn posting_chat_message_should_not_broadcast_it() {
	let (test_client, _) = start_test_server(TimeSource::test()).await;
	let mut websocket = connect_to_relay(&test_client, "listener").await;

	let response = test_client
		.post("/api/chat/messages")
		.json(&json!({"content": "quiet", "authorId": 3}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::CREATED, response.status());
	send_chat_message(&mut websocket, "loud", 3).await;

	let next = receive_chat_message(&mut websocket).await;
	assert_eq!("loud", next.content);
}

#[tokio::test]
async fn should_create_and_list_emergency_notifications() {
	let (test_client, application_context) = start_test_server(TimeSource::test()).await;

	let response = test_client
		.post("/api/emergency-notifications")
		.json(&json!({"message": "Fire drill", "authorId": 1}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::CREATED, response.status());
	let fire_drill: EmergencyNotification = response.json().await.expect("Failed to parse notification JSON");
	application_context.time_source.advance_time(TimeDelta::seconds(1));
	let power_outage: EmergencyNotification = test_client
		.post("/api/emergency-notifications")
		.json(&json!({"message": "Power outage"}))
		.send()
		.await
		.expect("Request failed.")
		.json()
		.await
		.expect("Failed to parse notification JSON");

	let active: Vec<EmergencyNotification> = test_client
		.get("/api/emergency-notifications")
		.send()
		.await
		.expect("Request failed.")
		.json()
		.await
		.expect("Failed to parse notifications JSON");

	assert_eq!(uint!(1), fire_drill.id);
	assert!(fire_drill.is_active);
	assert_eq!(Some(int!(1)), fire_drill.author_id);
	assert_eq!(None, power_outage.author_id);
	assert_eq!(vec![power_outage, fire_drill], active);
}

#[tokio::test]
async fn should_deactivate_emergency_notification() {
	let (test_client, _) = start_test_server(TimeSource::test()).await;
	let notification: EmergencyNotification = test_client
		.post("/api/emergency-notifications")
		.json(&json!({"message": "Evacuate"}))
		.send()
		.await
		.expect("Request failed.")
		.json()
		.await
		.expect("Failed to parse notification JSON");

	let response = test_client
		.delete(&format!("/api/emergency-notifications/{}", notification.id))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::NO_CONTENT, response.status());
	let active: Vec<EmergencyNotification> = test_client
		.get("/api/emergency-notifications")
		.send()
		.await
		.expect("Request failed.")
		.json()
		.await
		.expect("Failed to parse notifications JSON");
	assert!(active.is_empty());
}

#[tokio::test]
async fn should_ignore_deactivating_unknown_emergency_notification() {
	let (test_client, _) = start_test_server(TimeSource::test()).await;

	for path in ["/api/emergency-notifications/1337", "/api/emergency-notifications/18446744073709551615"] {
		let response = test_client.delete(path).send().await.expect("Request failed.");

		assert_eq!(StatusCode::NO_CONTENT, response.status());
	}
}

#[tokio::test]
async fn should_reject_invalid_emergency_notification_ids() {
	let (test_client, _) = start_test_server(TimeSource::test()).await;

	// Rejected as invalid data instead of being coerced into a silent no-op.
	for path in ["/api/emergency-notifications/not-a-number", "/api/emergency-notifications/-1"] {
		let response = test_client.delete(path).send().await.expect("Request failed.");

		assert_eq!(StatusCode::BAD_REQUEST, response.status());
		let error: ApiErrorResponse = response.json().await.expect("Failed to parse error JSON");
		assert_eq!(ApiErrorResponse::invalid_data(), error);
	}
}

#[tokio::test]
async fn should_reject_emergency_notification_without_message() {
	let (test_client, _) = start_test_server(TimeSource::test()).await;

	let response = test_client
		.post("/api/emergency-notifications")
		.json(&json!({"authorId": 1}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
}
