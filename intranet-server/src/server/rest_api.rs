use crate::chat::model::{ChatMessage, NewChatMessage};
use crate::chat::repository::ChatRepository;
use crate::context::ApplicationContext;
use crate::emergency_notification::model::{EmergencyNotification, NewEmergencyNotification};
use crate::emergency_notification::repository::EmergencyNotificationRepository;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::request::{JsonBody, PathParameter};
use crate::server::rest_api::response::Created;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use js_int::UInt;
use std::sync::Arc;

pub mod error;
pub mod request;
pub mod response;

pub fn rest_api() -> Router<ApplicationContext> {
	Router::new()
		.route("/chat/messages", get(chat_messages).post(create_chat_message))
		.route(
			"/emergency-notifications",
			get(active_emergency_notifications).post(create_emergency_notification),
		)
		.route("/emergency-notifications/{id}", delete(deactivate_emergency_notification))
}

async fn chat_messages(
	State(chat_repository): State<Arc<dyn ChatRepository>>,
) -> Result<Json<Vec<ChatMessage>>, ApiErrorResponse> {
	Ok(Json(chat_repository.list()?))
}

/// Stores the message without relaying it to websocket connections.
async fn create_chat_message(
	State(chat_repository): State<Arc<dyn ChatRepository>>,
	JsonBody(new_chat_message): JsonBody<NewChatMessage>,
) -> Result<Created<Json<ChatMessage>>, ApiErrorResponse> {
	let chat_message = chat_repository.append(new_chat_message)?;
	Ok(Created(Json(chat_message)))
}

async fn active_emergency_notifications(
	State(repository): State<Arc<dyn EmergencyNotificationRepository>>,
) -> Result<Json<Vec<EmergencyNotification>>, ApiErrorResponse> {
	Ok(Json(repository.list_active()?))
}

async fn create_emergency_notification(
	State(repository): State<Arc<dyn EmergencyNotificationRepository>>,
	JsonBody(new_notification): JsonBody<NewEmergencyNotification>,
) -> Result<Created<Json<EmergencyNotification>>, ApiErrorResponse> {
	let notification = repository.create(new_notification)?;
	Ok(Created(Json(notification)))
}

async fn deactivate_emergency_notification(
	State(repository): State<Arc<dyn EmergencyNotificationRepository>>,
	PathParameter(id): PathParameter<u64>,
) -> Result<StatusCode, ApiErrorResponse> {
	// ids beyond the UInt range can't exist, so there is nothing to deactivate
	if let Some(id) = UInt::new(id) {
		repository.deactivate(id)?;
	}
	Ok(StatusCode::NO_CONTENT)
}
