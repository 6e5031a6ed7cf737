use crate::chat::model::NewChatMessage;
use crate::message::{MessageError, WebSocketMessage};
use serde::Deserialize;

/// Frames a client may send over the chat websocket.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ClientFrame {
	ChatMessage(NewChatMessage),
	/// Any `type` this server doesn't know about.
	#[serde(other)]
	Unknown,
}

impl TryFrom<&str> for ClientFrame {
	type Error = MessageError;

	fn try_from(json: &str) -> Result<Self, Self::Error> {
		serde_json::from_str(json).map_err(|error| MessageError::DeserializationFailed {
			error: error.to_string(),
			json: json.to_string(),
		})
	}
}

impl TryFrom<&WebSocketMessage> for ClientFrame {
	type Error = MessageError;

	fn try_from(websocket_message: &WebSocketMessage) -> Result<Self, Self::Error> {
		match websocket_message {
			WebSocketMessage::Text(json) => json.as_str().try_into(),
			_ => Err(MessageError::WrongMessageType(websocket_message.clone())),
		}
	}
}
