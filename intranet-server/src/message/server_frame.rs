use crate::chat::model::ChatMessage;
use crate::message::{MessageError, WebSocketMessage};
use serde::{Deserialize, Serialize};

/// Envelopes the server pushes to connected clients.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ServerFrame {
	ChatMessage(ChatMessage),
}

impl From<ChatMessage> for ServerFrame {
	fn from(chat_message: ChatMessage) -> Self {
		ServerFrame::ChatMessage(chat_message)
	}
}

impl From<&ServerFrame> for WebSocketMessage {
	fn from(frame: &ServerFrame) -> Self {
		let json = serde_json::to_string(frame).expect("Failed to serialize server frame to JSON.");
		WebSocketMessage::Text(json.into())
	}
}

impl TryFrom<&str> for ServerFrame {
	type Error = MessageError;

	fn try_from(json: &str) -> Result<Self, Self::Error> {
		serde_json::from_str(json).map_err(|error| MessageError::DeserializationFailed {
			error: error.to_string(),
			json: json.to_string(),
		})
	}
}
