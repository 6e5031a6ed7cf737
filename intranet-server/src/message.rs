use std::fmt::{Display, Formatter};

pub mod client_frame;
pub mod server_frame;

pub type WebSocketMessage = axum::extract::ws::Message;

/// Longest part of a rejected client message that ends up in an error message.
const MAXIMUM_EXCERPT_LENGTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageError {
	DeserializationFailed { error: String, json: String },
	WrongMessageType(WebSocketMessage),
}

impl Display for MessageError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			MessageError::DeserializationFailed { error, json } => {
				write!(formatter, "Failed to deserialize client message with error: {error}, message was: ")?;
				write_excerpt(formatter, json)
			}
			MessageError::WrongMessageType(WebSocketMessage::Binary(bytes)) => write!(
				formatter,
				"Client message has incorrect message type. Message was: binary frame of {} bytes",
				bytes.len()
			),
			MessageError::WrongMessageType(message) => {
				write!(formatter, "Client message has incorrect message type. Message was: {message:?}")
			}
		}
	}
}

impl std::error::Error for MessageError {}

fn write_excerpt(formatter: &mut Formatter<'_>, text: &str) -> std::fmt::Result {
	if text.len() <= MAXIMUM_EXCERPT_LENGTH {
		return formatter.write_str(text);
	}

	let mut end = MAXIMUM_EXCERPT_LENGTH;
	while !text.is_char_boundary(end) {
		end -= 1;
	}
	write!(formatter, "{}... ({} bytes total)", &text[..end], text.len())
}
