use crate::connection::sender::{MessageSender, MessageSenderTrait, SendError};
use crate::message::WebSocketMessage;
use async_trait::async_trait;
use std::sync::Arc;

/// Records everything sent through it, or fails every send if created with [`FakeMessageSender::failing`].
#[derive(Clone, Debug, Default)]
pub struct FakeMessageSender {
	sent_messages: Arc<parking_lot::Mutex<Vec<WebSocketMessage>>>,
	failing: bool,
}

impl FakeMessageSender {
	pub fn failing() -> Self {
		Self {
			failing: true,
			..Default::default()
		}
	}

	pub fn sent_messages(&self) -> Vec<WebSocketMessage> {
		self.sent_messages.lock().clone()
	}
}

impl From<FakeMessageSender> for MessageSender {
	fn from(fake_message_sender: FakeMessageSender) -> Self {
		Arc::new(fake_message_sender)
	}
}

#[async_trait]
impl MessageSenderTrait for FakeMessageSender {
	async fn send(&self, message: WebSocketMessage) -> Result<(), SendError> {
		if self.failing {
			return Err(SendError::new("fake connection is broken"));
		}

		self.sent_messages.lock().push(message);
		Ok(())
	}

	async fn close(&self) {
		self.sent_messages.lock().push(WebSocketMessage::Close(None));
	}
}
