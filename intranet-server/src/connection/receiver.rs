use crate::connection::sender::MessageSender;
use crate::message::WebSocketMessage;
use crate::message::client_frame::ClientFrame;
use async_trait::async_trait;
use futures_util::{Stream, StreamExt};
use std::fmt::Display;
use tracing::{debug, warn};

pub type MessageReceiver = Box<dyn MessageReceiverTrait + Send>;

#[async_trait]
pub trait MessageReceiverTrait {
	/// Receive the next well-formed frame from the client or `None` once the connection is closed.
	///
	/// Malformed frames are logged and skipped, the client is never told about them.
	async fn receive(&mut self) -> Option<ClientFrame>;
}

pub struct StreamMessageReceiver<RequestStream> {
	request_stream: RequestStream,
	message_sender: MessageSender,
}

impl<RequestStream> StreamMessageReceiver<RequestStream> {
	pub fn new(request_stream: RequestStream, message_sender: MessageSender) -> Self {
		Self {
			request_stream,
			message_sender,
		}
	}
}

#[async_trait]
impl<RequestStream, StreamError> MessageReceiverTrait for StreamMessageReceiver<RequestStream>
where
	RequestStream: Stream<Item = Result<WebSocketMessage, StreamError>> + Unpin + Send,
	StreamError: Display + Send,
{
	async fn receive(&mut self) -> Option<ClientFrame> {
		loop {
			let websocket_message = match self.request_stream.next().await? {
				Ok(websocket_message) => websocket_message,
				Err(error) => {
					debug!("Websocket connection failed: {error}");
					return None;
				}
			};

			match websocket_message {
				WebSocketMessage::Close(_) => {
					self.message_sender.close().await;
					return None;
				}
				WebSocketMessage::Ping(_) | WebSocketMessage::Pong(_) => continue,
				_ => {}
			}

			match ClientFrame::try_from(&websocket_message) {
				Ok(frame) => return Some(frame),
				Err(error) => warn!("Dropping client frame. {error}"),
			}
		}
	}
}

impl<RequestStream, StreamError> From<StreamMessageReceiver<RequestStream>> for MessageReceiver
where
	RequestStream: Stream<Item = Result<WebSocketMessage, StreamError>> + Unpin + Send + 'static,
	StreamError: Display + Send + 'static,
{
	fn from(stream_message_receiver: StreamMessageReceiver<RequestStream>) -> Self {
		Box::new(stream_message_receiver)
	}
}
