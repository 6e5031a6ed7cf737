use crate::message::WebSocketMessage;
use async_trait::async_trait;
use axum::extract::ws::WebSocket;
use futures_util::stream::SplitSink;
use futures_util::{Sink, SinkExt};
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

pub type MessageSender = Arc<dyn MessageSenderTrait + Send + Sync>;

#[async_trait]
pub trait MessageSenderTrait {
	async fn send(&self, message: WebSocketMessage) -> Result<(), SendError>;
	async fn close(&self);
}

#[derive(Debug, Error)]
#[error("Failed to send websocket message: {0}")]
pub struct SendError(String);

impl SendError {
	pub fn new(reason: impl Into<String>) -> Self {
		Self(reason.into())
	}
}

pub type WebSocketMessageSender = SinkMessageSender<SplitSink<WebSocket, WebSocketMessage>>;

pub struct SinkMessageSender<ResponseSink> {
	response_sink: tokio::sync::Mutex<ResponseSink>,
}

impl<ResponseSink> SinkMessageSender<ResponseSink> {
	pub fn new(response_sink: ResponseSink) -> Self {
		Self {
			response_sink: tokio::sync::Mutex::new(response_sink),
		}
	}
}

#[async_trait]
impl<ResponseSink, SinkError> MessageSenderTrait for SinkMessageSender<ResponseSink>
where
	ResponseSink: Sink<WebSocketMessage, Error = SinkError> + Send + Unpin + 'static,
	SinkError: Debug + Send + 'static,
{
	async fn send(&self, message: WebSocketMessage) -> Result<(), SendError> {
		let mut response_sink = self.response_sink.lock().await;
		response_sink
			.send(message)
			.await
			.map_err(|error| SendError::new(format!("{error:?}")))
	}

	async fn close(&self) {
		let mut response_sink = self.response_sink.lock().await;
		let _ = response_sink.send(WebSocketMessage::Close(None)).await;
	}
}

impl<ResponseSink, SinkError> From<SinkMessageSender<ResponseSink>> for MessageSender
where
	ResponseSink: Sink<WebSocketMessage, Error = SinkError> + Send + Unpin + 'static,
	SinkError: Debug + Send + 'static,
{
	fn from(sink_message_sender: SinkMessageSender<ResponseSink>) -> Self {
		Arc::new(sink_message_sender)
	}
}
