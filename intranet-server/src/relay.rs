use crate::chat::model::{ChatMessage, NewChatMessage};
use crate::chat::repository::ChatRepository;
use crate::message::WebSocketMessage;
use crate::message::server_frame::ServerFrame;
use crate::relay::connection_id::ConnectionId;
use crate::relay::connections::Connections;
use crate::store::StoreError;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

pub mod connection_id;
mod connections;

/// Fans chat messages out to every open websocket connection.
#[derive(Clone)]
pub struct Relay {
	connections: Arc<parking_lot::Mutex<Connections>>,
}

impl Relay {
	/// `buffer_size` bounds how many messages may wait for a single connection.
	pub fn new(buffer_size: usize) -> Self {
		Self {
			connections: Arc::new(parking_lot::Mutex::new(Connections::with_buffer_size(buffer_size))),
		}
	}

	/// Registers a connection. Broadcasts for it arrive on the returned receiver.
	pub fn register(&self) -> (ConnectionId, mpsc::Receiver<WebSocketMessage>) {
		self.connections.lock().add()
	}

	/// Returns the number of connections that remain.
	pub fn remove(&self, connection_id: ConnectionId) -> usize {
		self.connections.lock().remove(connection_id)
	}

	pub fn connection_count(&self) -> usize {
		self.connections.lock().count()
	}

	/// Stores the message and queues it for every connection, the sender's included.
	///
	/// The registry stays locked from append until every queue has the message, so all
	/// connections see messages in the order their ids were assigned.
	pub fn publish_chat_message(
		&self,
		chat_repository: &dyn ChatRepository,
		message: NewChatMessage,
	) -> Result<ChatMessage, StoreError> {
		let connections = self.connections.lock();
		let chat_message = chat_repository.append(message)?;

		let delivered = connections.broadcast(&ServerFrame::from(chat_message.clone()));
		debug!(
			"Relayed chat message {} to {delivered} of {} connections.",
			chat_message.id,
			connections.count()
		);

		Ok(chat_message)
	}
}
