use crate::message::WebSocketMessage;
use crate::message::server_frame::ServerFrame;
use crate::relay::connection_id::{ConnectionId, ConnectionIdSequence};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

/// Registry of open connections, each represented by the sending half of its outgoing queue.
pub struct Connections {
	connection_id_sequence: ConnectionIdSequence,
	outgoing_by_id: BTreeMap<ConnectionId, mpsc::Sender<WebSocketMessage>>,
	buffer_size: usize,
}

impl Connections {
	pub fn with_buffer_size(buffer_size: usize) -> Self {
		Self {
			connection_id_sequence: Default::default(),
			outgoing_by_id: Default::default(),
			// tokio panics on zero sized channels
			buffer_size: buffer_size.max(1),
		}
	}

	pub fn add(&mut self) -> (ConnectionId, mpsc::Receiver<WebSocketMessage>) {
		let connection_id = self.connection_id_sequence.next();
		let (sender, receiver) = mpsc::channel(self.buffer_size);

		if self.outgoing_by_id.insert(connection_id, sender).is_some() {
			unreachable!("There must never be two connections with the same id!");
		}

		(connection_id, receiver)
	}

	/// Returns the number of connections that remain.
	pub fn remove(&mut self, connection_id: ConnectionId) -> usize {
		self.outgoing_by_id.remove(&connection_id);
		self.outgoing_by_id.len()
	}

	pub fn count(&self) -> usize {
		self.outgoing_by_id.len()
	}

	/// Queues the frame for every connection and returns how many accepted it.
	///
	/// A connection whose queue is full or closed misses this frame; the others still get it.
	pub fn broadcast(&self, frame: &ServerFrame) -> usize {
		let message = WebSocketMessage::from(frame);

		let mut delivered = 0;
		for (connection_id, outgoing) in &self.outgoing_by_id {
			match outgoing.try_send(message.clone()) {
				Ok(()) => delivered += 1,
				Err(TrySendError::Full(_)) => {
					warn!("Outgoing queue of {connection_id} is full, dropping broadcast.");
				}
				Err(TrySendError::Closed(_)) => {
					warn!("{connection_id} is already closed, dropping broadcast.");
				}
			}
		}
		delivered
	}
}
