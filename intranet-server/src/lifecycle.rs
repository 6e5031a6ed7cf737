use crate::connection::receiver::MessageReceiver;
use crate::connection::sender::MessageSender;
use crate::context::ApplicationContext;
use crate::message::WebSocketMessage;
use crate::message::client_frame::ClientFrame;
use crate::relay::connection_id::ConnectionId;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Serves one websocket connection from registration until it closes.
pub async fn run_connection(
	application_context: ApplicationContext,
	message_sender: MessageSender,
	message_receiver: MessageReceiver,
) {
	let relay = application_context.relay.clone();
	let (connection_id, outgoing_messages) = relay.register();
	info!("{connection_id} opened.");

	tokio::select! {
		() = handle_messages(&application_context, connection_id, message_receiver) => {},
		() = send_broadcasts(connection_id, outgoing_messages, message_sender) => {},
	}

	let remaining = relay.remove(connection_id);
	info!("{connection_id} closed, {remaining} connections remaining.");
}

async fn handle_messages(
	application_context: &ApplicationContext,
	connection_id: ConnectionId,
	mut message_receiver: MessageReceiver,
) {
	while let Some(frame) = message_receiver.receive().await {
		match frame {
			ClientFrame::ChatMessage(chat_message) => {
				debug!("Received chat message from {connection_id}.");
				if let Err(error) = application_context
					.relay
					.publish_chat_message(application_context.chat_repository.as_ref(), chat_message)
				{
					error!("Failed to store chat message from {connection_id}: {error}");
				}
				// A burst of buffered frames would otherwise fill every outbound queue before any writer runs.
				tokio::task::yield_now().await;
			}
			ClientFrame::Unknown => debug!("Ignoring frame of unknown type from {connection_id}."),
		}
	}
}

async fn send_broadcasts(
	connection_id: ConnectionId,
	mut outgoing_messages: mpsc::Receiver<WebSocketMessage>,
	message_sender: MessageSender,
) {
	while let Some(message) = outgoing_messages.recv().await {
		if let Err(error) = message_sender.send(message).await {
			warn!("Giving up on {connection_id}: {error}");
			break;
		}
	}
}
