use crate::chat::repository::{ChatRepository, MemoryChatRepository};
use crate::configuration::Configuration;
use crate::emergency_notification::repository::{
	EmergencyNotificationRepository, MemoryEmergencyNotificationRepository,
};
use crate::relay::Relay;
use crate::utils::time_source::TimeSource;
use axum::extract::FromRef;
use std::sync::Arc;

/// Everything request and connection handlers share. Each instance is independent,
/// so tests can run several side by side.
#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub time_source: TimeSource,
	pub relay: Relay,
	pub chat_repository: Arc<dyn ChatRepository>,
	pub emergency_notification_repository: Arc<dyn EmergencyNotificationRepository>,
}

impl ApplicationContext {
	pub fn new(configuration: Configuration, time_source: TimeSource) -> ApplicationContext {
		let relay = Relay::new(configuration.connection_buffer_size);
		let chat_repository = Arc::new(MemoryChatRepository::new(time_source.clone()));
		let emergency_notification_repository =
			Arc::new(MemoryEmergencyNotificationRepository::new(time_source.clone()));

		Self {
			configuration,
			time_source,
			relay,
			chat_repository,
			emergency_notification_repository,
		}
	}
}
