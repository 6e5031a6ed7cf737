use crate::emergency_notification::model::{EmergencyNotification, NewEmergencyNotification};
use crate::store::StoreError;
use crate::store::memory::MemoryTable;
use crate::utils::time_source::TimeSource;
use js_int::UInt;
use std::cmp::Reverse;

pub trait EmergencyNotificationRepository: Send + Sync + 'static {
	fn create(&self, notification: NewEmergencyNotification) -> Result<EmergencyNotification, StoreError>;

	/// Active notifications, newest first.
	fn list_active(&self) -> Result<Vec<EmergencyNotification>, StoreError>;

	/// Marks the notification as inactive. Unknown ids are ignored.
	fn deactivate(&self, id: UInt) -> Result<(), StoreError>;
}

pub struct MemoryEmergencyNotificationRepository {
	table: MemoryTable<EmergencyNotification>,
	time_source: TimeSource,
}

impl MemoryEmergencyNotificationRepository {
	pub fn new(time_source: TimeSource) -> Self {
		Self {
			table: MemoryTable::new("emergency_notification"),
			time_source,
		}
	}
}

impl EmergencyNotificationRepository for MemoryEmergencyNotificationRepository {
	fn create(
		&self,
		NewEmergencyNotification {
			message,
			author_id,
			is_active,
		}: NewEmergencyNotification,
	) -> Result<EmergencyNotification, StoreError> {
		let created_at = self.time_source.now();
		self.table.insert_with(|id| EmergencyNotification {
			id,
			message,
			author_id,
			is_active,
			created_at,
		})
	}

	fn list_active(&self) -> Result<Vec<EmergencyNotification>, StoreError> {
		let mut active: Vec<_> = self
			.table
			.all()
			.into_iter()
			.filter(|notification| notification.is_active)
			.collect();
		// stable, so notifications created at the same instant stay in creation order
		active.sort_by_key(|notification| Reverse(notification.created_at));
		Ok(active)
	}

	fn deactivate(&self, id: UInt) -> Result<(), StoreError> {
		self.table.update(id, |notification| notification.is_active = false);
		Ok(())
	}
}
