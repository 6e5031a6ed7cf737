use crate::chat::model::{ChatMessage, NewChatMessage};
use crate::store::StoreError;
use crate::store::memory::MemoryTable;
use crate::utils::time_source::TimeSource;


/// Append-only store for chat messages.
pub trait ChatRepository: Send + Sync + 'static {
	/// Stores the message under the next id, stamped with the current time.
	fn append(&self, message: NewChatMessage) -> Result<ChatMessage, StoreError>;

	/// All messages, oldest first.
	fn list(&self) -> Result<Vec<ChatMessage>, StoreError>;
}

pub struct MemoryChatRepository {
	table: MemoryTable<ChatMessage>,
	time_source: TimeSource,
}

impl MemoryChatRepository {
	pub fn new(time_source: TimeSource) -> Self {
		Self {
			table: MemoryTable::new("chat_message"),
			time_source,
		}
	}
}

impl ChatRepository for MemoryChatRepository {
	fn append(&self, NewChatMessage { content, author_id }: NewChatMessage) -> Result<ChatMessage, StoreError> {
		let created_at = self.time_source.now();
		self.table.insert_with(|id| ChatMessage {
			id,
			content,
			author_id,
			created_at,
		})
	}

	fn list(&self) -> Result<Vec<ChatMessage>, StoreError> {
		Ok(self.table.all())
	}
}
