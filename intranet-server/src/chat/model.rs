use chrono::{DateTime, Utc};
use js_int::{Int, UInt};
use serde::{Deserialize, Serialize};

/// A chat message as stored. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
	pub id: UInt,
	pub content: String,
	/// Claimed by the client, not checked against any user registry.
	pub author_id: Int,
	pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatMessage {
	pub content: String,
	pub author_id: Int,
}
