use chrono::{DateTime, Utc};
use js_int::{Int, UInt};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyNotification {
	pub id: UInt,
	pub message: String,
	pub author_id: Option<Int>,
	pub is_active: bool,
	pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmergencyNotification {
	pub message: String,
	#[serde(default)]
	pub author_id: Option<Int>,
	#[serde(default = "active_by_default")]
	pub is_active: bool,
}

fn active_by_default() -> bool {
	true
}
