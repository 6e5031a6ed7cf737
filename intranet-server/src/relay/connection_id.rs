use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ConnectionId {
	id: u64,
}

impl From<u64> for ConnectionId {
	fn from(id: u64) -> Self {
		ConnectionId { id }
	}
}

impl From<ConnectionId> for u64 {
	fn from(connection_id: ConnectionId) -> Self {
		connection_id.id
	}
}

impl Display for ConnectionId {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		write!(formatter, "ConnectionId({})", self.id)
	}
}

pub struct ConnectionIdSequence {
	id_pool: RangeInclusive<u64>,
}

impl Default for ConnectionIdSequence {
	fn default() -> Self {
		Self { id_pool: 0..=u64::MAX }
	}
}

impl ConnectionIdSequence {
	pub fn next(&mut self) -> ConnectionId {
		ConnectionId::from(self.id_pool.next().expect("Ran out of available ConnectionIds."))
	}
}
