use js_int::UInt;
use std::ops::RangeInclusive;

/// Hands out record ids, starting at 1 and never exceeding what JavaScript clients
/// can represent exactly.
pub struct IdSequence {
	id_pool: RangeInclusive<u64>,
}

impl Default for IdSequence {
	fn default() -> Self {
		Self {
			id_pool: 1..=UInt::MAX.into(),
		}
	}
}

impl IdSequence {
	#[cfg(test)]
	pub fn starting_at(first: u64) -> Self {
		Self {
			id_pool: first..=UInt::MAX.into(),
		}
	}

	pub fn next(&mut self) -> Option<UInt> {
		self.id_pool
			.next()
			.map(|id| UInt::try_from(id).unwrap_or_else(|_| unreachable!("The id pool never exceeds UInt::MAX")))
	}
}
