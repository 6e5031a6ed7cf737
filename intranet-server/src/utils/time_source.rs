use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the server clock.
///
/// The default reads the system clock. [`TimeSource::test`] creates a clock that only moves
/// when told to, so timestamps assigned during a test are predictable.
#[derive(Clone, Default)]
pub struct TimeSource {
	test_time: Option<Arc<parking_lot::Mutex<DateTime<Utc>>>>,
}

impl TimeSource {
	#[cfg(test)]
	pub fn test() -> Self {
		use chrono::TimeZone;

		let start = Utc
			.timestamp_opt(1_600_000_000, 0)
			.single()
			.expect("Start of test time is a valid timestamp");
		Self {
			test_time: Some(Arc::new(parking_lot::Mutex::new(start))),
		}
	}

	pub fn now(&self) -> DateTime<Utc> {
		match &self.test_time {
			None => Utc::now(),
			Some(test_time) => *test_time.lock(),
		}
	}

	#[cfg(test)]
	pub fn advance_time(&self, by: chrono::TimeDelta) {
		let test_time = self.test_time.as_ref().expect("Can only be called in test mode.");
		let mut time = test_time.lock();
		*time += by;
	}
}
