use crate::store::StoreError;
use crate::store::id_sequence::IdSequence;
use js_int::UInt;
use std::collections::BTreeMap;

/// Process-lifetime table of records keyed by an auto-incrementing id.
///
/// Records live in memory only and are lost on restart.
pub struct MemoryTable<Record> {
	name: &'static str,
	inner: parking_lot::Mutex<Inner<Record>>,
}

struct Inner<Record> {
	id_sequence: IdSequence,
	records: BTreeMap<UInt, Record>,
}

impl<Record: Clone> MemoryTable<Record> {
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			inner: parking_lot::Mutex::new(Inner {
				id_sequence: IdSequence::default(),
				records: BTreeMap::new(),
			}),
		}
	}

	/// Assigns the next id and stores the record built from it.
	pub fn insert_with(&self, create: impl FnOnce(UInt) -> Record) -> Result<Record, StoreError> {
		let mut inner = self.inner.lock();
		let id = inner
			.id_sequence
			.next()
			.ok_or(StoreError::IdsExhausted { table: self.name })?;

		let record = create(id);
		if inner.records.insert(id, record.clone()).is_some() {
			unreachable!("There must never be two records with the same id!");
		}

		Ok(record)
	}

	/// All records in ascending id order.
	pub fn all(&self) -> Vec<Record> {
		self.inner.lock().records.values().cloned().collect()
	}

	/// Returns `false` if no record with this id exists.
	pub fn update(&self, id: UInt, update: impl FnOnce(&mut Record)) -> bool {
		match self.inner.lock().records.get_mut(&id) {
			Some(record) => {
				update(record);
				true
			}
			None => false,
		}
	}
}
