use thiserror::Error;

pub mod id_sequence;
pub mod memory;

/// Type erased error that works for all kinds of store implementations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
	#[error("Ran out of available ids for '{table}'")]
	IdsExhausted { table: &'static str },
}
