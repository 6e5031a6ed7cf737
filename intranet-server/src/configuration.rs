use serde::Deserialize;
use std::fs::read_to_string;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Configuration {
	#[serde(with = "socket_addr_deserializer")]
	pub address: SocketAddr,
	pub log_filters: String,
	/// Outgoing messages that may be queued for a single connection before
	/// further broadcasts to it are dropped.
	pub connection_buffer_size: usize,
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}

// See https://serde.rs/custom-date-format.html
mod socket_addr_deserializer {
	use serde::{self, Deserialize, Deserializer};
	use std::net::SocketAddr;
	use std::str::FromStr;

	pub fn deserialize<'deserializer, D>(deserializer: D) -> Result<SocketAddr, D::Error>
	where
		D: Deserializer<'deserializer>,
	{
		let string = String::deserialize(deserializer)?;
		SocketAddr::from_str(string.as_str()).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
impl Default for Configuration {
	fn default() -> Self {
		Self {
			address: SocketAddr::from(([127, 0, 0, 1], 8000)),
			log_filters: "info".to_string(),
			connection_buffer_size: 16,
		}
	}
}
