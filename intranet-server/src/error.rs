use crate::configuration::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntranetError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("IO error while serving requests: {0}")]
	Server(#[from] std::io::Error),
}
