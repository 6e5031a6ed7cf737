use crate::commandline::Commandline;
use crate::error::IntranetError;
use clap::Parser;

mod chat;
mod commandline;
mod configuration;
mod connection;
mod context;
mod emergency_notification;
mod error;
mod lifecycle;
mod message;
mod relay;
mod server;
mod store;
mod utils;

#[tokio::main]
async fn main() -> Result<(), IntranetError> {
	Commandline::parse().run().await
}
