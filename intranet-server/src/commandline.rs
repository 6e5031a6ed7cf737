use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::IntranetError;
use crate::server::run_server;
use crate::utils::time_source::TimeSource;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
pub struct Commandline {
	#[arg(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[command(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Default)]
pub enum BaseCommand {
	/// Run the intranet server
	#[default]
	Run,
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub async fn run(self) -> Result<(), IntranetError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;

		tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::new(&configuration.log_filters))
			.init();

		let application_context = ApplicationContext::new(configuration, TimeSource::default());

		match self.command.unwrap_or_default() {
			BaseCommand::Run => {
				info!(
					"Starting server. Chat relay available at 'ws://{}/ws'.",
					application_context.configuration.address
				);
				run_server(application_context).await?;
			}
			BaseCommand::Configuration => println!("{:?}", application_context.configuration),
		}
		Ok(())
	}
}
