use clap::Parser;

mod cli;
mod commands;
mod config;
mod contracts;
mod encode;
mod error;
mod etherscan;
mod metadata;

use cli::{Cli, Command};
use error::CliError;

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();

	let cli = Cli::parse();

	if let Err(err) = run(&cli).await {
		eprintln!("{err}");
		std::process::exit(err.exit_code());
	}
}

async fn run(cli: &Cli) -> Result<(), CliError> {
	match &cli.command {
		Command::Deploy { bytecode, supply } => {
			commands::deploy::run(cli, bytecode, *supply).await
		}
		Command::Interact {
			contract,
			to,
			amount,
		} => commands::interact::run(cli, contract, to, *amount).await,
		Command::Subscribe { contract } => commands::subscribe::run(cli, contract).await,
		Command::Input {
			contract_name,
			metadata,
		} => commands::input::run(contract_name, metadata.as_ref()),
		Command::Verify {
			contract_name,
			contract,
			supply,
			compiler_version,
		} => commands::verify::run(contract_name, contract, *supply, compiler_version).await,
	}
}
