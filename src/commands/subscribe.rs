use alloy::eips::BlockNumberOrTag;
use alloy::providers::{Provider, ProviderBuilder, WsConnect};
use alloy::rpc::types::Filter;
use alloy::sol_types::SolEvent;
use anyhow::anyhow;
use futures_util::StreamExt;

use crate::cli::Cli;
use crate::commands::{load_config, parse_address, resolve_ws_rpc};
use crate::contracts::MyToken;
use crate::error::CliError;

pub async fn run(cli: &Cli, contract: &str) -> Result<(), CliError> {
	let config = load_config()?;
	let rpc_url = resolve_ws_rpc(cli, &config);
	let contract_address = parse_address(contract)?;

	let ws = WsConnect::new(&rpc_url);
	let provider = ProviderBuilder::new()
		.connect_ws(ws)
		.await
		.map_err(CliError::connect)?;
	println!("Connected to {rpc_url}");

	let filter = Filter::new()
		.address(contract_address)
		.event(MyToken::Transfer::SIGNATURE)
		.from_block(BlockNumberOrTag::Latest);

	let sub = provider
		.subscribe_logs(&filter)
		.await
		.map_err(CliError::connect)?;
	let mut stream = sub.into_stream();
	println!("Subscribed to Transfer events");

	// Two waking conditions: a new log arrives, or the user interrupts.
	// A closed stream means the transport dropped, which is fatal.
	loop {
		tokio::select! {
			_ = tokio::signal::ctrl_c() => {
				println!("Interrupted, closing subscription");
				return Ok(());
			}
			maybe_log = stream.next() => {
				let log = maybe_log.ok_or_else(|| {
					CliError::connect(anyhow!("event subscription closed by transport"))
				})?;

				match log.log_decode::<MyToken::Transfer>() {
					Ok(decoded) => {
						let event = decoded.data();
						println!(
							"Transfer event received: from={} to={} value={}",
							event.from, event.to, event.value
						);
					}
					Err(err) => eprintln!("skipping undecodable log: {err}"),
				}
			}
		}
	}
}
