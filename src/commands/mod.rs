pub mod deploy;
pub mod input;
pub mod interact;
pub mod subscribe;
pub mod verify;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use anyhow::{anyhow, Context};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CliError;

/// Resolve the RPC URL: CLI flag, then $RPC_ENDPOINT, then config.
pub fn resolve_rpc(cli: &Cli, config: &Config) -> String {
	cli.rpc_url
		.clone()
		.or_else(|| std::env::var("RPC_ENDPOINT").ok())
		.unwrap_or_else(|| config.network.rpc.clone())
}

/// Resolve the websocket RPC URL for subscriptions.  $RPC_ENDPOINT and
/// the --rpc-url flag are honored only when they carry a ws scheme.
pub fn resolve_ws_rpc(cli: &Cli, config: &Config) -> String {
	cli.rpc_url
		.clone()
		.or_else(|| std::env::var("RPC_ENDPOINT").ok())
		.filter(|url| url.starts_with("ws://") || url.starts_with("wss://"))
		.unwrap_or_else(|| config.network.ws_rpc.clone())
}

/// Parse $PRIVATE_KEY into a signer.  Accepts the key with or without a
/// 0x prefix.
pub fn require_private_key() -> Result<PrivateKeySigner, CliError> {
	let raw = std::env::var("PRIVATE_KEY")
		.map_err(|_| CliError::config(anyhow!("PRIVATE_KEY is not set")))?;
	let clean = raw.strip_prefix("0x").unwrap_or(&raw);
	clean
		.parse()
		.context("PRIVATE_KEY is not a valid secp256k1 key")
		.map_err(CliError::config)
}

/// Resolve the block-explorer API key: $ETHERSCAN_API_KEY, then config.
pub fn resolve_api_key(config: &Config) -> Result<String, CliError> {
	std::env::var("ETHERSCAN_API_KEY")
		.ok()
		.or_else(|| config.etherscan.api_key.clone())
		.ok_or_else(|| {
			CliError::config(anyhow!(
				"ETHERSCAN_API_KEY is not set and no api_key is configured"
			))
		})
}

/// Parse a 0x-prefixed hex address from the command line.
pub fn parse_address(raw: &str) -> Result<Address, CliError> {
	raw.parse()
		.with_context(|| format!("invalid address {raw:?}"))
		.map_err(CliError::config)
}

/// Load the config file, classifying failures as configuration errors.
pub fn load_config() -> Result<Config, CliError> {
	Config::load().map_err(CliError::config)
}
