use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy::network::TransactionBuilder;
use alloy::primitives::Bytes;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use anyhow::{anyhow, Context};

use crate::cli::Cli;
use crate::commands::{load_config, require_private_key, resolve_rpc};
use crate::contracts::GAS_LIMIT;
use crate::encode;
use crate::error::CliError;

pub async fn run(cli: &Cli, bytecode: &Path, supply: u64) -> Result<(), CliError> {
	let config = load_config()?;
	let rpc_url = resolve_rpc(cli, &config);

	let signer = require_private_key()?;
	let from = signer.address();

	let code = creation_code(bytecode, supply)?;

	let provider = ProviderBuilder::new()
		.wallet(signer)
		.connect(&rpc_url)
		.await
		.map_err(CliError::connect)?;
	println!("Connected to {rpc_url}");
	println!("Deploying contract from address {from}");

	let nonce = provider
		.get_transaction_count(from)
		.pending()
		.await
		.map_err(CliError::chain)?;

	let gas_price = provider.get_gas_price().await.map_err(CliError::chain)?;
	println!("Suggested gas price: {gas_price}");

	let chain_id = provider.get_chain_id().await.map_err(CliError::chain)?;
	println!("Chain ID: {chain_id}");

	let tx = deployment_request(code, nonce, gas_price, chain_id);

	let pending = provider
		.send_transaction(tx)
		.await
		.map_err(CliError::chain)?;
	println!("Transaction hash: {}", pending.tx_hash());

	let receipt = pending.get_receipt().await.map_err(CliError::chain)?;
	let address = receipt
		.contract_address
		.ok_or_else(|| CliError::chain(anyhow!("receipt carries no contract address")))?;
	println!("Contract deployed! Contract address: {address}");

	Ok(())
}

/// Read the creation bytecode artifact and append the ABI-encoded
/// constructor arguments (a single uint256 initial supply).
fn creation_code(path: &Path, supply: u64) -> Result<Bytes, CliError> {
	let raw = std::fs::read_to_string(path)
		.with_context(|| format!("cannot read bytecode artifact {}", path.display()))
		.map_err(CliError::config)?;

	let trimmed = raw.trim();
	let clean = trimmed.strip_prefix("0x").unwrap_or(trimmed);
	let mut code = hex::decode(clean)
		.context("bytecode artifact is not valid hex")
		.map_err(CliError::decode)?;

	let args = encode::encode_constructor_args(vec![DynSolValue::Uint(
		encode::tokens(supply),
		256,
	)]);
	code.extend_from_slice(&args);

	Ok(code.into())
}

/// Build the contract-creation request with explicit fee-market fields.
fn deployment_request(
	code: Bytes,
	nonce: u64,
	gas_price: u128,
	chain_id: u64,
) -> TransactionRequest {
	TransactionRequest::default()
		.with_deploy_code(code)
		.with_nonce(nonce)
		.with_gas_price(gas_price)
		.with_gas_limit(GAS_LIMIT)
		.with_chain_id(chain_id)
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::TxKind;

	#[test]
	fn request_carries_fetched_chain_parameters() {
		let tx = deployment_request(
			Bytes::from(vec![0x60, 0x80]),
			5,
			20_000_000_000, // 20 gwei
			1337,
		);

		assert_eq!(tx.nonce, Some(5));
		assert_eq!(tx.gas_price, Some(20_000_000_000));
		assert_eq!(tx.chain_id, Some(1337));
		assert_eq!(tx.gas, Some(3_000_000));
		assert_eq!(tx.to, Some(TxKind::Create));
	}

	#[test]
	fn creation_code_appends_constructor_args() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("MyToken.bin");
		std::fs::write(&path, "0x6080").unwrap();

		let code = creation_code(&path, 1_000_000).unwrap();
		// 2 bytecode bytes + one 32-byte encoded uint256.
		assert_eq!(code.len(), 34);
		assert_eq!(&code[..2], &[0x60, 0x80]);
		assert_eq!(
			hex::encode(&code[2..]),
			"00000000000000000000000000000000000000000000d3c21bcecceda1000000"
		);
	}

	#[test]
	fn creation_code_rejects_non_hex() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("MyToken.bin");
		std::fs::write(&path, "not hex").unwrap();

		assert!(creation_code(&path, 1).is_err());
	}
}
