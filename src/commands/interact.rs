use alloy::primitives::U256;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::Log;
use anyhow::anyhow;

use crate::cli::Cli;
use crate::commands::{load_config, parse_address, require_private_key, resolve_rpc};
use crate::contracts::{MyToken, GAS_LIMIT};
use crate::error::CliError;

/// What the receipt tells us to do next.
#[derive(Debug, PartialEq)]
pub enum ReceiptOutcome {
	/// The EVM reverted the transaction; replay it read-only for the
	/// revert reason.
	Reverted,
	/// The transaction succeeded; carries the first log that decoded as
	/// a Transfer event, if any.
	Succeeded(Option<MyToken::Transfer>),
}

/// Branch on receipt status.  On success, keep the first log entry that
/// decodes as a Transfer; entries that fail to decode are skipped.
pub fn evaluate_receipt(status: bool, logs: &[Log]) -> ReceiptOutcome {
	if !status {
		return ReceiptOutcome::Reverted;
	}

	let transfer = logs
		.iter()
		.find_map(|log| log.log_decode::<MyToken::Transfer>().ok())
		.map(|decoded| decoded.inner.data);

	ReceiptOutcome::Succeeded(transfer)
}

pub async fn run(cli: &Cli, contract: &str, to: &str, amount: u64) -> Result<(), CliError> {
	let config = load_config()?;
	let rpc_url = resolve_rpc(cli, &config);

	let contract_address = parse_address(contract)?;
	let to_address = parse_address(to)?;
	let amount = U256::from(amount);

	let signer = require_private_key()?;
	let from = signer.address();

	let provider = ProviderBuilder::new()
		.wallet(signer)
		.connect(&rpc_url)
		.await
		.map_err(CliError::connect)?;
	println!("Connected to {rpc_url}");

	let token = MyToken::new(contract_address, &provider);

	let nonce = provider
		.get_transaction_count(from)
		.pending()
		.await
		.map_err(CliError::chain)?;

	let gas_price = provider.get_gas_price().await.map_err(CliError::chain)?;
	println!("Suggested gas price: {gas_price}");

	let chain_id = provider.get_chain_id().await.map_err(CliError::chain)?;
	println!("Chain ID: {chain_id}");

	let pending = token
		.transfer(to_address, amount)
		.nonce(nonce)
		.gas_price(gas_price)
		.gas(GAS_LIMIT)
		.chain_id(chain_id)
		.send()
		.await
		.map_err(CliError::chain)?;
	println!("Transaction hash: {}", pending.tx_hash());

	let receipt = pending.get_receipt().await.map_err(CliError::chain)?;
	println!("Transaction receipt status: {}", receipt.status());

	match evaluate_receipt(receipt.status(), receipt.inner.logs()) {
		ReceiptOutcome::Reverted => {
			// Replay the call read-only to recover the revert reason.
			// This is diagnostic: its own failure is just printed.
			match token.transfer(to_address, amount).from(from).call().await {
				Err(reason) => println!("Transaction reverted: {reason}"),
				Ok(_) => println!("Transaction reverted (replay did not reproduce it)"),
			}
			Err(CliError::chain(anyhow!("transaction reverted")))
		}
		ReceiptOutcome::Succeeded(transfer) => {
			if let Some(event) = transfer {
				println!(
					"Transferred {} tokens from {} to {}",
					event.value, event.from, event.to
				);
			}

			let balance = token
				.balanceOf(to_address)
				.call()
				.await
				.map_err(CliError::chain)?;
			println!("To balance: {balance}");

			Ok(())
		}
	}
}
