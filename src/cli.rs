use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
	name = "evm-contract",
	about = "Deploy, drive, watch, and verify an example EVM token contract.",
	version
)]
pub struct Cli {
	/// Override the JSON-RPC endpoint URL (falls back to $RPC_ENDPOINT,
	/// then the config file).
	#[arg(long, global = true)]
	pub rpc_url: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
	/// Deploy the token contract and print its address.
	Deploy {
		/// Path to the creation bytecode artifact (hex, with or without
		/// a 0x prefix).
		#[arg(long, default_value = "build/MyToken.bin")]
		bytecode: PathBuf,

		/// Initial token supply in whole tokens (scaled by 10^18).
		#[arg(long, default_value = "1000000")]
		supply: u64,
	},

	/// Send a transfer transaction and inspect its receipt.
	Interact {
		/// Deployed contract address.
		#[arg(long, default_value = "0x5FbDB2315678afecb367f032d93F642f64180aa3")]
		contract: String,

		/// Recipient address.
		#[arg(long, default_value = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8")]
		to: String,

		/// Amount of token base units to transfer.
		#[arg(long, default_value = "1000000")]
		amount: u64,
	},

	/// Stream Transfer events from a websocket subscription.
	Subscribe {
		/// Deployed contract address.
		#[arg(long, default_value = "0x5FbDB2315678afecb367f032d93F642f64180aa3")]
		contract: String,
	},

	/// Convert compiler metadata into a verification standard JSON input.
	Input {
		/// Contract name, used to locate build/<name>_meta.json and to
		/// name verify/<name>_input.json.
		#[arg(long, default_value = "MyToken")]
		contract_name: String,

		/// Override the metadata file path.
		#[arg(long)]
		metadata: Option<PathBuf>,
	},

	/// Submit the standard JSON input to the block explorer for
	/// source verification.
	Verify {
		/// Contract name, used to locate verify/<name>_input.json.
		#[arg(long, default_value = "MyToken")]
		contract_name: String,

		/// Address of the deployed contract to verify.
		#[arg(long, default_value = "0x7Fc3c9ae336291EC87296bb10D4B03f7d23357e4")]
		contract: String,

		/// Initial supply passed to the constructor at deploy time, in
		/// whole tokens (scaled by 10^18).
		#[arg(long, default_value = "1000000")]
		supply: u64,

		/// Exact compiler version the contract was built with.
		#[arg(long, default_value = crate::contracts::COMPILER_VERSION)]
		compiler_version: String,
	},
}
