use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub network: NetworkConfig,
	pub etherscan: EtherscanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub rpc: String,
	pub ws_rpc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtherscanConfig {
	pub api_url: String,
	pub api_key: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			network: NetworkConfig {
				rpc: "http://localhost:8545".into(),
				ws_rpc: "ws://localhost:8545".into(),
			},
			etherscan: EtherscanConfig {
				api_url: "https://api-testnet.polygonscan.com/api".into(),
				api_key: None,
			},
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.evm-contract/).
	pub fn dir() -> PathBuf {
		dirs::home_dir()
			.expect("could not determine home directory")
			.join(".evm-contract")
	}

	/// Path to the config file.
	pub fn path() -> PathBuf {
		Self::dir().join("config.toml")
	}

	/// Load config from disk, falling back to defaults if no file exists.
	pub fn load() -> anyhow::Result<Self> {
		let path = Self::path();
		if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			Ok(toml::from_str(&content)?)
		} else {
			Ok(Self::default())
		}
	}

	/// Persist the current config to disk, creating the directory if needed.
	#[allow(dead_code)]
	pub fn save(&self) -> anyhow::Result<()> {
		let path = Self::path();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, toml::to_string_pretty(self)?)?;
		Ok(())
	}
}
