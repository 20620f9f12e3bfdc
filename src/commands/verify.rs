use anyhow::{anyhow, Context};

use crate::commands::{load_config, resolve_api_key};
use crate::contracts;
use crate::encode;
use crate::error::CliError;
use crate::etherscan::{EtherscanClient, VerificationRequest};
use crate::metadata;

pub async fn run(
	contract_name: &str,
	contract: &str,
	supply: u64,
	compiler_version: &str,
) -> Result<(), CliError> {
	let config = load_config()?;
	let api_key = resolve_api_key(&config)?;

	let input_path = metadata::input_path(contract_name);
	let source_code = std::fs::read_to_string(&input_path)
		.with_context(|| {
			format!(
				"cannot read {} (run the input command first)",
				input_path.display()
			)
		})
		.map_err(CliError::config)?;

	let supply_units = encode::tokens(supply).to_string();
	let encoded = encode::encode_args(&[("uint256", supply_units.as_str())])
		.map_err(CliError::config)?;

	let request = VerificationRequest {
		api_key,
		contract_address: contract.to_owned(),
		contract_name: contracts::qualified_name(contract_name),
		compiler_version: compiler_version.to_owned(),
		optimization_used: true,
		source_code,
		constructor_args: encode::to_unprefixed_hex(&encoded),
	};

	let client = EtherscanClient::new(&config.etherscan.api_url).map_err(CliError::config)?;
	let (status, body) = client.submit(&request).await.map_err(CliError::connect)?;

	println!("{body}");

	if !status.is_success() {
		return Err(CliError::connect(anyhow!(
			"verification endpoint returned {status}"
		)));
	}

	Ok(())
}
