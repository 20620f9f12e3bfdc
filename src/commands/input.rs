use std::path::PathBuf;

use anyhow::Context;

use crate::error::CliError;
use crate::metadata;

pub fn run(contract_name: &str, metadata_override: Option<&PathBuf>) -> Result<(), CliError> {
	let meta_path = metadata_override
		.cloned()
		.unwrap_or_else(|| metadata::metadata_path(contract_name));

	let raw = std::fs::read_to_string(&meta_path)
		.with_context(|| format!("cannot read compiler metadata {}", meta_path.display()))
		.map_err(CliError::config)?;

	let meta = metadata::parse(&raw).map_err(CliError::decode)?;
	let input = metadata::to_standard_json_input(meta);

	let out_path = metadata::input_path(contract_name);
	metadata::write_pretty(&input, &out_path).map_err(CliError::config)?;

	println!("Wrote standard JSON input to {}", out_path.display());
	Ok(())
}
