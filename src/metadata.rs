use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The subset of a Solidity compiler metadata document that verification
/// needs.  Unknown top-level keys (compiler, output, version, ...) are
/// ignored; missing or mis-shaped `sources`/`settings` fail the parse.
#[derive(Debug, Clone, Deserialize)]
pub struct CompilerMetadata {
	pub language: Value,
	pub sources: BTreeMap<String, SourceRecord>,
	pub settings: serde_json::Map<String, Value>,
}

/// One source file entry, copied field-for-field into the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
	pub keccak256: String,
	pub content: String,
}

/// The standard JSON input document block explorers accept for
/// verification: the metadata's sources and settings, minus the
/// `compilationTarget` settings key which the API rejects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardJsonInput {
	pub language: Value,
	pub sources: BTreeMap<String, SourceRecord>,
	pub settings: serde_json::Map<String, Value>,
}

/// Default location of the compiler metadata artifact for a contract.
pub fn metadata_path(contract_name: &str) -> PathBuf {
	PathBuf::from("build").join(format!("{contract_name}_meta.json"))
}

/// Default location of the generated standard JSON input for a contract.
pub fn input_path(contract_name: &str) -> PathBuf {
	PathBuf::from("verify").join(format!("{contract_name}_input.json"))
}

/// Parse a raw metadata document, reporting shape violations up front.
pub fn parse(raw: &str) -> Result<CompilerMetadata> {
	serde_json::from_str(raw).context("malformed compiler metadata")
}

/// Build the standard JSON input from parsed metadata.  Sources and
/// language are copied verbatim; only `compilationTarget` is dropped
/// from settings.
pub fn to_standard_json_input(meta: CompilerMetadata) -> StandardJsonInput {
	let mut settings = meta.settings;
	settings.remove("compilationTarget");

	StandardJsonInput {
		language: meta.language,
		sources: meta.sources,
		settings,
	}
}

/// Serialize the document pretty-printed to `path`, creating parent
/// directories as needed.
pub fn write_pretty(input: &StandardJsonInput, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("cannot create {}", parent.display()))?;
	}
	let serialized = serde_json::to_string_pretty(input)?;
	std::fs::write(path, serialized)
		.with_context(|| format!("cannot write {}", path.display()))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"{
		"compiler": { "version": "0.8.22+commit.4fc1097e" },
		"language": "Solidity",
		"sources": {
			"A.sol": { "keccak256": "0xaa", "content": "contract A{}" }
		},
		"settings": {
			"compilationTarget": { "A.sol": "A" },
			"optimizer": { "enabled": true }
		},
		"version": 1
	}"#;

	#[test]
	fn transform_strips_only_compilation_target() {
		let meta = parse(SAMPLE).unwrap();
		let input = to_standard_json_input(meta);

		assert_eq!(input.language, Value::String("Solidity".into()));
		assert!(input.settings.get("compilationTarget").is_none());
		assert_eq!(
			input.settings.get("optimizer").unwrap(),
			&serde_json::json!({ "enabled": true })
		);
		assert_eq!(input.settings.len(), 1);

		let record = input.sources.get("A.sol").unwrap();
		assert_eq!(
			record,
			&SourceRecord {
				keccak256: "0xaa".into(),
				content: "contract A{}".into(),
			}
		);
		assert_eq!(input.sources.len(), 1);
	}

	#[test]
	fn transform_is_deterministic() {
		let first = to_standard_json_input(parse(SAMPLE).unwrap());
		let second = to_standard_json_input(parse(SAMPLE).unwrap());

		let a = serde_json::to_string_pretty(&first).unwrap();
		let b = serde_json::to_string_pretty(&second).unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn missing_sources_fails_fast() {
		let raw = r#"{ "language": "Solidity", "settings": {} }"#;
		let err = parse(raw).unwrap_err();
		assert!(err.to_string().contains("malformed compiler metadata"));
	}

	#[test]
	fn mis_shaped_source_record_fails() {
		let raw = r#"{
			"language": "Solidity",
			"sources": { "A.sol": { "keccak256": 42, "content": "c" } },
			"settings": {}
		}"#;
		assert!(parse(raw).is_err());
	}

	#[test]
	fn write_creates_parent_directories() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("verify").join("MyToken_input.json");

		let input = to_standard_json_input(parse(SAMPLE).unwrap());
		write_pretty(&input, &path).unwrap();

		let written = std::fs::read_to_string(&path).unwrap();
		let reparsed: StandardJsonInput = serde_json::from_str(&written).unwrap();
		assert!(reparsed.sources.contains_key("A.sol"));
	}

	#[test]
	fn default_paths() {
		assert_eq!(
			metadata_path("MyToken"),
			PathBuf::from("build/MyToken_meta.json")
		);
		assert_eq!(
			input_path("MyToken"),
			PathBuf::from("verify/MyToken_input.json")
		);
	}
}
