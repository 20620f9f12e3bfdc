use std::time::Duration;

use anyhow::{Context, Result};

/// How long a verification submission may take before the request is
/// abandoned.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// One contract-verification submission, flattened into the form fields
/// the block-explorer API expects.
#[derive(Debug, Clone)]
pub struct VerificationRequest {
	pub api_key: String,
	pub contract_address: String,
	/// Fully qualified `path.sol:Name`.
	pub contract_name: String,
	pub compiler_version: String,
	pub optimization_used: bool,
	/// Serialized standard JSON input.
	pub source_code: String,
	/// ABI-encoded constructor arguments, lowercase hex, no 0x prefix.
	pub constructor_args: String,
}

impl VerificationRequest {
	/// The URL-encoded form body.  Field names (including the API's
	/// misspelled `constructorArguements`) are fixed by the explorer.
	pub fn form(&self) -> Vec<(&'static str, String)> {
		vec![
			("apiKey", self.api_key.clone()),
			("module", "contract".into()),
			("action", "verifysourcecode".into()),
			("sourceCode", self.source_code.clone()),
			("contractaddress", self.contract_address.clone()),
			("codeformat", "solidity-standard-json-input".into()),
			("contractname", self.contract_name.clone()),
			("compilerversion", self.compiler_version.clone()),
			(
				"optimizationUsed",
				if self.optimization_used { "1" } else { "0" }.into(),
			),
			("constructorArguements", self.constructor_args.clone()),
		]
	}
}

/// Client for the block-explorer verification API.  The HTTP client is
/// injected so tests can point it at a local server.
pub struct EtherscanClient {
	http: reqwest::Client,
	api_url: String,
}

impl EtherscanClient {
	pub fn new(api_url: &str) -> Result<Self> {
		let http = reqwest::Client::builder()
			.timeout(SUBMIT_TIMEOUT)
			.build()
			.context("cannot build HTTP client")?;
		Ok(Self::with_http(http, api_url))
	}

	pub fn with_http(http: reqwest::Client, api_url: &str) -> Self {
		Self {
			http,
			api_url: api_url.to_owned(),
		}
	}

	/// POST the verification form.  Returns the HTTP status together
	/// with the raw response body so the caller can print the body even
	/// when the status is non-2xx.
	pub async fn submit(
		&self,
		request: &VerificationRequest,
	) -> Result<(reqwest::StatusCode, String)> {
		let response = self
			.http
			.post(&self.api_url)
			.form(&request.form())
			.send()
			.await
			.with_context(|| format!("POST {} failed", self.api_url))?;

		let status = response.status();
		let body = response
			.text()
			.await
			.context("cannot read verification response body")?;

		Ok((status, body))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> VerificationRequest {
		VerificationRequest {
			api_key: "KEY".into(),
			contract_address: "0x7Fc3c9ae336291EC87296bb10D4B03f7d23357e4".into(),
			contract_name: "contracts/MyToken.sol:MyToken".into(),
			compiler_version: "v0.8.22+commit.4fc1097e".into(),
			optimization_used: true,
			source_code: "{\"language\":\"Solidity\"}".into(),
			constructor_args: "00ff".into(),
		}
	}

	#[test]
	fn form_carries_every_field() {
		let form = sample().form();
		let keys: Vec<&str> = form.iter().map(|(k, _)| *k).collect();
		assert_eq!(
			keys,
			vec![
				"apiKey",
				"module",
				"action",
				"sourceCode",
				"contractaddress",
				"codeformat",
				"contractname",
				"compilerversion",
				"optimizationUsed",
				"constructorArguements",
			]
		);
	}

	#[test]
	fn form_constants() {
		let form = sample().form();
		let get = |key: &str| {
			form.iter()
				.find(|(k, _)| *k == key)
				.map(|(_, v)| v.clone())
				.unwrap()
		};
		assert_eq!(get("module"), "contract");
		assert_eq!(get("action"), "verifysourcecode");
		assert_eq!(get("codeformat"), "solidity-standard-json-input");
		assert_eq!(get("optimizationUsed"), "1");
		assert!(!get("constructorArguements").starts_with("0x"));
	}

	#[test]
	fn optimization_flag_renders_zero() {
		let mut request = sample();
		request.optimization_used = false;
		let form = request.form();
		let flag = form
			.iter()
			.find(|(k, _)| *k == "optimizationUsed")
			.map(|(_, v)| v.as_str())
			.unwrap();
		assert_eq!(flag, "0");
	}
}
