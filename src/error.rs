use thiserror::Error;

/// Top-level failure classification.  Every command maps its errors into
/// one of these categories so `main` can pick a distinct exit code and
/// print one descriptive line on stderr.
#[derive(Debug, Error)]
pub enum CliError {
	/// Missing or malformed environment variable, config file, key, or
	/// command-line input.
	#[error("configuration error: {0:#}")]
	Config(anyhow::Error),

	/// Failure to reach the RPC node or the block-explorer API.
	#[error("connection error: {0:#}")]
	Connect(anyhow::Error),

	/// The node accepted the connection but an RPC call, broadcast, or
	/// inclusion wait failed.
	#[error("chain interaction error: {0:#}")]
	Chain(anyhow::Error),

	/// Malformed compiler metadata or artifact contents.
	#[error("decode error: {0:#}")]
	Decode(anyhow::Error),
}

impl CliError {
	pub fn config(err: impl Into<anyhow::Error>) -> Self {
		Self::Config(err.into())
	}

	pub fn connect(err: impl Into<anyhow::Error>) -> Self {
		Self::Connect(err.into())
	}

	pub fn chain(err: impl Into<anyhow::Error>) -> Self {
		Self::Chain(err.into())
	}

	pub fn decode(err: impl Into<anyhow::Error>) -> Self {
		Self::Decode(err.into())
	}

	/// Process exit code for this category.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::Config(_) => 2,
			Self::Connect(_) => 3,
			Self::Chain(_) => 4,
			Self::Decode(_) => 5,
		}
	}
}
