use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::U256;
use anyhow::{anyhow, Context, Result};

/// ABI-encode a constructor argument list.  Values are encoded as the
/// parameter tuple (no function selector, no outer tuple offset), which
/// is the layout appended to creation bytecode and expected by the
/// verification API.
pub fn encode_constructor_args(values: Vec<DynSolValue>) -> Vec<u8> {
	DynSolValue::Tuple(values).abi_encode_params()
}

/// Parse and encode arguments given as (solidity type, value string)
/// pairs, e.g. `[("uint256", "1000000")]`.
pub fn encode_args(args: &[(&str, &str)]) -> Result<Vec<u8>> {
	let mut values = Vec::with_capacity(args.len());
	for (ty, raw) in args {
		let parsed: DynSolType = ty
			.parse()
			.map_err(|e| anyhow!("invalid solidity type {ty:?}: {e}"))?;
		let value = parsed
			.coerce_str(raw)
			.with_context(|| format!("cannot coerce {raw:?} as {ty}"))?;
		values.push(value);
	}
	Ok(encode_constructor_args(values))
}

/// Lowercase hex with no 0x prefix, the form the verification API's
/// `constructorArguements` field expects.
pub fn to_unprefixed_hex(encoded: &[u8]) -> String {
	hex::encode(encoded)
}

/// Scale a whole-token amount by 10^18 base units.
pub fn tokens(whole: u64) -> U256 {
	U256::from(whole) * U256::from(10u64).pow(U256::from(18))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_uint256_is_one_left_padded_word() {
		let supply = tokens(1_000_000);
		let encoded = encode_constructor_args(vec![DynSolValue::Uint(supply, 256)]);
		let rendered = to_unprefixed_hex(&encoded);

		assert_eq!(encoded.len(), 32);
		assert_eq!(rendered.len(), 64);
		assert!(!rendered.starts_with("0x"));
		// 1_000_000 * 10^18 = 0xd3c21bcecceda1000000, left-padded to 32 bytes.
		assert_eq!(
			rendered,
			"00000000000000000000000000000000000000000000d3c21bcecceda1000000"
		);
	}

	#[test]
	fn encode_args_matches_direct_encoding() {
		let via_strings = encode_args(&[("uint256", "1000000000000000000000000")]).unwrap();
		let direct = encode_constructor_args(vec![DynSolValue::Uint(tokens(1_000_000), 256)]);
		assert_eq!(via_strings, direct);
	}

	#[test]
	fn multiple_static_args_concatenate() {
		let encoded = encode_args(&[
			("uint256", "1"),
			("address", "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
		])
		.unwrap();
		// Two static parameters occupy one 32-byte word each.
		assert_eq!(encoded.len(), 64);
		assert_eq!(encoded[31], 1);
	}

	#[test]
	fn rejects_garbage_type_and_value() {
		assert!(encode_args(&[("uint257x", "1")]).is_err());
		assert!(encode_args(&[("uint256", "not-a-number")]).is_err());
	}
}
