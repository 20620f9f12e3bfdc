use alloy::sol;

// Interface of the example ERC-20 token the flows operate on.  The rpc
// attribute generates a typed contract binding over any provider.
sol! {
	#[sol(rpc, all_derives)]
	contract MyToken {
		event Transfer(address indexed from, address indexed to, uint256 value);

		constructor(uint256 initialSupply);

		function transfer(address to, uint256 amount) external returns (bool);
		function balanceOf(address account) external view returns (uint256);
	}
}

/// Fixed gas limit used for both deployment and transfer transactions.
pub const GAS_LIMIT: u64 = 3_000_000;

/// Compiler release the contract is built with, in the exact form the
/// block-explorer verification API expects.
pub const COMPILER_VERSION: &str = "v0.8.22+commit.4fc1097e";

/// Fully qualified name in the `path.sol:Name` form the verification API
/// expects.
pub fn qualified_name(contract_name: &str) -> String {
	format!("contracts/{contract_name}.sol:{contract_name}")
}
