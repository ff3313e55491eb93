//! Application constants

/// Default token pair shown in the swap form.
pub const DEFAULT_TOKEN_IN: &str = "ETH";
pub const DEFAULT_TOKEN_OUT: &str = "DAI";

/// Decimals used when converting a typed amount into base units.
pub const TOKEN_DECIMALS: u32 = 18;

/// Fixed swap counterparty every transaction is addressed to.
pub const SWAP_ROUTER_ADDRESS: &str = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D";

/// Gas-limit hint attached to every swap transaction.
pub const SWAP_GAS_LIMIT: u64 = 250_000;
