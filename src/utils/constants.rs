//! Application constants

/// Deployed pony contract (Polygon mainnet)
pub const CONTRACT_ADDRESS: &str = "0x20f229B5c27e8e164ffe54a6f9b03c56f5F4828B";

/// Block explorer base for submitted transactions
pub const EXPLORER_TX_BASE: &str = "https://polygonscan.com/tx/";

// UI constants
pub const MAX_PONY_NAME_LEN: usize = 32;
