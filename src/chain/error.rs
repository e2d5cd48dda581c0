//! Error types for wallet and contract access

use thiserror::Error;

use crate::chain::abi::AbiError;

#[derive(Debug, Error)]
pub enum ChainError {
    /// No injected wallet provider on this page
    #[error("no wallet available - install a browser wallet extension")]
    NoProvider,

    /// The wallet responded with an empty account list
    #[error("wallet returned no accounts")]
    NoAccounts,

    /// The user dismissed the wallet prompt
    #[error("request rejected in the wallet")]
    UserRejected,

    /// Error surfaced by the provider RPC
    #[error("wallet RPC error: {0}")]
    Rpc(String),

    /// The RPC result had an unexpected shape
    #[error("unexpected RPC result: {0}")]
    UnexpectedResult(String),

    /// Hex parsing error
    #[error(transparent)]
    FromHex(#[from] alloy_primitives::hex::FromHexError),

    /// ABI encoding or decoding error
    #[error(transparent)]
    Abi(#[from] AbiError),
}
