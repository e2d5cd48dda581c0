//! On-chain access layer
//!
//! Calldata encoding/decoding plus a typed client for the pony contract.
//! All state lives in the contract; this layer only reads and submits.

pub mod abi;
pub mod contract;
pub mod error;

pub use contract::{Pony, PonyContract, Wave};
pub use error::ChainError;
