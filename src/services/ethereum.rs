//! Injected Wallet Provider Integration via wasm-bindgen
//!
//! JavaScript interop for the `window.ethereum` provider object injected by
//! browser wallets (MetaMask and compatible extensions). All calls go through
//! the provider's `request({ method, params })` surface.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::chain::error::ChainError;

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function ethereumRequest(method, params) {
    if (!window.ethereum) {
        throw new Error('no injected wallet provider');
    }
    return await window.ethereum.request({ method: method, params: params });
}

export function openInNewTab(url) {
    window.open(url);
}
")]
extern "C" {
    /// Check whether a wallet extension injected a provider
    pub fn hasEthereumProvider() -> bool;

    /// Forward a JSON-RPC style request to the injected provider
    #[wasm_bindgen(catch)]
    pub async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;

    /// Open a URL in a new browser tab (block explorer links)
    pub fn openInNewTab(url: &str);
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet connection state. There are only two states: the page starts
/// `Disconnected` and a successful connection moves it to `Connected`.
/// The only way back is a page reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connected { address: String },
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct CallRequest<'a> {
    to: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct TransactionRequest<'a> {
    from: &'a str,
    to: &'a str,
    data: &'a str,
}

/// Whether an injected provider is present on this page
pub fn provider_available() -> bool {
    hasEthereumProvider()
}

/// Pick the active account out of a wallet account list
pub fn first_account(accounts: &[String]) -> Option<String> {
    accounts.first().cloned()
}

/// Prompt the wallet for account access and return the active address.
/// A rejection surfaces as [`ChainError::UserRejected`]; there is no retry.
pub async fn connect_wallet() -> Result<String, ChainError> {
    let accounts = request_accounts().await?;
    first_account(&accounts).ok_or(ChainError::NoAccounts)
}

/// Ask the wallet for account access (opens the wallet prompt)
pub async fn request_accounts() -> Result<Vec<String>, ChainError> {
    if !provider_available() {
        return Err(ChainError::NoProvider);
    }
    let result = request("eth_requestAccounts", js_sys::Array::new().into()).await?;
    accounts_from_js(result)
}

/// Silently check for an already-authorized session (no prompt)
pub async fn existing_accounts() -> Result<Vec<String>, ChainError> {
    if !provider_available() {
        return Err(ChainError::NoProvider);
    }
    let result = request("eth_accounts", js_sys::Array::new().into()).await?;
    accounts_from_js(result)
}

/// Execute a read-only contract call against the latest block
pub async fn eth_call(to: &str, data: &str) -> Result<String, ChainError> {
    let params = to_params(&(CallRequest { to, data }, "latest"))?;
    let result = request("eth_call", params).await?;
    result
        .as_string()
        .ok_or_else(|| ChainError::UnexpectedResult("eth_call result is not a string".to_string()))
}

/// Submit a state-changing transaction signed by `from`.
/// Returns the transaction hash without awaiting confirmation.
pub async fn send_transaction(from: &str, to: &str, data: &str) -> Result<String, ChainError> {
    let params = to_params(&(TransactionRequest { from, to, data },))?;
    let result = request("eth_sendTransaction", params).await?;
    result.as_string().ok_or_else(|| {
        ChainError::UnexpectedResult("transaction hash is not a string".to_string())
    })
}

/// Open a block explorer page for a submitted transaction
pub fn open_in_new_tab(url: &str) {
    openInNewTab(url);
}

async fn request(method: &str, params: JsValue) -> Result<JsValue, ChainError> {
    ethereumRequest(method, params).await.map_err(map_js_error)
}

fn to_params<T: Serialize>(value: &T) -> Result<JsValue, ChainError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|error| ChainError::UnexpectedResult(error.to_string()))
}

fn accounts_from_js(value: JsValue) -> Result<Vec<String>, ChainError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|error| ChainError::UnexpectedResult(error.to_string()))
}

fn map_js_error(error: JsValue) -> ChainError {
    // EIP-1193 providers report a user rejection as error code 4001
    if let Ok(code) = js_sys::Reflect::get(&error, &JsValue::from_str("code")) {
        if code.as_f64() == Some(4001.0) {
            return ChainError::UserRejected;
        }
    }
    ChainError::Rpc(js_error_message(&error))
}

fn js_error_message(error: &JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_state_accessors() {
        assert!(!WalletState::Disconnected.is_connected());
        assert_eq!(WalletState::Disconnected.address(), None);

        let connected = WalletState::Connected {
            address: "0x20f229B5c27e8e164ffe54a6f9b03c56f5F4828B".to_string(),
        };
        assert!(connected.is_connected());
        assert_eq!(
            connected.address(),
            Some("0x20f229B5c27e8e164ffe54a6f9b03c56f5F4828B")
        );
    }

    #[test]
    fn test_zero_accounts_yield_no_active_address() {
        // An empty account list must not produce a connected address
        assert_eq!(first_account(&[]), None);

        let accounts = vec!["0xabc".to_string(), "0xdef".to_string()];
        assert_eq!(first_account(&accounts), Some("0xabc".to_string()));
    }

    #[test]
    fn test_call_params_serialize_to_expected_shape() {
        let call = (
            CallRequest {
                to: "0x20f229B5c27e8e164ffe54a6f9b03c56f5F4828B",
                data: "0xbd43a908",
            },
            "latest",
        );
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "to": "0x20f229B5c27e8e164ffe54a6f9b03c56f5F4828B", "data": "0xbd43a908" },
                "latest"
            ])
        );
    }

    #[test]
    fn test_transaction_params_serialize_to_expected_shape() {
        let tx = (TransactionRequest {
            from: "0xaaa",
            to: "0xbbb",
            data: "0x566fc123",
        },);
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "from": "0xaaa", "to": "0xbbb", "data": "0x566fc123" }])
        );
    }
}
