//! Wallet state management

use leptos::prelude::*;

use crate::services::ethereum::WalletState;

/// Global wallet context. There is no user-facing disconnect; the session
/// ends with the page (reload returns to the intro).
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet
            .with(|state| state.address().map(|address| address.to_string()))
    }

    pub fn set_connected(&self, address: String) {
        self.wallet.set(WalletState::Connected { address });
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
