//! Home Page - connect-or-view conditional
//!
//! Renders the intro (connect button) until a wallet session exists, then
//! switches to the pony viewer. There is no transition back short of a
//! page reload.

use leptos::prelude::*;

use crate::components::{Intro, PonyViewer};
use crate::services::ethereum;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    // Silent session check on mount: reuse an already-authorized account
    // without opening the wallet prompt.
    leptos::task::spawn_local(async move {
        if !ethereum::provider_available() {
            log::info!("No injected wallet provider on this page");
            return;
        }
        match ethereum::existing_accounts().await {
            Ok(accounts) => {
                if let Some(address) = ethereum::first_account(&accounts) {
                    log::info!("Found an authorized account: {}", address);
                    wallet_ctx.set_connected(address);
                } else {
                    log::info!("No authorized account found");
                }
            }
            Err(error) => log::warn!("Session check failed: {}", error),
        }
    });

    view! {
        {move || if wallet_ctx.is_connected() {
            view! { <PonyViewer/> }.into_any()
        } else {
            view! { <Intro/> }.into_any()
        }}
    }
}
