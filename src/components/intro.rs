//! Intro Component - landing copy plus the connect-wallet action
//!
//! Shown while no wallet session exists. Connection is a single
//! user-triggered attempt; a rejection or missing provider is surfaced
//! inline and the user has to click again.

use leptos::prelude::*;

use crate::services::ethereum;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn Intro() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let (error, set_error) = signal(None::<String>);
    let (connecting, set_connecting) = signal(false);

    let connect_wallet = move |_| {
        set_connecting.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            match ethereum::connect_wallet().await {
                Ok(address) => {
                    log::info!("Found an authorized account: {}", address);
                    wallet_ctx.set_connected(address);
                }
                Err(err) => {
                    log::warn!("Failed to connect wallet: {}", err);
                    set_error.set(Some(err.to_string()));
                    set_connecting.set(false);
                }
            }
        });
    };

    view! {
        <div class="intro">
            <h1 class="intro-title">"Crypto Ponies, on the blockchain"</h1>
            <p class="intro-copy">
                "Adopt and breed your very own crypto ponies on the blockchain!"
                <br/>
                <br/>
                "You can collect them, breed them, and transfer them, getting $LOVE in return."
                <br/>
                <br/>
                "Some Crypto Ponies are rarer than others. Who will collect the most rare Crypto Ponies?!"
            </p>

            {move || error.get().map(|err| view! {
                <div class="error">
                    <p>{err}</p>
                </div>
            })}

            <button
                class="btn btn-connect"
                on:click=connect_wallet
                prop:disabled=move || connecting.get()
            >
                {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
            </button>
        </div>
    }
}
