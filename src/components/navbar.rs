//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::wallet::use_wallet_context;
use crate::utils::format::truncate_address;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="pony-pink">"Crypto"</span>
                        <span class="pony-white">"Ponies"</span>
                    </span>
                </A>
                {move || wallet_ctx.address().map(|address| view! {
                    <span class="nav-account">{truncate_address(&address)}</span>
                })}
            </div>
        </nav>
    }
}
