//! Pony Viewer Component
//!
//! One-shot fetch of the caller's owned token IDs, then a serial per-token
//! trait fetch. A failed per-token fetch is logged and the token skipped;
//! there is no retry or pagination. Also pulls the contract's adoption feed.

use leptos::prelude::*;

use crate::chain::{Pony, PonyContract, Wave};
use crate::components::MintModal;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::{format_token_id, truncate_address};

/// One-shot latch for the owned-token fetch. The first `try_fire` returns
/// true; every later call returns false, so the fetch cannot be repeated
/// within a session even if the effect holding it reruns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchOnce {
    fired: bool,
}

impl FetchOnce {
    pub fn try_fire(&mut self) -> bool {
        if self.fired {
            false
        } else {
            self.fired = true;
            true
        }
    }
}

#[component]
pub fn PonyViewer() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let (ponies, set_ponies) = signal(Vec::<Pony>::new());
    let (waves, set_waves) = signal(Vec::<Wave>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (show_mint, set_show_mint) = signal(false);

    // One-shot fetch on entering the connected view, latched so it fires
    // exactly once per session
    let fetch_once = StoredValue::new(FetchOnce::default());
    let address = wallet_ctx.address().unwrap_or_default();
    Effect::new(move || {
        if !fetch_once.try_update_value(FetchOnce::try_fire).unwrap_or(false) {
            return;
        }
        let address = address.clone();
        leptos::task::spawn_local(async move {
            let contract = match PonyContract::new(&address) {
                Ok(contract) => contract,
                Err(err) => {
                    log::error!("Bad contract handle: {}", err);
                    set_error.set(Some(err.to_string()));
                    set_loading.set(false);
                    return;
                }
            };

            match contract.tokens_of_owner().await {
                Ok(ids) => {
                    let mut loaded = Vec::with_capacity(ids.len());
                    for id in ids {
                        match contract.get_pony(id).await {
                            Ok(pony) => loaded.push(pony),
                            // Skip the token; nothing re-fetches it this session
                            Err(err) => log::warn!("Failed to fetch pony {}: {}", id, err),
                        }
                    }
                    set_ponies.set(loaded);
                }
                Err(err) => {
                    log::warn!("Failed to list owned tokens: {}", err);
                    set_error.set(Some(format!("Failed to load your ponies: {}", err)));
                }
            }

            // Adoption feed is decorative; a failure only logs
            match contract.get_all_waves().await {
                Ok(feed) => set_waves.set(feed),
                Err(err) => log::warn!("Failed to fetch adoption feed: {}", err),
            }

            set_loading.set(false);
        });
    });

    view! {
        <div class="viewer">
            <h1 class="viewer-title">"Crypto Ponies"</h1>
            <h3 class="viewer-subtitle">"Your Ponies"</h3>

            {move || error.get().map(|err| view! {
                <div class="error">
                    <p>{err}</p>
                </div>
            })}

            {move || loading.get().then(|| view! {
                <p class="viewer-loading">"Rounding up your ponies..."</p>
            })}

            <div class="pony-grid">
                <For
                    each=move || ponies.get()
                    key=|pony| pony.id
                    children=move |pony| {
                        let color = pony.css_color();
                        view! {
                            <div class="pony-tile">
                                <div class="pony-swatch" style:background-color=color></div>
                                <span class="pony-name">{pony.name.clone()}</span>
                                <span class="pony-id">{format_token_id(pony.id)}</span>
                            </div>
                        }
                    }
                />
                <button class="pony-tile pony-tile-mint" on:click=move |_| set_show_mint.set(true)>
                    "Birth Starter Pony"
                </button>
            </div>

            {move || {
                let feed = waves.get();
                (!feed.is_empty()).then(|| view! {
                    <div class="feed">
                        <h3 class="feed-title">"Recent Adoptions"</h3>
                        <ul class="feed-list">
                            {feed.into_iter().rev().map(|wave| view! {
                                <li class="feed-entry">
                                    <span class="feed-adopter">{truncate_address(&wave.adopter)}</span>
                                    <span class="feed-message">{wave.message}</span>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                })
            }}

            {move || show_mint.get().then(|| view! {
                <MintModal on_close=move |_: ()| set_show_mint.set(false)/>
            })}
        </div>
    }
}
