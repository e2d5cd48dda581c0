//! Crypto Ponies App Shell
//!
//! Router plus the global wallet context. The home route carries the
//! connect-or-view conditional; everything else falls through to NotFound.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::Navbar;
use crate::pages::HomePage;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();

    // Hide loading screen once the app is mounted (backup in case main() didn't catch it)
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(100).await;
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
                    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
                        html_element.class_list().add_1("hidden").ok();
                    }
                    loading_element
                        .set_attribute("style", "display: none !important;")
                        .ok();
                }
            }
        });
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="centered-page">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="card-text">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Back to the Stable"
                    </span>
                </A>
            </div>
        </div>
    }
}
