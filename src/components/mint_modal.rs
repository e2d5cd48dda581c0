//! Mint Modal Component - the "birth" form
//!
//! Collects a name, submits an `adopt` transaction, and opportunistically
//! opens a block explorer tab for the submitted hash. Confirmation is not
//! tracked; the new pony shows up on the next page load.

use leptos::prelude::*;

use crate::chain::PonyContract;
use crate::services::ethereum;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::MAX_PONY_NAME_LEN;
use crate::utils::format::explorer_tx_url;

/// Check a pony name before any network call. Returns the trimmed name.
pub fn validate_pony_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Your pony needs a name!".to_string());
    }
    if trimmed.len() > MAX_PONY_NAME_LEN {
        return Err(format!("Pony names are at most {} characters", MAX_PONY_NAME_LEN));
    }
    Ok(trimmed.to_string())
}

#[component]
pub fn MintModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let adopt_pony = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let pony_name = match validate_pony_name(&name.get()) {
            Ok(valid) => valid,
            Err(err) => {
                set_error.set(Some(err));
                return;
            }
        };

        set_submitting.set(true);
        set_error.set(None);

        let address = wallet_ctx.address().unwrap_or_default();
        leptos::task::spawn_local(async move {
            let contract = match PonyContract::new(&address) {
                Ok(contract) => contract,
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_submitting.set(false);
                    return;
                }
            };

            match contract.adopt(&pony_name).await {
                Ok(tx_hash) => {
                    log::info!("Adoption submitted: {}", tx_hash);
                    ethereum::open_in_new_tab(&explorer_tx_url(&tx_hash));
                    set_name.set(String::new());
                    set_submitting.set(false);
                    on_close.run(());
                }
                Err(err) => {
                    log::warn!("Adoption failed: {}", err);
                    set_error.set(Some(err.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-card" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal-title">"Birth a new pony"</h2>
                <p class="modal-copy">
                    "Ready to bring home (to your wallet) a smol fren?"
                    <br/>
                    "Just enter an amazing name for your new pony below, "
                    "and we'll send it straight to your wallet."
                </p>

                {move || error.get().map(|err| view! {
                    <div class="error">
                        <p>{err}</p>
                    </div>
                })}

                <form on:submit=adopt_pony class="mint-form">
                    <input
                        class="mint-input"
                        type="text"
                        placeholder="Your awesome new pony"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required
                    />
                    <button
                        type="submit"
                        class="btn mint-submit"
                        prop:disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Birthing..." } else { "Birth" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected_before_any_call() {
        assert!(validate_pony_name("").is_err());
        assert!(validate_pony_name("   ").is_err());
        assert!(validate_pony_name("\t\n").is_err());
    }

    #[test]
    fn test_valid_name_is_trimmed() {
        assert_eq!(validate_pony_name("  Starlight "), Ok("Starlight".to_string()));
        assert_eq!(validate_pony_name("gm"), Ok("gm".to_string()));
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let long = "p".repeat(MAX_PONY_NAME_LEN + 1);
        assert!(validate_pony_name(&long).is_err());
        let max = "p".repeat(MAX_PONY_NAME_LEN);
        assert_eq!(validate_pony_name(&max), Ok(max));
    }
}
