//! Header Component
//!
//! App title, dark-mode toggle and the wallet connect button. The button
//! doubles as the session indicator: once connected it shows the
//! truncated account.

use leptos::prelude::*;

use crate::state::{use_notice_context, use_wallet_context};

#[component]
pub fn Header(dark_mode: ReadSignal<bool>, set_dark_mode: WriteSignal<bool>) -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notice_context();

    let connect_label = move || {
        if let Some(account) = wallet.display_account() {
            account
        } else if wallet.connecting.get() {
            "Connecting...".to_string()
        } else {
            "Connect Wallet".to_string()
        }
    };

    view! {
        <header style="padding: 1rem 2rem; border-bottom: 1px solid #333; display: flex; justify-content: space-between; align-items: center;">
            <h1>"DeFiSwap"</h1>
            <div style="display: flex; gap: 0.75rem; align-items: center;">
                <button
                    class="btn"
                    on:click=move |_| wallet.connect(notices)
                    disabled=move || wallet.connecting.get()
                >
                    {connect_label}
                </button>
                <button on:click=move |_| set_dark_mode.set(!dark_mode.get_untracked())>
                    {move || if dark_mode.get() { "☀️" } else { "🌙" }}
                </button>
            </div>
        </header>
    }
}
