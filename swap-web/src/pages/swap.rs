//! Swap page - the token swap card
//!
//! Two amount fields bound to the core controller, a submit button gated
//! by the derived `can_submit` predicate, and the latest notice rendered
//! under the form.

use leptos::prelude::*;

use swap_core::NoticeLevel;

use crate::state::{use_notice_context, use_swap_context, use_wallet_context};

#[component]
pub fn SwapPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let swap = use_swap_context();
    let notices = use_notice_context();

    let on_amount_in = move |ev| {
        swap.set_amount_in(event_target_value(&ev));
    };
    let on_amount_out = move |ev| {
        swap.set_amount_out(event_target_value(&ev));
    };
    let on_submit = move |_| {
        swap.submit(wallet.session(), notices);
    };

    let notice_view = move || {
        notices.current.get().map(|notice| {
            let color = match notice.level {
                NoticeLevel::Success => "#4caf50",
                NoticeLevel::Error => "#f44336",
                NoticeLevel::Info => "#cccccc",
            };
            view! {
                <p style=format!("margin-top: 1rem; color: {};", color)>
                    {notice.message}
                </p>
            }
        })
    };

    view! {
        <div class="card">
            <h2>"Swap Tokens"</h2>
            <div style="margin-bottom: 1rem;">
                <label>{move || format!("From: {}", swap.token_in())}</label>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="0.0"
                    prop:value=move || swap.amount_in()
                    on:input=on_amount_in
                    style="width: 100%; padding: 0.5rem; margin-top: 0.5rem;"
                />
            </div>
            <div>
                <label>{move || format!("To: {}", swap.token_out())}</label>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="0.0"
                    prop:value=move || swap.amount_out()
                    on:input=on_amount_out
                    style="width: 100%; padding: 0.5rem; margin-top: 0.5rem;"
                />
            </div>
            <button
                class="btn btn-primary"
                style="margin-top: 1rem;"
                disabled=move || !swap.can_submit()
                on:click=on_submit
            >
                {move || if swap.is_submitting() { "Swapping..." } else { "Swap" }}
            </button>
            {notice_view}
        </div>
    }
}
