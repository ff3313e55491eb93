//! Liquidity page - static placeholder

use leptos::prelude::*;

#[component]
pub fn LiquidityPage() -> impl IntoView {
    view! {
        <div class="card">"Add Liquidity"</div>
    }
}
