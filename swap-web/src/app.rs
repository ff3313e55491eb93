//! DeFiSwap App Shell
//!
//! Dark-mode container, particle background, header, and the
//! Swap/Liquidity/Analytics tab bar. Tab switching is plain signal
//! state; only the swap tab has behavior.

use leptos::prelude::*;

use crate::components::{Header, ParticleField};
use crate::pages::{AnalyticsPage, LiquidityPage, SwapPage};
use crate::state::{provide_notice_context, provide_swap_context, provide_wallet_context};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Swap,
    Liquidity,
    Analytics,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Swap, Tab::Liquidity, Tab::Analytics];

    fn label(self) -> &'static str {
        match self {
            Tab::Swap => "Swap",
            Tab::Liquidity => "Liquidity",
            Tab::Analytics => "Analytics",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_notice_context();
    provide_wallet_context();
    provide_swap_context();

    let (dark_mode, set_dark_mode) = signal(true);
    let (active_tab, set_active_tab) = signal(Tab::Swap);

    let tab_buttons = move || {
        Tab::ALL
            .into_iter()
            .map(|tab| {
                let background = move || {
                    if active_tab.get() == tab {
                        "#6f4ef2"
                    } else {
                        "#222"
                    }
                };
                view! {
                    <button
                        on:click=move |_| set_active_tab.set(tab)
                        style=move || format!(
                            "margin-right: 0.5rem; background-color: {}; color: white; \
                             padding: 0.5rem 1rem; border-radius: 8px;",
                            background()
                        )
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class=move || if dark_mode.get() { "app-container dark-mode" } else { "app-container" }>
            <ParticleField/>
            <Header dark_mode=dark_mode set_dark_mode=set_dark_mode/>
            <main style="padding: 2rem;">
                <div style="margin-bottom: 1rem;">
                    {tab_buttons}
                </div>
                {move || match active_tab.get() {
                    Tab::Swap => view! { <SwapPage/> }.into_any(),
                    Tab::Liquidity => view! { <LiquidityPage/> }.into_any(),
                    Tab::Analytics => view! { <AnalyticsPage/> }.into_any(),
                }}
            </main>
        </div>
    }
}
