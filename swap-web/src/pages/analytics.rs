//! Analytics page - static placeholder

use leptos::prelude::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="card">"Analytics Dashboard"</div>
    }
}
