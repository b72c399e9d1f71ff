//! Stat Card Component
//!
//! Single counter card for the header stats row.

use leptos::prelude::*;

/// One derived counter with a per-kind accent stripe
#[component]
pub fn StatCard(
    /// Uppercase label under the number
    #[prop(into)]
    label: String,
    /// Counter value, derived from the catalog
    #[prop(into)]
    value: Signal<usize>,
    /// Accent class: "stat-total", "stat-success" or "stat-groups"
    #[prop(into)]
    accent: String,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {accent}")>
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
