//! Cart Page Component
//!
//! Placeholder until ordering is wired up.

use leptos::prelude::*;

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <div class="cart-page">
            <h2>"Your Cart"</h2>
            <p>"Your cart is empty."</p>
        </div>
    }
}
