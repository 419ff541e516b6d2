//! Menu Card Component

use leptos::prelude::*;

use crate::models::MenuItem;

/// Read-only card for one menu item. The cart button is a stub until
/// the cart page gets real behavior.
#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    view! {
        <div class="menu-card">
            <img class="menu-card-img" src=item.image.clone() alt=item.name.clone()/>
            <div class="menu-card-body">
                <h3>{item.name.clone()}</h3>
                <p>{item.description.clone()}</p>
                <div class="menu-card-footer">
                    <span class="menu-card-price">{format!("${:.2}", item.price)}</span>
                    <button>"Add to cart"</button>
                </div>
            </div>
        </div>
    }
}
