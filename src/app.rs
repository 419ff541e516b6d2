//! FoodExpress App
//!
//! Root component: navbar plus a static mapping from the selected
//! page to its view.

use leptos::prelude::*;

use crate::components::{AdminPage, CartPage, MenuPage, Navbar};

/// Pages reachable from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Cart,
    Admin,
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    view! {
        <Navbar page=page set_page=set_page/>
        <div class="container">
            {move || match page.get() {
                Page::Home => view! { <MenuPage/> }.into_any(),
                Page::Cart => view! { <CartPage/> }.into_any(),
                Page::Admin => view! { <AdminPage/> }.into_any(),
            }}
        </div>
    }
}
