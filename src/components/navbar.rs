//! Navbar Component
//!
//! Top navigation bar with the brand and page links.

use leptos::prelude::*;

use crate::app::Page;

const LINKS: &[(Page, &str)] = &[
    (Page::Home, "Home"),
    (Page::Cart, "Cart"),
    (Page::Admin, "Admin"),
];

#[component]
pub fn Navbar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    set_page.set(Page::Home);
                }>"FoodExpress"</a>
            </div>
            <ul class="navbar-links">
                {LINKS.iter().map(|(target, label)| {
                    let target = *target;
                    let is_active = move || page.get() == target;
                    view! {
                        <li>
                            <button
                                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                on:click=move |_| set_page.set(target)
                            >
                                {*label}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
