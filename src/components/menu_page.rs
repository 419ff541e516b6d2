//! Menu Page Component
//!
//! Public read-only listing of the menu. Fetches once on mount; no
//! refresh mechanism afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::MenuCard;
use crate::models::MenuItem;
use crate::store::LoadState;

#[component]
pub fn MenuPage() -> impl IntoView {
    let (menu, set_menu) = signal(Vec::<MenuItem>::new());
    let (state, set_state) = signal(LoadState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_menu().await {
                Ok(items) => {
                    log::info!("loaded {} menu items", items.len());
                    set_menu.set(items);
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("failed to load menu: {}", e);
                    set_state.set(LoadState::failed(e));
                }
            }
        });
    });

    view! {
        {move || match state.get() {
            LoadState::Loading => view! { <p>"Loading menu…"</p> }.into_any(),
            LoadState::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
            LoadState::Ready => view! {
                <div class="menu-grid">
                    <For
                        each=move || menu.get()
                        key=|item| item.id
                        children=move |item| view! { <MenuCard item=item/> }
                    />
                </div>
            }.into_any(),
        }}
    }
}
