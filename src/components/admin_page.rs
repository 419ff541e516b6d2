//! Admin Page Component
//!
//! Menu management: a draft form over two modes (create when no item
//! is being edited, edit otherwise) and the item table. The local
//! list only changes after the server confirms a mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Draft, MenuItem};
use crate::store::{self, LoadState};

#[component]
pub fn AdminPage() -> impl IntoView {
    let (items, set_items) = signal(Vec::<MenuItem>::new());
    let (state, set_state) = signal(LoadState::Loading);
    let draft = RwSignal::new(Draft::default());
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);

    // Load the list on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_menu().await {
                Ok(loaded) => {
                    set_items.set(loaded);
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("failed to load menu: {}", e);
                    set_state.set(LoadState::failed(e));
                }
            }
        });
    });

    let is_valid = move || draft.get().is_valid();

    let reset_form = move || {
        set_editing_id.set(None);
        draft.set(Draft::default());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        match editing_id.get() {
            None => {
                let Some(payload) = current.to_create_payload() else { return };
                spawn_local(async move {
                    match api::create_menu_item(&payload).await {
                        Ok(created) => {
                            set_items.update(|items| items.push(created));
                            draft.set(Draft::default());
                        }
                        Err(e) => log::error!("failed to create menu item: {}", e),
                    }
                });
            }
            Some(id) => {
                let Some(payload) = current.to_update_payload() else { return };
                spawn_local(async move {
                    match api::update_menu_item(id, &payload).await {
                        Ok(updated) => {
                            set_items.update(|items| store::replace_item(items, updated));
                            reset_form();
                        }
                        Err(e) => log::error!("failed to update menu item {}: {}", id, e),
                    }
                });
            }
        }
    };

    let start_edit = move |item: &MenuItem| {
        set_editing_id.set(Some(item.id));
        draft.set(Draft::from_item(item));
    };

    let delete_item = move |id: u32| {
        spawn_local(async move {
            match api::delete_menu_item(id).await {
                Ok(()) => {
                    let mut clear_form = false;
                    set_items.update(|items| {
                        clear_form = store::apply_delete(items, editing_id.get_untracked(), id);
                    });
                    if clear_form {
                        reset_form();
                    }
                }
                Err(e) => log::error!("failed to delete menu item {}: {}", id, e),
            }
        });
    };

    view! {
        {move || match state.get() {
            LoadState::Loading => view! { <p>"Loading…"</p> }.into_any(),
            LoadState::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
            LoadState::Ready => view! {
                <div class="admin">
                    <h2>"Admin - Manage Menu"</h2>

                    <form class="admin-form" on:submit=on_submit>
                        <div>
                            <label>"Name"</label>
                            <input
                                prop:value=move || draft.get().name
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label>"Description"</label>
                            <input
                                prop:value=move || draft.get().description
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label>"Price"</label>
                            <input
                                prop:value=move || draft.get().price
                                on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label>"Image URL"</label>
                            <input
                                prop:value=move || draft.get().image
                                on:input=move |ev| draft.update(|d| d.image = event_target_value(&ev))
                            />
                        </div>
                        <div class="admin-actions">
                            <button type="submit" prop:disabled=move || !is_valid()>
                                {move || if editing_id.get().is_some() { "Update" } else { "Add" }}
                            </button>
                            {move || editing_id.get().map(|_| view! {
                                <button type="button" on:click=move |_| reset_form()>
                                    "Cancel"
                                </button>
                            })}
                        </div>
                    </form>

                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Price"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|item| item.id
                                children=move |item| {
                                    let id = item.id;
                                    let edit_source = item.clone();
                                    view! {
                                        <tr>
                                            <td>{item.id}</td>
                                            <td>{item.name.clone()}</td>
                                            <td>{format!("${:.2}", item.price)}</td>
                                            <td>
                                                <button on:click=move |_| start_edit(&edit_source)>
                                                    "Edit"
                                                </button>
                                                <button class="danger" on:click=move |_| delete_item(id)>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            }.into_any(),
        }}
    }
}
