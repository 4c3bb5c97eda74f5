//! Todo Item Row Component
//!
//! One editable row: text field, completion checkbox, delete button.

use leptos::prelude::*;
use todo_state::TodoId;

use crate::context::{use_observable, use_store};

/// Row for the item `id`.
///
/// Rows are keyed by id, so the row looks up its item in the live list
/// instead of holding a copy that would go stale after an edit.
#[component]
pub fn TodoItemRow(id: TodoId) -> impl IntoView {
    let store = use_store();
    let todo_list = use_observable(store.todos());

    let item = Memo::new(move |_| {
        todo_list.with(|items| items.iter().find(|item| item.id == id).cloned())
    });
    let text = move || item.get().map(|item| item.text).unwrap_or_default();
    let is_complete = move || item.get().is_some_and(|item| item.is_complete);

    let edit_store = store.clone();
    let toggle_store = store.clone();

    view! {
        <div class=move || if is_complete() { "todo-item completed" } else { "todo-item" }>
            <input
                type="text"
                prop:value=text
                on:input=move |ev| {
                    edit_store.edit_item_text(id, event_target_value(&ev));
                }
            />
            <input
                type="checkbox"
                prop:checked=is_complete
                on:change=move |_| {
                    toggle_store.toggle_item(id);
                }
            />
            <button class="delete-btn" on:click=move |_| {
                store.delete_item(id);
            }>"X"</button>
        </div>
    }
}
