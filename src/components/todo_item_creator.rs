//! Todo Item Creator Component
//!
//! Text input holding uncommitted text, plus an "Add" button.

use leptos::prelude::*;

use crate::context::use_store;

#[component]
pub fn TodoItemCreator() -> impl IntoView {
    let store = use_store();

    let (input_value, set_input_value) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store.add_item(input_value.get_untracked());
        set_input_value.set(String::new());
    };

    view! {
        <form class="todo-item-creator" on:submit=add_item>
            <input
                type="text"
                prop:value=move || input_value.get()
                on:input=move |ev| set_input_value.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
