//! Todo List Filters Component
//!
//! Select control for the current filter mode.

use leptos::prelude::*;
use todo_state::FilterMode;

use crate::context::{use_observable, use_store};

#[component]
pub fn TodoListFilters() -> impl IntoView {
    let store = use_store();
    let filter = use_observable(store.filter());

    let update_filter = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<FilterMode>() {
            Ok(mode) => store.set_filter(mode),
            Err(e) => log::warn!("[FILTER] ignoring selection: {}", e),
        }
    };

    view! {
        <div class="todo-list-filters">
            "Filter: "
            <select on:change=update_filter>
                {FilterMode::ALL.into_iter().map(move |mode| view! {
                    <option
                        value=mode.as_str()
                        prop:selected=move || filter.get() == mode
                    >
                        {mode.label()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
