//! Todo Frontend App
//!
//! Root component: owns the store and lays out stats, filter, creator and
//! the filtered rows.

use leptos::prelude::*;
use todo_state::{TodoItem, TodoStore};

use crate::components::{TodoItemCreator, TodoItemRow, TodoListFilters, TodoListStats};
use crate::context::{provide_store, use_observable};

#[component]
pub fn App() -> impl IntoView {
    let store = TodoStore::new();
    provide_store(store.clone());

    let todo_list = use_observable(store.filtered());

    view! {
        <main class="todo-app">
            <TodoListStats />
            <TodoListFilters />
            <TodoItemCreator />

            <div class="todo-list">
                <For
                    each=move || todo_list.get()
                    key=|item| item.id
                    children=move |item: TodoItem| view! { <TodoItemRow id=item.id /> }
                />
            </div>
        </main>
    }
}
