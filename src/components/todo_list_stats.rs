//! Todo List Stats Component
//!
//! Totals and completion percentage over the full list.

use leptos::prelude::*;
use todo_state::TodoStats;

use crate::context::{use_observable, use_store};

/// Display lines for `stats`. The percentage is rounded here only.
fn stats_lines(stats: &TodoStats) -> [String; 4] {
    [
        format!("Total items: {}", stats.total),
        format!("Items completed: {}", stats.completed),
        format!("Items not completed: {}", stats.uncompleted),
        format!("Percent completed: {}", stats.percent_rounded()),
    ]
}

#[component]
pub fn TodoListStats() -> impl IntoView {
    let store = use_store();
    let stats = use_observable(store.stats());

    view! {
        <ul class="todo-list-stats">
            {move || stats_lines(&stats.get())
                .into_iter()
                .map(|line| view! { <li>{line}</li> })
                .collect_view()}
        </ul>
    }
}
