//! Application Context
//!
//! Store provision via the Leptos Context API, and the bridge that mirrors
//! an observable into a Leptos signal.

use leptos::prelude::*;
use todo_state::{Observable, TodoStore};

/// Make `store` available to every component below the caller.
pub fn provide_store(store: TodoStore) {
    provide_context(store);
}

/// Get the todo store from context
pub fn use_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Mirror `source` into a signal for the current component.
///
/// The subscription is released when the component's owner is cleaned up,
/// so a torn-down view never receives another notification.
pub fn use_observable<T, O>(source: &O) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
    O: Observable<T>,
{
    let (value, set_value) = signal(source.get());
    let subscription = source.subscribe(move |next: &T| set_value.set(next.clone()));
    on_cleanup(move || subscription.unsubscribe());
    value
}
