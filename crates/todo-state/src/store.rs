//! Todo Store
//!
//! The two sources of truth (todo list, filter mode) plus the values derived
//! from them, and the intents views dispatch into them.

use std::sync::Arc;

use crate::derived::Derived;
use crate::ids::IdGenerator;
use crate::list;
use crate::model::{FilterMode, TodoId, TodoItem, TodoStats};
use crate::observable::{Holder, Observable};

/// Application state. Construct one at the root and hand clones to views;
/// clones share the same holders.
#[derive(Clone, Debug)]
pub struct TodoStore {
    todos: Holder<Vec<TodoItem>>,
    filter: Holder<FilterMode>,
    filtered: Derived<Vec<TodoItem>>,
    stats: Derived<TodoStats>,
    ids: Arc<IdGenerator>,
}

impl TodoStore {
    pub fn new() -> Self {
        let todos = Holder::new(Vec::new());
        let filter = Holder::new(FilterMode::ShowAll);
        let filtered = Derived::combine(
            &filter,
            &todos,
            |mode: &FilterMode, items: &Vec<TodoItem>| list::filtered(items, *mode),
        );
        let stats = Derived::map(&todos, |items: &Vec<TodoItem>| list::stats(items));

        Self {
            todos,
            filter,
            filtered,
            stats,
            ids: Arc::new(IdGenerator::new()),
        }
    }

    // ========================
    // Observables
    // ========================

    pub fn todos(&self) -> &Holder<Vec<TodoItem>> {
        &self.todos
    }

    pub fn filter(&self) -> &Holder<FilterMode> {
        &self.filter
    }

    /// Full list projected through the current filter
    pub fn filtered(&self) -> &Derived<Vec<TodoItem>> {
        &self.filtered
    }

    pub fn stats(&self) -> &Derived<TodoStats> {
        &self.stats
    }

    // ========================
    // Intents
    // ========================

    /// Append a new uncompleted item and return its id.
    pub fn add_item(&self, text: impl Into<String>) -> TodoId {
        let item = TodoItem::new(self.ids.next_id(), text);
        let id = item.id;
        log::debug!("[STORE] add item #{}", id);
        self.todos.update(|prev| list::appended(prev, item));
        id
    }

    /// Replace the text of item `id`. Returns `false` if no such item.
    pub fn edit_item_text(&self, id: TodoId, text: impl Into<String>) -> bool {
        let text = text.into();
        self.replace_item(id, "edit", |item| item.with_text(text))
    }

    /// Flip completion of item `id`. Returns `false` if no such item.
    pub fn toggle_item(&self, id: TodoId) -> bool {
        let applied = self.replace_item(id, "toggle", TodoItem::toggled);
        if applied && log::log_enabled!(log::Level::Debug) {
            let items = self.todos.get();
            match serde_json::to_string(&items) {
                Ok(json) => {
                    log::debug!("[STORE] list after toggle ({} items): {}", items.len(), json)
                }
                Err(e) => log::warn!("[STORE] could not serialize list: {}", e),
            }
        }
        applied
    }

    /// Remove item `id`. Returns `false` if no such item.
    pub fn delete_item(&self, id: TodoId) -> bool {
        match list::removed(&self.todos.get(), id) {
            Some(next) => {
                log::debug!("[STORE] delete item #{}", id);
                self.todos.set(next);
                true
            }
            None => {
                log::warn!("[STORE] delete: no item #{}", id);
                false
            }
        }
    }

    pub fn set_filter(&self, mode: FilterMode) {
        log::debug!("[STORE] filter -> {}", mode);
        self.filter.set(mode);
    }

    fn replace_item(
        &self,
        id: TodoId,
        action: &str,
        f: impl FnOnce(&TodoItem) -> TodoItem,
    ) -> bool {
        match list::replaced(&self.todos.get(), id, f) {
            Some(next) => {
                self.todos.set(next);
                true
            }
            None => {
                log::warn!("[STORE] {}: no item #{}", action, id);
                false
            }
        }
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
