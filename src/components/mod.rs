//! UI Components
//!
//! Views over the todo store. Each one subscribes to what it renders and
//! turns a user gesture into exactly one store intent.

mod todo_item_creator;
mod todo_item_row;
mod todo_list_filters;
mod todo_list_stats;

pub use todo_item_creator::TodoItemCreator;
pub use todo_item_row::TodoItemRow;
pub use todo_list_filters::TodoListFilters;
pub use todo_list_stats::TodoListStats;
