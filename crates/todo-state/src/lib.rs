//! Todo State
//!
//! Reactive state model for the todo list:
//! - observable: value holders with synchronous change notification
//! - derived: read-only values recomputed from holders (map, combine-latest)
//! - model: items, filter mode, stats
//! - list: immutable-update helpers over the item list
//! - store: holders + derived values + the intents that mutate them

mod derived;
mod ids;
pub mod list;
mod model;
mod observable;
mod store;


pub use derived::Derived;
pub use ids::IdGenerator;
pub use model::{FilterMode, TodoId, TodoItem, TodoStats};
pub use observable::{Holder, Observable, Subscription};
pub use store::TodoStore;
