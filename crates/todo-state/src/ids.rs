//! Id Generation

use std::sync::atomic::{AtomicU32, Ordering};

use crate::model::TodoId;

/// Monotonic counter handing out todo ids, starting at 0.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> TodoId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }
}
