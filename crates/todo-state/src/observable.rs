//! Observable Value Holders
//!
//! A [`Holder`] keeps exactly one current value. Every replacement is pushed
//! synchronously to the current subscribers, and a new subscriber is handed
//! the current value as soon as it registers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Anything that has a current value and announces replacements of it.
///
/// Implementors always hold a value, so `get` never blocks or fails.
pub trait Observable<T: Clone> {
    /// Current value.
    fn get(&self) -> T;

    /// Register `callback`. It runs once right away with the current value,
    /// then again after every change until the returned handle is released.
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static;
}

// ========================
// Subject
// ========================

struct Subscribers<T> {
    next_key: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// Shared cell + subscriber list behind both holders and derived values.
pub(crate) struct Subject<T> {
    value: Mutex<T>,
    /// Bumped on every emit; a round stops once a newer one has started.
    generation: AtomicU64,
    subscribers: Mutex<Subscribers<T>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    pub(crate) fn new(value: T) -> Arc<Self> {
        Arc::new(Self {
            value: Mutex::new(value),
            generation: AtomicU64::new(0),
            subscribers: Mutex::new(Subscribers {
                next_key: 0,
                entries: Vec::new(),
            }),
        })
    }

    pub(crate) fn get(&self) -> T {
        self.value.lock().clone()
    }

    /// Store `value` and notify everyone subscribed at this moment.
    ///
    /// No lock is held while callbacks run, so they may read, write or
    /// (un)subscribe on this same subject. A write from inside a callback
    /// starts a newer round that reaches every subscriber; the remaining
    /// callbacks of the outer round are then skipped, so nobody ends on a
    /// stale value.
    pub(crate) fn emit(&self, value: T) {
        let generation = {
            let mut current = self.value.lock();
            *current = value.clone();
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .lock()
            .entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            if self.generation.load(Ordering::SeqCst) != generation {
                break;
            }
            callback(&value);
        }
    }

    pub(crate) fn subscribe(self: &Arc<Self>, callback: Callback<T>) -> Subscription {
        let key = {
            let mut subscribers = self.subscribers.lock();
            let key = subscribers.next_key;
            subscribers.next_key += 1;
            subscribers.entries.push((key, Arc::clone(&callback)));
            key
        };
        callback(&self.get());

        let subject: Weak<Self> = Arc::downgrade(self);
        Subscription::new(move || {
            if let Some(subject) = subject.upgrade() {
                subject.remove(key);
            }
        })
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.lock().entries.len()
    }

    fn remove(&self, key: u64) {
        self.subscribers.lock().entries.retain(|(k, _)| *k != key);
    }
}

// ========================
// Subscription
// ========================

/// Handle for one registered callback.
///
/// Releasing it, by [`Subscription::unsubscribe`] or by dropping it, stops
/// all future notifications to that callback.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Stop receiving notifications.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

// ========================
// Holder
// ========================

/// Mutable single-value cell with change notification.
///
/// Clones are handles onto the same cell.
pub struct Holder<T> {
    subject: Arc<Subject<T>>,
}

impl<T: Clone + Send + 'static> Holder<T> {
    pub fn new(value: T) -> Self {
        Self {
            subject: Subject::new(value),
        }
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.subject.emit(value);
    }

    /// Replace the value with one computed from the previous value.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.subject.get());
        self.set(next);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: Clone + Send + 'static> Observable<T> for Holder<T> {
    fn get(&self) -> T {
        self.subject.get()
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subject.subscribe(Arc::new(callback))
    }
}

impl<T> Clone for Holder<T> {
    fn clone(&self) -> Self {
        Self {
            subject: Arc::clone(&self.subject),
        }
    }
}

impl<T: Clone + Default + Send + 'static> Default for Holder<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug + Send + 'static> fmt::Debug for Holder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holder")
            .field("value", &self.subject.get())
            .field("subscribers", &self.subject.subscriber_count())
            .finish()
    }
}
