//! Derived Values
//!
//! Read-only observables computed from other observables. A derived value
//! recomputes synchronously whenever any of its sources emits, then notifies
//! its own subscribers exactly like a [`Holder`](crate::Holder).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::observable::{Observable, Subject, Subscription};

/// Subscriptions on the sources, plus handles that keep those sources alive
/// for as long as this derived value exists.
struct Upstream {
    subscriptions: Vec<Subscription>,
    _sources: Vec<Box<dyn Any + Send + Sync>>,
}

/// Read-only projection of one or more sources.
///
/// There is no `set`: the only way to change a derived value is to change a
/// source. Clones share the same computation; the upstream subscriptions are
/// released when the last clone is dropped.
pub struct Derived<T> {
    subject: Arc<Subject<T>>,
    upstream: Arc<Upstream>,
}

impl<T: Clone + Send + 'static> Derived<T> {
    /// Project a single source through `f`.
    pub fn map<S, O, F>(source: &O, f: F) -> Self
    where
        S: Clone + Send + 'static,
        O: Observable<S> + Clone + Send + Sync + 'static,
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        let subject = Subject::new(f(&source.get()));
        let target = Arc::clone(&subject);
        // The source replays its current value here; nobody listens yet.
        let upstream = source.subscribe(move |value: &S| target.emit(f(value)));

        Self {
            subject,
            upstream: Arc::new(Upstream {
                subscriptions: vec![upstream],
                _sources: vec![Box::new(source.clone())],
            }),
        }
    }

    /// Combine the latest values of two sources.
    ///
    /// Every observable here always holds a value, so the initial value is
    /// available at construction; afterwards an emission from either source
    /// recomputes against the latest value of the other.
    pub fn combine<A, B, OA, OB, F>(first: &OA, second: &OB, f: F) -> Self
    where
        A: Clone + Send + 'static,
        B: Clone + Send + 'static,
        OA: Observable<A> + Clone + Send + Sync + 'static,
        OB: Observable<B> + Clone + Send + Sync + 'static,
        F: Fn(&A, &B) -> T + Send + Sync + 'static,
    {
        let latest = Arc::new(Mutex::new((first.get(), second.get())));
        let f = Arc::new(f);
        let initial = {
            let latest = latest.lock();
            f(&latest.0, &latest.1)
        };
        let subject = Subject::new(initial);

        let on_first = {
            let latest = Arc::clone(&latest);
            let f = Arc::clone(&f);
            let target = Arc::clone(&subject);
            first.subscribe(move |value: &A| {
                let next = {
                    let mut latest = latest.lock();
                    latest.0 = value.clone();
                    f(&latest.0, &latest.1)
                };
                target.emit(next);
            })
        };
        let on_second = {
            let target = Arc::clone(&subject);
            second.subscribe(move |value: &B| {
                let next = {
                    let mut latest = latest.lock();
                    latest.1 = value.clone();
                    f(&latest.0, &latest.1)
                };
                target.emit(next);
            })
        };

        Self {
            subject,
            upstream: Arc::new(Upstream {
                subscriptions: vec![on_first, on_second],
                _sources: vec![Box::new(first.clone()), Box::new(second.clone())],
            }),
        }
    }

    /// Number of live subscriptions on this derived value.
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: Clone + Send + 'static> Observable<T> for Derived<T> {
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

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            subject: Arc::clone(&self.subject),
            upstream: Arc::clone(&self.upstream),
        }
    }
}

impl<T: Clone + fmt::Debug + Send + 'static> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("value", &self.subject.get())
            .field("sources", &self.upstream.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observable::tests::recorder;
    use crate::Holder;

    #[test]
    fn test_map_has_initial_value() {
        let source = Holder::new(3);
        let doubled = Derived::map(&source, |v: &i32| v * 2);
        assert_eq!(doubled.get(), 6);
    }

    #[test]
    fn test_map_recomputes_on_source_change() {
        let source = Holder::new(1);
        let doubled = Derived::map(&source, |v: &i32| v * 2);
        let (seen, sink) = recorder::<i32>();
        let _sub = doubled.subscribe(sink);

        source.set(5);
        source.update(|prev| prev + 1);

        assert_eq!(*seen.lock(), vec![2, 10, 12]);
        assert_eq!(doubled.get(), 12);
    }

    #[test]
    fn test_combine_recomputes_on_either_source() {
        let left = Holder::new(1);
        let right = Holder::new("x".to_string());
        let joined = Derived::combine(&left, &right, |n: &i32, s: &String| format!("{}{}", s, n));
        let (seen, sink) = recorder::<String>();
        let _sub = joined.subscribe(sink);

        left.set(2);
        right.set("y".to_string());

        assert_eq!(
            *seen.lock(),
            vec!["x1".to_string(), "x2".to_string(), "y2".to_string()]
        );
    }

    #[test]
    fn test_derived_of_derived() {
        let source = Holder::new(2);
        let squared = Derived::map(&source, |v: &i32| v * v);
        let label = Derived::map(&squared, |v: &i32| format!("={}", v));

        source.set(4);
        assert_eq!(label.get(), "=16");
    }

    #[test]
    fn test_derived_agrees_with_holder_after_nested_write() {
        let source = Holder::new(0);
        let inner = source.clone();
        let _clamp = source.subscribe(move |value: &i32| {
            if *value > 10 {
                inner.set(10);
            }
        });
        let doubled = Derived::map(&source, |v: &i32| v * 2);

        source.set(42);

        assert_eq!(source.get(), 10);
        assert_eq!(doubled.get(), 20);
    }

    #[test]
    fn test_chain_over_temporary_derived() {
        let source = Holder::new(2);
        let label = Derived::map(&Derived::map(&source, |v: &i32| v * v), |v: &i32| {
            format!("={}", v)
        });

        source.set(4);
        assert_eq!(label.get(), "=16");
    }

    #[test]
    fn test_chain_survives_dropped_intermediate() {
        let source = Holder::new(2);
        let squared = Derived::map(&source, |v: &i32| v * v);
        let label = Derived::map(&squared, |v: &i32| format!("={}", v));
        drop(squared);

        source.set(3);
        assert_eq!(label.get(), "=9");
        drop(label);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_dropping_derived_releases_sources() {
        let left = Holder::new(0);
        let right = Holder::new(0);
        let sum = Derived::combine(&left, &right, |a: &i32, b: &i32| a + b);
        let copy = sum.clone();
        assert_eq!(left.subscriber_count(), 1);
        assert_eq!(right.subscriber_count(), 1);

        drop(sum);
        assert_eq!(left.subscriber_count(), 1);
        drop(copy);
        assert_eq!(left.subscriber_count(), 0);
        assert_eq!(right.subscriber_count(), 0);
    }
}
