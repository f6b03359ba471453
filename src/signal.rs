//! Observable value with an explicit subscriber list.
//!
//! The page shell owns one `Signal<ScrollState>` fed by the single window scroll listener and
//! hands it down through a context. Components subscribe when they attach and drop the
//! returned [`Subscription`] when they detach.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Subscriber<T>)>,
}

pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Two handles are equal when they point at the same signal.
impl<T> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Stores `value` and notifies every subscriber. Each update overwrites the last; there is
    /// no batching.
    pub fn set(&self, value: T) {
        let subscribers: Vec<Subscriber<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect()
        };
        // Borrow released: subscribers may read or subscribe re-entrantly.
        for subscriber in subscribers {
            subscriber(&value);
        }
    }

    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::new(f)));
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }
}

/// Removes its subscriber from the signal when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl<T> Signal<T> {
        fn subscriber_count(&self) -> usize {
            self.inner.borrow().subscribers.len()
        }
    }
    use std::cell::Cell;

    #[test]
    fn test_subscribers_see_every_update() {
        let signal = Signal::new(0.0_f64);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            signal.subscribe(move |v| seen.borrow_mut().push(*v))
        };

        signal.set(0.25);
        signal.set(0.5);
        signal.set(0.1);

        assert_eq!(*seen.borrow(), vec![0.25, 0.5, 0.1]);
        assert_eq!(signal.get(), 0.1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let signal = Signal::new(1u32);
        let calls = Rc::new(Cell::new(0));
        let sub = {
            let calls = calls.clone();
            signal.subscribe(move |_| calls.set(calls.get() + 1))
        };
        assert_eq!(signal.subscriber_count(), 1);

        signal.set(2);
        drop(sub);
        signal.set(3);

        assert_eq!(calls.get(), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_signal() {
        let signal = Signal::new(String::new());
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }

    #[test]
    fn test_reentrant_read_inside_subscriber() {
        let signal = Signal::new(0i32);
        let observed = Rc::new(Cell::new(0));
        let _sub = {
            let handle = signal.clone();
            let observed = observed.clone();
            signal.subscribe(move |_| observed.set(handle.get()))
        };
        signal.set(7);
        assert_eq!(observed.get(), 7);
    }

    #[test]
    fn test_clones_compare_equal() {
        let a = Signal::new(0u8);
        let b = a.clone();
        let c = Signal::new(0u8);
        assert!(a == b);
        assert!(a != c);
    }
}
