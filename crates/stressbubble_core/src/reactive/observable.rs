use crate::reactive::subscriber::{dispatch, SubscriberList, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

/// Tells [`Observable::update`] whether an in-place edit changed the value.
pub trait ChangeReport {
    fn changed(&self) -> bool;
}

impl ChangeReport for bool {
    fn changed(&self) -> bool {
        *self
    }
}

struct ObservableInner<T> {
    value: T,
    version: u64,
    subscribers: SubscriberList<T>,
}

/// Shared mutable cell with synchronous change notification.
///
/// Cloning an `Observable` clones the handle; both handles see the same value.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: SubscriberList::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Reads the current value without cloning it.
    ///
    /// `f` must not write to this cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of notified changes so far.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Edits the value in place as one state transition.
    ///
    /// Subscribers are notified once, after `f` returns, iff the returned
    /// report says the value changed. `f` must not touch this cell.
    pub fn update<R: ChangeReport>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (report, pending) = {
            let mut inner = self.inner.borrow_mut();
            let report = f(&mut inner.value);
            if report.changed() {
                inner.version += 1;
                let snapshot = inner.value.clone();
                (report, Some((snapshot, inner.subscribers.live())))
            } else {
                (report, None)
            }
        };
        if let Some((snapshot, callbacks)) = pending {
            dispatch(callbacks, &snapshot);
        }
        report
    }

    /// Registers `callback`; it receives every subsequent value.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.inner.borrow_mut().subscribers.add(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Replaces the value; equal values are a no-op (no notification).
    ///
    /// Returns whether subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        self.update(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }
}
