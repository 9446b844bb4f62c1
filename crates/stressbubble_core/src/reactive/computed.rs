use crate::reactive::observable::Observable;
use crate::reactive::subscriber::{dispatch, SubscriberList, Subscription};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct ComputedInner<T> {
    value: T,
    version: u64,
    subscribers: SubscriberList<T>,
}

/// Read-only cell derived from two observables.
///
/// Recomputes eagerly whenever either source notifies and then notifies its
/// own subscribers with the fresh value. Each recomputation produces a new
/// value; readers always get their own clone.
pub struct Computed<T> {
    inner: Rc<RefCell<ComputedInner<T>>>,
    _sources: [Subscription; 2],
}

impl<T: Clone + 'static> Computed<T> {
    /// Derives a cell from `left` and `right` using `compute`.
    ///
    /// Source subscriptions are owned by the returned cell and end when it is
    /// dropped.
    pub fn from_pair<A, B, F>(left: &Observable<A>, right: &Observable<B>, compute: F) -> Self
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(&A, &B) -> T + 'static,
    {
        let compute = Rc::new(compute);
        let initial = left.with(|a| right.with(|b| compute(a, b)));
        let inner = Rc::new(RefCell::new(ComputedInner {
            value: initial,
            version: 0,
            subscribers: SubscriberList::new(),
        }));

        let on_left = {
            let target = Rc::downgrade(&inner);
            let right = right.clone();
            let compute = Rc::clone(&compute);
            left.subscribe(move |a: &A| {
                let next = right.with(|b| compute(a, b));
                publish(&target, next);
            })
        };
        let on_right = {
            let target = Rc::downgrade(&inner);
            let left = left.clone();
            let compute = Rc::clone(&compute);
            right.subscribe(move |b: &B| {
                let next = left.with(|a| compute(a, b));
                publish(&target, next);
            })
        };

        Self {
            inner,
            _sources: [on_left, on_right],
        }
    }

    /// Returns a clone of the latest derived value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Number of recomputations since construction.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registers `callback`; it receives every recomputed value.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.inner.borrow_mut().subscribers.add(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

fn publish<T: Clone + 'static>(target: &Weak<RefCell<ComputedInner<T>>>, next: T) {
    let Some(inner) = target.upgrade() else {
        return;
    };
    let callbacks = {
        let mut inner = inner.borrow_mut();
        inner.value = next.clone();
        inner.version += 1;
        inner.subscribers.live()
    };
    dispatch(callbacks, &next);
}
