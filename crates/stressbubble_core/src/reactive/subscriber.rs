use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

/// Keeps a subscriber callback alive. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    _callback: Box<dyn Any>,
}

impl Subscription {
    /// Ends the subscription explicitly; equivalent to dropping it.
    pub fn unsubscribe(self) {}
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Subscription")
    }
}

/// Registration-ordered callbacks held weakly; dead entries are pruned lazily.
pub(crate) struct SubscriberList<T> {
    entries: Vec<Weak<Callback<T>>>,
}

impl<T: 'static> SubscriberList<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Rc<Callback<T>> = Rc::new(callback);
        self.entries.push(Rc::downgrade(&callback));
        Subscription {
            _callback: Box::new(callback),
        }
    }

    /// Prunes dropped subscribers and returns strong handles to the rest.
    pub(crate) fn live(&mut self) -> Vec<Rc<Callback<T>>> {
        self.entries.retain(|entry| entry.strong_count() > 0);
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }
}

/// Invokes `callbacks` in order with `value`.
pub(crate) fn dispatch<T>(callbacks: Vec<Rc<Callback<T>>>, value: &T) {
    for callback in callbacks {
        callback(value);
    }
}
