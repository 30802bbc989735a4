//! Mutation notifications for store consumers.
//!
//! Views hold read-only references into a store and re-render when notified.
//! The registry invokes every callback synchronously after each successful
//! state mutation; a rejected mutation (duplicate compare add, unknown id)
//! notifies nobody.

use std::fmt;

/// Handle identifying one subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn()>;

/// Registry of mutation callbacks.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    /// Register a callback; returns the handle needed to unsubscribe.
    pub(crate) fn subscribe(&mut self, callback: impl Fn() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if the handle was unknown.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < before
    }

    /// Invoke every registered callback.
    pub(crate) fn notify(&self) {
        for (_, callback) in &self.entries {
            callback();
        }
    }

    /// Number of active subscriptions.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_notify_invokes_all_callbacks() {
        let count = Rc::new(Cell::new(0));
        let mut subscribers = Subscribers::default();

        for _ in 0..3 {
            let count = Rc::clone(&count);
            subscribers.subscribe(move || count.set(count.get() + 1));
        }

        subscribers.notify();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(Cell::new(0));
        let mut subscribers = Subscribers::default();

        let id = {
            let count = Rc::clone(&count);
            subscribers.subscribe(move || count.set(count.get() + 1))
        };

        assert!(subscribers.unsubscribe(id));
        assert_eq!(subscribers.len(), 0);

        subscribers.notify();
        assert_eq!(count.get(), 0);

        // Unknown handle
        assert!(!subscribers.unsubscribe(id));
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut subscribers = Subscribers::default();
        let a = subscribers.subscribe(|| {});
        let b = subscribers.subscribe(|| {});
        assert_ne!(a, b);
    }
}
