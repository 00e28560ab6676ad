//! Observer registration and dispatch.
//!
//! Observers are kept in registration order and called synchronously, on
//! the caller's thread, for every event. Each call receives a read-only view
//! of the sender's elements alongside the event.

use crate::change::ChangeEvent;
use alloc::boxed::Box;
use alloc::vec::Vec;

/// Unique identifier for a registered observer.
pub type SubscriptionId = u64;

/// Callback type for change notifications: the sender's elements, then the
/// event.
pub type ChangeCallback<T> = Box<dyn Fn(&[T], &ChangeEvent)>;

/// A registered observer.
struct Subscription<T> {
    id: SubscriptionId,
    callback: ChangeCallback<T>,
}

/// Ordered list of observers of a collection of `T`.
pub struct SubscriptionManager<T> {
    /// Observers in registration order
    subscriptions: Vec<Subscription<T>>,
    /// Next subscription ID to assign
    next_id: SubscriptionId,
}

impl<T> Default for SubscriptionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for SubscriptionManager<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SubscriptionManager")
            .field("subscriptions", &self.subscriptions.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<T> SubscriptionManager<T> {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers `callback` and returns its ID.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&[T], &ChangeEvent) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            callback: Box::new(callback),
        });
        tracing::debug!(id, observers = self.subscriptions.len(), "observer subscribed");
        id
    }

    /// Unregisters an observer.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() != before
    }

    /// Calls every observer with `items` and `event`, in registration order.
    pub fn notify_all(&self, items: &[T], event: &ChangeEvent) {
        for sub in &self.subscriptions {
            tracing::trace!(
                id = sub.id,
                action = %event.action,
                len = items.len(),
                "notifying observer"
            );
            (sub.callback)(items, event);
        }
    }

    /// Returns the number of observers.
    #[inline]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns true if there are no observers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Removes every observer.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}
