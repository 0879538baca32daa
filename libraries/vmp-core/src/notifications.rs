//! Notification center with explicit subscription handles
//!
//! Observers never register callbacks. `subscribe` hands back a
//! [`Subscription`] that owns the receiving end of a channel; the owner drains
//! it from its own event loop. Dropping the subscription removes the observer,
//! so nothing can be delivered to an object that no longer exists.

use crate::types::{Notification, Topic};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, trace};

/// Identifier of a registered observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Observer {
    id: SubscriptionId,
    topic: Topic,
    tx: Sender<Notification>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    observers: Vec<Observer>,
}

impl Registry {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id != id);
        before != self.observers.len()
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Posts platform notifications to subscribed observers
///
/// Cloning is cheap; all clones share one registry.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    registry: Arc<Mutex<Registry>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for `topic`
    pub fn subscribe(&self, topic: Topic) -> Subscription {
        let (tx, rx) = unbounded();
        let mut registry = lock(&self.registry);
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.observers.push(Observer { id, topic, tx });
        debug!("Observer {:?} subscribed to {:?}", id, topic);

        Subscription {
            id,
            topic,
            rx,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `notification` to every observer of its topic
    ///
    /// Returns the number of observers it was delivered to.
    pub fn post(&self, notification: Notification) -> usize {
        let topic = notification.topic();
        let registry = lock(&self.registry);
        let mut delivered = 0;
        for observer in registry.observers.iter().filter(|o| o.topic == topic) {
            if observer.tx.send(notification.clone()).is_ok() {
                delivered += 1;
            }
        }
        trace!("Posted {:?} to {} observer(s)", notification, delivered);
        delivered
    }

    /// Number of registered observers across all topics
    pub fn observer_count(&self) -> usize {
        lock(&self.registry).observers.len()
    }

    /// Number of registered observers for `topic`
    pub fn observers_of(&self, topic: Topic) -> usize {
        lock(&self.registry)
            .observers
            .iter()
            .filter(|observer| observer.topic == topic)
            .count()
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// A registered observer
///
/// Deregisters itself when dropped.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    topic: Topic,
    rx: Receiver<Notification>,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Take every notification delivered so far, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        self.rx.try_iter().collect()
    }

    /// Whether this observer is still registered with its center
    pub fn is_registered(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            lock(&registry)
                .observers
                .iter()
                .any(|observer| observer.id == self.id)
        })
    }

    /// Deregister now instead of at drop
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if lock(&registry).remove(self.id) {
                debug!("Observer {:?} unsubscribed from {:?}", self.id, self.topic);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InterruptionPayload, LifecycleEvent};

    #[test]
    fn delivers_only_to_matching_topic() {
        let center = NotificationCenter::new();
        let interruptions = center.subscribe(Topic::Interruption);
        let lifecycle = center.subscribe(Topic::Lifecycle);

        let delivered = center.post(Notification::Lifecycle(LifecycleEvent::DidEnterBackground));
        assert_eq!(delivered, 1);

        assert!(interruptions.drain().is_empty());
        assert_eq!(
            lifecycle.drain(),
            vec![Notification::Lifecycle(LifecycleEvent::DidEnterBackground)]
        );
    }

    #[test]
    fn drain_preserves_order_and_empties_queue() {
        let center = NotificationCenter::new();
        let sub = center.subscribe(Topic::Interruption);

        center.post(Notification::Interruption(InterruptionPayload::began()));
        center.post(Notification::Interruption(InterruptionPayload::ended(true)));

        let drained = sub.drain();
        assert_eq!(
            drained,
            vec![
                Notification::Interruption(InterruptionPayload::began()),
                Notification::Interruption(InterruptionPayload::ended(true)),
            ]
        );
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn dropping_subscription_deregisters() {
        let center = NotificationCenter::new();
        let sub = center.subscribe(Topic::Lifecycle);
        assert!(sub.is_registered());
        assert_eq!(center.observer_count(), 1);

        drop(sub);
        assert_eq!(center.observer_count(), 0);
        assert_eq!(
            center.post(Notification::Lifecycle(LifecycleEvent::WillEnterForeground)),
            0
        );
    }

    #[test]
    fn cancel_deregisters_only_that_observer() {
        let center = NotificationCenter::new();
        let first = center.subscribe(Topic::Interruption);
        let second = center.subscribe(Topic::Interruption);
        assert_ne!(first.id(), second.id());

        first.cancel();
        assert_eq!(center.observers_of(Topic::Interruption), 1);
        assert!(second.is_registered());
    }

    #[test]
    fn subscription_outliving_center_drops_cleanly() {
        let center = NotificationCenter::new();
        let sub = center.subscribe(Topic::Interruption);
        drop(center);
        assert!(!sub.is_registered());
        drop(sub);
    }
}
