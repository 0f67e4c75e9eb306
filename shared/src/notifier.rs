//! "A preference changed" broadcast.
//!
//! Browsers deliver the native `storage` event only to *other* tabs of the
//! origin, never to the tab that wrote. The notifier therefore has two
//! inbound channels, both fanned out to the same subscribers:
//!
//! - [`Notifier::publish`]: raised by the store after a write in this tab.
//! - [`Notifier::deliver_external`]: raised by the platform adapter when
//!   another tab wrote.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

/// Callback invoked on every notification.
pub type Listener = Rc<dyn Fn()>;

/// Where a notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// A write made by this browsing context.
    SameContext,
    /// A write made by another context sharing the storage origin.
    CrossContext,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(entry, _)| *entry == id)
    }
}

/// Subscriber registry shared by every clone.
#[derive(Clone, Default)]
pub struct Notifier {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Notifier {
    /// Creates a notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`; it stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.subscribe_rc(Rc::new(listener))
    }

    /// Same as [`Notifier::subscribe`] for an already shared listener.
    pub fn subscribe_rc(&self, listener: Listener) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Signals a write made by this context.
    pub fn publish(&self) {
        self.dispatch(Channel::SameContext);
    }

    /// Signals a write made by another context sharing the origin.
    pub fn deliver_external(&self) {
        self.dispatch(Channel::CrossContext);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    fn dispatch(&self, channel: Channel) {
        // Listeners may re-enter the registry, so no borrow is held while
        // they run.
        let pending: Vec<(u64, Listener)> = self.registry.borrow().listeners.clone();
        tracing::trace!(?channel, subscribers = pending.len(), "preference change");
        for (id, listener) in pending {
            if self.registry.borrow().contains(id) {
                listener();
            }
        }
    }
}

/// Disposer returned by [`Notifier::subscribe`]. Dropping it deregisters
/// the listener.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Subscription {
    /// A subscription attached to nothing. Used where no store exists.
    pub fn detached() -> Self {
        Self {
            registry: Weak::new(),
            id: 0,
        }
    }

    /// Deregisters the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &(self.registry.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let handle = hits.clone();
        (hits, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn both_channels_reach_every_subscriber() {
        let notifier = Notifier::new();
        let (first, on_first) = counter();
        let (second, on_second) = counter();
        let _a = notifier.subscribe(on_first);
        let _b = notifier.subscribe(on_second);

        notifier.publish();
        notifier.deliver_external();

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn dropping_the_subscription_deregisters() {
        let notifier = Notifier::new();
        let (hits, on_hit) = counter();
        let subscription = notifier.subscribe(on_hit);
        notifier.publish();
        subscription.unsubscribe();
        notifier.publish();

        assert_eq!(hits.get(), 1);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn listeners_fire_in_subscription_order() {
        let notifier = Notifier::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let subs: Vec<_> = (0..3)
            .map(|n| {
                let order = order.clone();
                notifier.subscribe(move || order.borrow_mut().push(n))
            })
            .collect();

        notifier.publish();

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn listener_removed_mid_dispatch_is_skipped() {
        let notifier = Notifier::new();
        let (late, on_late) = counter();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _killer = {
            let victim = victim.clone();
            notifier.subscribe(move || {
                victim.borrow_mut().take();
            })
        };
        *victim.borrow_mut() = Some(notifier.subscribe(on_late));

        notifier.publish();

        assert_eq!(late.get(), 0);
        assert_eq!(notifier.subscriber_count(), 1);
    }

    #[test]
    fn reentrant_publish_and_subscribe_do_not_panic() {
        let notifier = Notifier::new();
        let depth = Rc::new(Cell::new(0));
        let spawned: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let _sub = {
            let inner = notifier.clone();
            let depth = depth.clone();
            let spawned = spawned.clone();
            notifier.subscribe(move || {
                depth.set(depth.get() + 1);
                if depth.get() == 1 {
                    spawned.borrow_mut().push(inner.subscribe(|| {}));
                    inner.publish();
                }
            })
        };

        notifier.publish();

        assert_eq!(depth.get(), 2);
        assert_eq!(notifier.subscriber_count(), 2);
    }

    #[test]
    fn subscription_outliving_notifier_drops_cleanly() {
        let notifier = Notifier::new();
        let subscription = notifier.subscribe(|| {});
        drop(notifier);
        drop(subscription);
        drop(Subscription::detached());
    }
}
