//! Keyboard event source owned by the host surface.
//!
//! A `KeyboardHub` stands in for the process-wide key listener list: the host
//! feeds every key press into [`KeyboardHub::emit`], and each subscriber sees
//! it in subscription order. Subscriptions are RAII guards, so a listener can
//! never outlive the component that registered it.
//!
//! Every live subscriber receives every event. Two dispatchers on the same hub
//! will both react to a shared binding.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::event::KeyInput;

type Listener = Rc<dyn Fn(&mut KeyInput)>;
type ListenerList = RefCell<Vec<(u64, Listener)>>;

/// Shared handle to a keyboard event source.
///
/// Cloning is cheap and yields another handle to the same listener list.
#[derive(Clone, Default)]
pub struct KeyboardHub {
    listeners: Rc<ListenerList>,
    next_id: Rc<Cell<u64>>,
}

impl KeyboardHub {
    /// Create a hub with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the returned guard drops.
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self, listener: impl Fn(&mut KeyInput) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        tracing::trace!(id, "keyboard listener subscribed");

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver an event to every listener in subscription order.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// unsubscribe while the event is in flight.
    pub fn emit(&self, event: &mut KeyInput) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for KeyboardHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a registered listener. Dropping it unregisters the listener.
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl Subscription {
    /// Whether the hub this subscription belongs to is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.listeners.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let removed = {
            let mut listeners = listeners.borrow_mut();
            let position = listeners.iter().position(|(id, _)| *id == self.id);
            let removed = position.map(|index| listeners.remove(index));
            removed
        };
        // The listener may own further subscriptions on this hub; drop it unborrowed.
        drop(removed);
        tracing::trace!(id = self.id, "keyboard listener released");
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_subscribe_and_emit() {
        let hub = KeyboardHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = hub.subscribe(move |event| sink.borrow_mut().push(event.key.clone()));

        hub.emit(&mut KeyInput::new("a"));
        hub.emit(&mut KeyInput::new("b"));

        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_drop_releases_listener() {
        let hub = KeyboardHub::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let sub = hub.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(hub.listener_count(), 1);

        drop(sub);
        assert_eq!(hub.listener_count(), 0);

        hub.emit(&mut KeyInput::new("a"));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_every_listener_receives_event() {
        let hub = KeyboardHub::new();
        let hits = Rc::new(Cell::new(0));

        let first = Rc::clone(&hits);
        let second = Rc::clone(&hits);
        let _a = hub.subscribe(move |_| first.set(first.get() + 1));
        let _b = hub.subscribe(move |_| second.set(second.get() + 1));

        hub.emit(&mut KeyInput::new("x"));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_listener_can_prevent_default() {
        let hub = KeyboardHub::new();
        let _sub = hub.subscribe(|event| {
            if event.key == "s" {
                event.prevent_default();
            }
        });

        let mut claimed = KeyInput::new("s");
        hub.emit(&mut claimed);
        assert!(claimed.default_prevented());

        let mut ignored = KeyInput::new("t");
        hub.emit(&mut ignored);
        assert!(!ignored.default_prevented());
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let hub = KeyboardHub::new();
        let sub = hub.subscribe(|_| {});
        assert!(sub.is_connected());

        drop(hub);
        assert!(!sub.is_connected());
        drop(sub);
    }

    #[test]
    fn test_released_on_unwind() {
        let hub = KeyboardHub::new();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _sub = hub.subscribe(|_| {});
            assert_eq!(hub.listener_count(), 1);
            panic!("surface torn down");
        }));

        assert!(result.is_err());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_releasing_listener_that_owns_subscription() {
        let hub = KeyboardHub::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let inner = hub.subscribe(move |_| counter.set(counter.get() + 1));
        let outer = hub.subscribe(move |_| {
            let _owned = &inner;
        });
        assert_eq!(hub.listener_count(), 2);

        drop(outer);
        assert_eq!(hub.listener_count(), 0);

        hub.emit(&mut KeyInput::new("x"));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_listener_unsubscribes_itself_during_emit() {
        let hub = KeyboardHub::new();
        let hits = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let counter = Rc::clone(&hits);
        let own = Rc::clone(&slot);
        let sub = hub.subscribe(move |_| {
            counter.set(counter.get() + 1);
            drop(own.borrow_mut().take());
        });
        *slot.borrow_mut() = Some(sub);

        hub.emit(&mut KeyInput::new("x"));
        assert_eq!(hub.listener_count(), 0);

        hub.emit(&mut KeyInput::new("x"));
        assert_eq!(hits.get(), 1);
    }
}
