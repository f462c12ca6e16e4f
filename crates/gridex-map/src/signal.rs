//! Change notifications: a per-kind observer registry.
//!
//! Each [`SpatialMap`](crate::SpatialMap) owns one [`Signal`] per
//! notification kind. A signal fires synchronously, after the mutation
//! it describes is fully committed, and only when that mutation
//! succeeded.
//!
//! # Delivery
//!
//! Emitting takes a snapshot of the connected listeners and calls each
//! one in connection order. A listener connected while a delivery is in
//! flight is not part of that snapshot, so it first hears about the
//! *next* notification. A listener disconnected mid-delivery may still
//! receive the in-flight notification.

use gridex_core::Position;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle identifying a connected listener, for [`Signal::disconnect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item was added at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemAdded {
    /// Where the item was placed.
    pub position: Position,
}

/// An item was removed from `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemRemoved {
    /// The position the item occupied.
    pub position: Position,
}

/// An item moved from `old_position` to `new_position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemMoved {
    /// Where the item was.
    pub old_position: Position,
    /// Where the item is now.
    pub new_position: Position,
}

type Listener<T, E> = Rc<dyn Fn(&T, &E)>;

struct Registry<T, E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<T, E>)>,
}

/// Registry of listeners for one notification kind `E` about items `T`.
///
/// `Signal` is a cheap handle: clones share the same registry, so a
/// listener can capture a clone and connect further listeners from
/// inside a delivery.
///
/// ```
/// use gridex_map::{ItemAdded, Signal};
///
/// let signal: Signal<&str, ItemAdded> = Signal::new();
/// let handle = signal.clone();
/// let id = signal.connect(|item, ev| println!("{item} added at {}", ev.position));
/// assert_eq!(handle.listener_count(), 1);
///
/// assert!(handle.disconnect(id));
/// assert_eq!(signal.listener_count(), 0);
/// ```
pub struct Signal<T, E> {
    registry: Rc<RefCell<Registry<T, E>>>,
}

impl<T, E> Signal<T, E> {
    /// Create a signal with no listeners.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Connect a listener. It is called for every later notification
    /// until disconnected.
    pub fn connect(&self, listener: impl Fn(&T, &E) + 'static) -> ListenerId {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Disconnect a listener. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(lid, _)| *lid != id);
        registry.listeners.len() != before
    }

    /// Whether `id` is currently connected.
    pub fn is_connected(&self, id: ListenerId) -> bool {
        self.registry
            .borrow()
            .listeners
            .iter()
            .any(|(lid, _)| *lid == id)
    }

    /// Number of connected listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Disconnect every listener.
    pub fn disconnect_all(&self) {
        self.registry.borrow_mut().listeners.clear();
    }

    /// Deliver a notification to every currently connected listener.
    pub(crate) fn emit(&self, item: &T, event: &E) {
        let snapshot: SmallVec<[Listener<T, E>; 4]> = {
            let registry = self.registry.borrow();
            if registry.listeners.is_empty() {
                return;
            }
            registry
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        };
        for listener in &snapshot {
            listener(item, event);
        }
    }
}

impl<T, E> Default for Signal<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Signal<T, E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T, E> fmt::Debug for Signal<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
