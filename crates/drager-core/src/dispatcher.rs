//! Document-level listener registry.
//!
//! Stands in for global `document` listeners: controllers register interest
//! in document events here, and the host asks the dispatcher which elements
//! should receive each event. Listeners fire in registration order and
//! one-shot listeners are dropped as they fire.

use crate::geometry::ElementId;

/// Document events a controller can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    Click,
    KeyDown,
}

/// Handle returned by [`EventDispatcher::listen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Listener {
    id: ListenerId,
    owner: ElementId,
    kind: ListenerKind,
    once: bool,
}

/// Ordered set of document listeners shared by all controllers.
#[derive(Debug, Clone, Default)]
pub struct EventDispatcher {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl EventDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. `once` listeners are removed after they fire.
    pub fn listen(&mut self, owner: ElementId, kind: ListenerKind, once: bool) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(Listener { id, owner, kind, once });
        log::trace!("listen {:?} for {} ({:?}, once={})", id, owner, kind, once);
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        before != self.listeners.len()
    }

    /// Remove every listener owned by an element. Returns how many were removed.
    pub fn unlisten_owner(&mut self, owner: ElementId) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.owner != owner);
        before - self.listeners.len()
    }

    /// Resolve the owners that receive an event of `kind`, in registration order.
    ///
    /// One-shot listeners are consumed.
    pub fn dispatch(&mut self, kind: ListenerKind) -> Vec<ElementId> {
        let targets: Vec<ElementId> = self
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.owner)
            .collect();
        self.listeners.retain(|l| !(l.kind == kind && l.once));
        targets
    }

    /// Check whether a listener id is still registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    /// Check whether an element listens for a kind of event.
    pub fn is_listening(&self, owner: ElementId, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|l| l.owner == owner && l.kind == kind)
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
