//! Drag controller for a single draggable element.
//!
//! The controller owns the element's [`DragData`] and turns pointer and key
//! events into position updates:
//! - pointer-down raises the element, starts a session and emits `drag-start`
//! - pointer-move applies the scaled delta, optional grid snap and boundary clamp
//! - pointer-up ends the session, emits `drag-end` and arms an outside-click listener
//! - arrow keys nudge the element while it is selected
//!
//! Document-level listening goes through an [`EventDispatcher`], z-order
//! through a shared [`StackingOrder`], and container sizes through a
//! [`LayoutHost`]. All three are passed in per call via [`DragContext`].

mod events;
mod state;

pub use events::DragEvent;
pub use state::{DragSession, DragState};

use crate::config::DragConfig;
use crate::dispatcher::{EventDispatcher, ListenerId, ListenerKind};
use crate::geometry::{Boundary, DragData, ElementId};
use crate::input::{KeyEvent, PointerEvent};
use crate::layout::LayoutHost;
use crate::snap::{nudge_step, snap_with_hysteresis};
use crate::stacking::StackingOrder;
use kurbo::Vec2;

/// Shared services a controller needs while handling an event.
pub struct DragContext<'a> {
    pub dispatcher: &'a mut EventDispatcher,
    pub stacking: &'a mut StackingOrder,
    pub layout: &'a dyn LayoutHost,
}

/// Pointer/keyboard interaction state machine for one element.
#[derive(Debug, Clone)]
pub struct DragController {
    id: ElementId,
    config: DragConfig,
    data: DragData,
    state: DragState,
    selected: bool,
    z_index: Option<u32>,
    key_listener: Option<ListenerId>,
    click_listener: Option<ListenerId>,
    events: Vec<DragEvent>,
}

impl DragController {
    /// Create a controller for `id` with its initial geometry.
    pub fn new(id: ElementId, data: DragData, config: DragConfig) -> Self {
        Self {
            id,
            config,
            data,
            state: DragState::Idle,
            selected: false,
            z_index: None,
            key_listener: None,
            click_listener: None,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Current geometry.
    pub fn data(&self) -> &DragData {
        &self.data
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// True between pointer-down and pointer-up.
    pub fn is_mousedown(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Z-index assigned at the last pointer-down.
    pub fn z_index(&self) -> Option<u32> {
        self.z_index
    }

    /// Take all notifications emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<DragEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a drag. Returns false if the element is disabled, disposed or
    /// already being dragged.
    pub fn on_pointer_down(&mut self, event: &PointerEvent, cx: &mut DragContext<'_>) -> bool {
        if self.config.disabled || !matches!(self.state, DragState::Idle) {
            return false;
        }

        self.set_selected(true, cx.dispatcher);
        self.z_index = Some(cx.stacking.raise());

        let boundary = self.config.boundary.then(|| self.boundary(cx.layout));
        let session = DragSession {
            start_pointer: event.position(),
            start_position: self.data.position(),
            boundary,
            move_listener: cx.dispatcher.listen(self.id, ListenerKind::PointerMove, false),
            up_listener: cx.dispatcher.listen(self.id, ListenerKind::PointerUp, false),
        };
        log::debug!(
            "drag start {} at ({}, {}), z-index {:?}",
            self.id,
            self.data.left,
            self.data.top,
            self.z_index
        );
        self.state = DragState::Dragging(session);
        self.events.push(DragEvent::DragStart(self.data));
        true
    }

    /// Follow the pointer. Returns false when no drag is active.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> bool {
        let DragState::Dragging(session) = &self.state else {
            return false;
        };

        let mut position = session.candidate(event.position(), self.config.scale_ratio);
        if self.config.snap_to_grid {
            position = snap_with_hysteresis(position, self.data.position(), self.config.grid()).point;
        }
        if let Some(boundary) = session.boundary {
            position = boundary.clamp(position);
        }

        log::trace!("drag {} to ({}, {})", self.id, position.x, position.y);
        self.data.set_position(position);
        self.events.push(DragEvent::Drag(self.data));
        true
    }

    /// Finish the drag. Returns false when no drag is active.
    pub fn on_pointer_up(&mut self, _event: &PointerEvent, dispatcher: &mut EventDispatcher) -> bool {
        if !self.state.is_dragging() {
            return false;
        }
        let DragState::Dragging(session) = std::mem::replace(&mut self.state, DragState::Idle) else {
            return false;
        };

        dispatcher.unlisten(session.move_listener);
        dispatcher.unlisten(session.up_listener);

        let armed = self.click_listener.is_some_and(|id| dispatcher.contains(id));
        if !armed {
            self.click_listener = Some(dispatcher.listen(self.id, ListenerKind::Click, true));
        }

        log::debug!("drag end {} at ({}, {})", self.id, self.data.left, self.data.top);
        self.events.push(DragEvent::DragEnd(self.data));
        true
    }

    /// Handle the armed outside-click listener firing.
    pub fn on_outside_click(&mut self, dispatcher: &mut EventDispatcher) {
        if self.state.is_disposed() {
            return;
        }
        self.click_listener = None;
        self.set_selected(false, dispatcher);
    }

    /// Nudge with arrow keys. Returns true if the position changed.
    ///
    /// Ignored mid-drag, when key events are disabled, and while unselected.
    pub fn on_key_down(&mut self, event: &KeyEvent, layout: &dyn LayoutHost) -> bool {
        if self.state != DragState::Idle || self.config.disabled_key_event || !self.selected {
            return false;
        }

        let step = nudge_step(&event.key, &self.config).unwrap_or(Vec2::ZERO);
        let mut position = self.data.position() + step;
        if self.config.boundary {
            position = self.boundary(layout).clamp(position);
        }

        let changed = position != self.data.position();
        if changed {
            log::trace!("nudge {} with {} to ({}, {})", self.id, event.key.identifier(), position.x, position.y);
        }
        self.data.set_position(position);
        changed
    }

    /// Change selection, running the transition hook when it actually changes.
    pub fn set_selected(&mut self, selected: bool, dispatcher: &mut EventDispatcher) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        self.on_selection_changed(dispatcher);
    }

    /// Register or drop the keyboard listener to match `selected`.
    fn on_selection_changed(&mut self, dispatcher: &mut EventDispatcher) {
        log::debug!("{} selected = {}", self.id, self.selected);
        if self.config.disabled_key_event {
            return;
        }
        if self.selected {
            if self.key_listener.is_none() {
                self.key_listener = Some(dispatcher.listen(self.id, ListenerKind::KeyDown, false));
            }
        } else if let Some(id) = self.key_listener.take() {
            dispatcher.unlisten(id);
        }
    }

    /// Remove every listener this controller owns and stop reacting to events.
    pub fn teardown(&mut self, dispatcher: &mut EventDispatcher) {
        let removed = dispatcher.unlisten_owner(self.id);
        log::debug!("teardown {} removed {} listener(s)", self.id, removed);
        self.state = DragState::Disposed;
        self.selected = false;
        self.key_listener = None;
        self.click_listener = None;
    }

    /// Limits inside the element's container at the current size.
    pub fn boundary(&self, layout: &dyn LayoutHost) -> Boundary {
        Boundary::from_parent(layout.container_size(self.id), self.data.size(), self.config.scale_ratio)
    }
}
