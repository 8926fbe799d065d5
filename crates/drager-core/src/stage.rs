//! Surface hosting draggable elements and routing document events to them.

use crate::config::DragConfig;
use crate::controller::{DragContext, DragController, DragEvent};
use crate::dispatcher::{EventDispatcher, ListenerKind};
use crate::geometry::{DragData, ElementId};
use crate::input::{KeyEvent, PointerEvent};
use crate::layout::StaticLayout;
use crate::stacking::StackingOrder;
use kurbo::Size;
use std::collections::HashMap;

/// Owns the shared services (dispatcher, stacking order, layout) and every
/// mounted [`DragController`].
///
/// Element-targeted events (`pointer_down`) go straight to the target.
/// Document events (`pointer_move`, `pointer_up`, `key_down`, `click`) go to
/// whichever controllers currently listen for them, in registration order.
#[derive(Debug, Clone)]
pub struct Stage {
    dispatcher: EventDispatcher,
    stacking: StackingOrder,
    layout: StaticLayout,
    controllers: HashMap<ElementId, DragController>,
    events: Vec<(ElementId, DragEvent)>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Stage {
    /// Create a stage whose root container has the given size.
    pub fn new(root: Size) -> Self {
        Self {
            dispatcher: EventDispatcher::new(),
            stacking: StackingOrder::new(),
            layout: StaticLayout::new(root),
            controllers: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Mount an element directly in the root container.
    pub fn mount(&mut self, data: DragData, config: DragConfig) -> ElementId {
        let id = ElementId::new();
        self.controllers.insert(id, DragController::new(id, data, config));
        log::debug!("mounted {}", id);
        id
    }

    /// Mount an element inside a parent of the given size.
    pub fn mount_in(&mut self, parent: Size, data: DragData, config: DragConfig) -> ElementId {
        let id = self.mount(data, config);
        self.layout.set_parent_size(id, parent);
        id
    }

    /// Tear down and remove an element.
    pub fn unmount(&mut self, id: ElementId) -> Option<DragController> {
        let mut controller = self.controllers.remove(&id)?;
        controller.teardown(&mut self.dispatcher);
        self.collect(&mut controller);
        self.layout.remove(id);
        Some(controller)
    }

    pub fn controller(&self, id: ElementId) -> Option<&DragController> {
        self.controllers.get(&id)
    }

    pub fn controllers(&self) -> impl Iterator<Item = &DragController> {
        self.controllers.values()
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    pub fn stacking(&self) -> &StackingOrder {
        &self.stacking
    }

    pub fn layout_mut(&mut self) -> &mut StaticLayout {
        &mut self.layout
    }

    /// Pointer pressed on `target`. Unknown targets are ignored.
    pub fn pointer_down(&mut self, target: ElementId, event: &PointerEvent) -> bool {
        let Some(controller) = self.controllers.get_mut(&target) else {
            log::debug!("pointer down on unknown element {}", target);
            return false;
        };

        let mut cx = DragContext {
            dispatcher: &mut self.dispatcher,
            stacking: &mut self.stacking,
            layout: &self.layout,
        };
        let started = controller.on_pointer_down(event, &mut cx);
        Self::collect_into(&mut self.events, controller);
        started
    }

    /// Pointer moved anywhere on the document. Returns how many elements moved.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> usize {
        let mut handled = 0;
        for id in self.dispatcher.dispatch(ListenerKind::PointerMove) {
            if let Some(controller) = self.controllers.get_mut(&id) {
                if controller.on_pointer_move(event) {
                    handled += 1;
                }
                Self::collect_into(&mut self.events, controller);
            }
        }
        handled
    }

    /// Pointer released anywhere on the document. Returns how many drags ended.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> usize {
        let mut handled = 0;
        for id in self.dispatcher.dispatch(ListenerKind::PointerUp) {
            if let Some(controller) = self.controllers.get_mut(&id) {
                if controller.on_pointer_up(event, &mut self.dispatcher) {
                    handled += 1;
                }
                Self::collect_into(&mut self.events, controller);
            }
        }
        handled
    }

    /// Key pressed. Returns how many elements were nudged.
    pub fn key_down(&mut self, event: &KeyEvent) -> usize {
        let mut handled = 0;
        for id in self.dispatcher.dispatch(ListenerKind::KeyDown) {
            if let Some(controller) = self.controllers.get_mut(&id) {
                if controller.on_key_down(event, &self.layout) {
                    handled += 1;
                }
            }
        }
        handled
    }

    /// Click on the document. Fires every armed outside-click listener once.
    pub fn click(&mut self) -> usize {
        let targets = self.dispatcher.dispatch(ListenerKind::Click);
        for id in &targets {
            if let Some(controller) = self.controllers.get_mut(id) {
                controller.on_outside_click(&mut self.dispatcher);
            }
        }
        targets.len()
    }

    /// Take every notification emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<(ElementId, DragEvent)> {
        std::mem::take(&mut self.events)
    }

    fn collect(&mut self, controller: &mut DragController) {
        Self::collect_into(&mut self.events, controller);
    }

    fn collect_into(events: &mut Vec<(ElementId, DragEvent)>, controller: &mut DragController) {
        let id = controller.id();
        events.extend(controller.drain_events().into_iter().map(|e| (id, e)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down { position: Point::new(x, y) }
    }

    fn mv(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move { position: Point::new(x, y) }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up { position: Point::new(x, y) }
    }

    #[test]
    fn test_drag_through_stage_clamped() {
        let mut stage = Stage::new(Size::new(500.0, 300.0));
        let id = stage.mount(DragData::new(100.0, 50.0), DragConfig { boundary: true, ..DragConfig::default() });

        assert!(stage.pointer_down(id, &down(0.0, 0.0)));
        assert_eq!(stage.pointer_move(&mv(450.0, 10.0)), 1);
        assert_eq!(stage.pointer_up(&up(450.0, 10.0)), 1);

        let controller = stage.controller(id).unwrap();
        assert_eq!(controller.data().position(), Point::new(400.0, 10.0));

        let names: Vec<_> = stage.drain_events().iter().map(|(_, e)| e.name()).collect();
        assert_eq!(names, ["drag-start", "drag", "drag-end"]);
    }

    #[test]
    fn test_moves_after_pointer_up_are_not_routed() {
        let mut stage = Stage::new(Size::new(500.0, 300.0));
        let id = stage.mount(DragData::default(), DragConfig::default());

        stage.pointer_down(id, &down(0.0, 0.0));
        stage.pointer_up(&up(0.0, 0.0));
        assert_eq!(stage.pointer_move(&mv(50.0, 50.0)), 0);
        assert_eq!(stage.controller(id).unwrap().data().position(), Point::ZERO);
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut stage = Stage::new(Size::new(500.0, 300.0));
        assert!(!stage.pointer_down(ElementId::new(), &down(0.0, 0.0)));
        assert!(stage.dispatcher().is_empty());
    }

    #[test]
    fn test_key_routed_only_to_selected() {
        let mut stage = Stage::new(Size::new(500.0, 300.0));
        let a = stage.mount(DragData::default(), DragConfig::default());
        let b = stage.mount(DragData::default(), DragConfig::default());

        stage.pointer_down(a, &down(0.0, 0.0));
        stage.pointer_up(&up(0.0, 0.0));

        assert_eq!(stage.key_down(&KeyEvent::pressed("ArrowRight")), 1);
        assert_eq!(stage.controller(a).unwrap().data().left, 1.0);
        assert_eq!(stage.controller(b).unwrap().data().left, 0.0);
    }

    #[test]
    fn test_click_deselects_once() {
        let mut stage = Stage::new(Size::new(500.0, 300.0));
        let id = stage.mount(DragData::default(), DragConfig::default());

        stage.pointer_down(id, &down(0.0, 0.0));
        stage.pointer_up(&up(0.0, 0.0));
        assert!(stage.controller(id).unwrap().is_selected());

        assert_eq!(stage.click(), 1);
        assert!(!stage.controller(id).unwrap().is_selected());
        assert_eq!(stage.key_down(&KeyEvent::pressed("ArrowRight")), 0);
        assert_eq!(stage.click(), 0);
    }

    #[test]
    fn test_last_grabbed_is_on_top() {
        let mut stage = Stage::new(Size::new(500.0, 300.0));
        let a = stage.mount(DragData::default(), DragConfig::default());
        let b = stage.mount(DragData::default(), DragConfig::default());

        for id in [a, b, a] {
            stage.pointer_down(id, &down(0.0, 0.0));
            stage.pointer_up(&up(0.0, 0.0));
        }
        let za = stage.controller(a).unwrap().z_index().unwrap();
        let zb = stage.controller(b).unwrap().z_index().unwrap();
        assert!(za > zb);
        assert_eq!(stage.stacking().current(), za);
    }

    #[test]
    fn test_mount_in_parent() {
        let mut stage = Stage::new(Size::new(1000.0, 1000.0));
        let id = stage.mount_in(
            Size::new(200.0, 200.0),
            DragData::new(50.0, 50.0),
            DragConfig { boundary: true, ..DragConfig::default() },
        );

        stage.pointer_down(id, &down(0.0, 0.0));
        stage.pointer_move(&mv(500.0, 500.0));
        assert_eq!(stage.controller(id).unwrap().data().position(), Point::new(150.0, 150.0));
    }

    #[test]
    fn test_unmount_mid_drag_cleans_up() {
        let mut stage = Stage::new(Size::new(500.0, 300.0));
        let id = stage.mount(DragData::default(), DragConfig::default());

        stage.pointer_down(id, &down(0.0, 0.0));
        let controller = stage.unmount(id).unwrap();
        assert!(controller.state().is_disposed());
        assert!(stage.dispatcher().is_empty());
        assert_eq!(stage.pointer_up(&up(0.0, 0.0)), 0);
        assert!(stage.unmount(id).is_none());
    }
}
