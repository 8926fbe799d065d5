//! Drager Core Library
//!
//! Platform-agnostic pointer-drag interaction logic: dragging, grid snapping,
//! boundary clamping, keyboard nudging and stacking order.

pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod snap;
pub mod stacking;
pub mod stage;

pub use config::{ConfigError, ConfigResult, DragConfig};
pub use controller::{DragContext, DragController, DragEvent, DragSession, DragState};
pub use dispatcher::{EventDispatcher, ListenerId, ListenerKind};
pub use geometry::{Boundary, DragData, ElementId};
pub use input::{Key, KeyEvent, PointerEvent};
pub use layout::{LayoutHost, StaticLayout};
pub use snap::{SnapResult, nudge_step, snap_axis, snap_with_hysteresis};
pub use stacking::StackingOrder;
pub use stage::Stage;
