//! Stacking order shared by every draggable element.

/// First value handed out is `BASE_Z_INDEX + 1`.
pub const BASE_Z_INDEX: u32 = 1000;

/// Monotonically increasing z-index counter.
///
/// One instance is shared by all elements on a surface so the most recently
/// grabbed element always ends up on top.
#[derive(Debug, Clone)]
pub struct StackingOrder {
    current: u32,
}

impl Default for StackingOrder {
    fn default() -> Self {
        Self { current: BASE_Z_INDEX }
    }
}

impl StackingOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next z-index.
    pub fn raise(&mut self) -> u32 {
        self.current = self.current.saturating_add(1);
        self.current
    }

    /// The most recently allocated z-index.
    pub fn current(&self) -> u32 {
        self.current
    }
}
