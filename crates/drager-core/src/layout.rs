//! Parent-size lookup for boundary computation.

use crate::geometry::ElementId;
use kurbo::Size;
use std::collections::HashMap;

/// Supplies container sizes to drag controllers.
pub trait LayoutHost {
    /// Size of the element's layout parent, if it has one.
    fn parent_size(&self, element: ElementId) -> Option<Size>;

    /// Size of the root container, used when an element has no parent.
    fn root_size(&self) -> Size;

    /// Parent size with root fallback.
    fn container_size(&self, element: ElementId) -> Size {
        self.parent_size(element).unwrap_or_else(|| self.root_size())
    }
}

/// Layout backed by a fixed table of parent sizes.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    root: Size,
    parents: HashMap<ElementId, Size>,
}

impl StaticLayout {
    pub fn new(root: Size) -> Self {
        Self {
            root,
            parents: HashMap::new(),
        }
    }

    /// Set or replace an element's parent size.
    pub fn set_parent_size(&mut self, element: ElementId, size: Size) {
        self.parents.insert(element, size);
    }

    pub fn remove(&mut self, element: ElementId) {
        self.parents.remove(&element);
    }

    pub fn set_root_size(&mut self, size: Size) {
        self.root = size;
    }
}

impl LayoutHost for StaticLayout {
    fn parent_size(&self, element: ElementId) -> Option<Size> {
        self.parents.get(&element).copied()
    }

    fn root_size(&self) -> Size {
        self.root
    }
}
