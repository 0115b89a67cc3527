//! Render targets: the explicit handles a board writes its lists into.

use std::sync::{Arc, Mutex, PoisonError};

use crate::view::ViewNode;

/// A container whose children the board replaces wholesale on every reload.
pub trait RenderTarget: Send + Sync {
    fn replace_children(&self, nodes: Vec<ViewNode>);
}

impl<T: RenderTarget + ?Sized> RenderTarget for Arc<T> {
    fn replace_children(&self, nodes: Vec<ViewNode>) {
        (**self).replace_children(nodes)
    }
}

/// In-memory list target. Clones share the same children.
#[derive(Debug, Clone, Default)]
pub struct ListTarget {
    children: Arc<Mutex<Vec<ViewNode>>>,
}

impl ListTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current children, in render order.
    pub fn children(&self) -> Vec<ViewNode> {
        self.children
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RenderTarget for ListTarget {
    fn replace_children(&self, nodes: Vec<ViewNode>) {
        *self
            .children
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = nodes;
    }
}
