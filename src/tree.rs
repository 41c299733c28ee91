//! Arena-based view storage standing in for the host's view hierarchy.
//!
//! The ripple container only needs geometry from its host: which views are
//! groups, the order of their children, and each view's frame. `ViewTree`
//! keeps exactly that, in slots addressed by generational [`ViewId`]s.
//!
//! Frames are stored relative to the parent view, the way a host layout pass
//! reports `left`/`top`/`right`/`bottom`. Helpers convert to absolute
//! coordinates where painting needs them.

use crate::renderer::Canvas;
use crate::widgets::{Color, Rect};

/// Unique identifier for a view in the tree.
///
/// Slots are reused after removal; the generation makes stale IDs from a
/// removed view resolve to nothing instead of to the slot's new occupant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ViewId {
    index: u32,
    generation: u32,
}

impl ViewId {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// A view that draws itself and receives touches
    Leaf,
    /// A view that only arranges children
    Group,
}

#[derive(Debug)]
struct Node {
    kind: ViewKind,
    /// Frame relative to the parent view
    frame: Rect,
    background: Option<Color>,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Default)]
pub struct ViewTree {
    slots: Vec<Slot>,
    free_indices: Vec<u32>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root group with the given frame.
    pub fn add_root(&mut self, frame: Rect) -> ViewId {
        self.insert(Node {
            kind: ViewKind::Group,
            frame,
            background: None,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Append a leaf view to `parent`. Returns `None` if `parent` is stale.
    pub fn add_leaf(&mut self, parent: ViewId, frame: Rect) -> Option<ViewId> {
        self.add_child(parent, ViewKind::Leaf, frame)
    }

    /// Append a nested group to `parent`. Returns `None` if `parent` is stale.
    pub fn add_group(&mut self, parent: ViewId, frame: Rect) -> Option<ViewId> {
        self.add_child(parent, ViewKind::Group, frame)
    }

    fn add_child(&mut self, parent: ViewId, kind: ViewKind, frame: Rect) -> Option<ViewId> {
        self.node(parent)?;
        let id = self.insert(Node {
            kind,
            frame,
            background: None,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.push(id);
        }
        Some(id)
    }

    fn insert(&mut self, node: Node) -> ViewId {
        if let Some(index) = self.free_indices.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            ViewId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            ViewId::new(index, 0)
        }
    }

    /// Remove a view and its whole subtree.
    pub fn remove(&mut self, id: ViewId) {
        let Some(node) = self.take_node(id) else {
            return;
        };

        if let Some(parent) = node.parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|&c| c != id);
        }

        let mut pending = node.children;
        while let Some(child) = pending.pop() {
            if let Some(child_node) = self.take_node(child) {
                pending.extend(child_node.children);
            }
        }
    }

    fn take_node(&mut self, id: ViewId) -> Option<Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        self.free_indices.push(id.index);
        Some(node)
    }

    fn node(&self, id: ViewId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: ViewId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.node(id).is_some()
    }

    pub fn kind(&self, id: ViewId) -> Option<ViewKind> {
        self.node(id).map(|n| n.kind)
    }

    pub fn is_group(&self, id: ViewId) -> bool {
        self.kind(id) == Some(ViewKind::Group)
    }

    /// Frame relative to the parent view.
    pub fn frame(&self, id: ViewId) -> Option<Rect> {
        self.node(id).map(|n| n.frame)
    }

    /// Move or resize a view, as a host layout pass would.
    pub fn set_frame(&mut self, id: ViewId, frame: Rect) {
        if let Some(node) = self.node_mut(id) {
            node.frame = frame;
        }
    }

    pub fn set_background(&mut self, id: ViewId, color: Color) {
        if let Some(node) = self.node_mut(id) {
            node.background = Some(color);
        }
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children in index order. Empty for leaves and stale IDs.
    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Paint the backgrounds of `id`'s descendants.
    ///
    /// `origin` is the absolute position of `id` itself; children are drawn in
    /// index order so later siblings land on top.
    pub fn paint_children(&self, id: ViewId, origin: (f32, f32), ctx: &mut dyn Canvas) {
        for &child in self.children(id) {
            let Some(node) = self.node(child) else {
                continue;
            };
            let frame = node.frame.offset(origin.0, origin.1);
            if let Some(color) = node.background {
                ctx.draw_rect(frame, color);
            }
            if node.kind == ViewKind::Group {
                self.paint_children(child, (frame.x, frame.y), ctx);
            }
        }
    }
}
