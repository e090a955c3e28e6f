//! Cursors over the node arena of a [`RadixTree`].
//!
//! [`Cursor`] is the public, read-only view: it can move to the parent, the
//! first child or the next sibling of the node it focuses on, and read that
//! node's label. [`CursorMut`] adds the rewrites the insertion engine needs
//! and is kept inside the crate so that the tree invariants can only be
//! changed through insertion.

use super::radix_tree::{NodeData, RadixTree, EMPTY};

/// Read-only position within a tree
pub struct Cursor<'a, T> {
    tree: &'a RadixTree<T>,
    focus: usize,
}

// manual impls, deriving would require T: Clone
impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(tree: &'a RadixTree<T>, focus: usize) -> Self {
        Self { tree, focus }
    }

    fn node(&self) -> &'a NodeData<T> {
        &self.tree.nodes[self.focus]
    }

    fn at(&self, idx: usize) -> Option<Self> {
        (idx != EMPTY).then(|| Self::new(self.tree, idx))
    }

    /// Label of the focused node. Empty only for the root.
    pub fn label(&self) -> &'a [T] {
        &self.node().label
    }

    pub fn is_root(&self) -> bool {
        self.focus == self.tree.root
    }

    pub fn has_children(&self) -> bool {
        self.node().first_child != EMPTY
    }

    pub fn parent(&self) -> Option<Self> {
        self.at(self.node().parent)
    }

    /// Most recently added child
    pub fn first_child(&self) -> Option<Self> {
        self.at(self.node().first_child)
    }

    pub fn next_sibling(&self) -> Option<Self> {
        self.at(self.node().next_sibling)
    }

    /// Children of the focused node, in stored order
    pub fn children(&self) -> Children<'a, T> {
        Children {
            next: self.first_child(),
        }
    }
}

/// Iterator over the children of a node, see [`Cursor::children`]
pub struct Children<'a, T> {
    next: Option<Cursor<'a, T>>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = Cursor<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next_sibling();
        Some(current)
    }
}

/// Position within a tree that can rewrite the focused node
pub(crate) struct CursorMut<'a, T> {
    tree: &'a mut RadixTree<T>,
    focus: usize,
}

impl<'a, T> CursorMut<'a, T> {
    /// Mutable cursor positioned at the root
    pub(crate) fn new(tree: &'a mut RadixTree<T>) -> Self {
        let focus = tree.root;
        Self { tree, focus }
    }

    pub(crate) fn focus(&self) -> usize {
        self.focus
    }

    pub(crate) fn label(&self) -> &[T] {
        &self.tree.nodes[self.focus].label
    }

    fn move_to(&mut self, idx: usize) -> bool {
        if idx == EMPTY {
            return false;
        }
        self.focus = idx;
        true
    }

    /// Moves to the first child. Returns false, without moving, on a leaf.
    pub(crate) fn to_first_child(&mut self) -> bool {
        self.move_to(self.tree.nodes[self.focus].first_child)
    }

    /// Moves to the next sibling. Returns false, without moving, on the last
    /// child.
    pub(crate) fn to_next_sibling(&mut self) -> bool {
        self.move_to(self.tree.nodes[self.focus].next_sibling)
    }

    /// Moves to the parent. Returns false, without moving, at the root.
    pub(crate) fn to_parent(&mut self) -> bool {
        self.move_to(self.tree.nodes[self.focus].parent)
    }

    /// Adds a node labeled `label` in front of the focused node's children.
    /// The cursor does not move.
    pub(crate) fn prepend_child(&mut self, label: Vec<T>) -> usize {
        let focus = self.focus;
        let mut child = NodeData::new(label, focus);
        child.next_sibling = self.tree.nodes[focus].first_child;

        let idx = self.tree.push_node(child);
        self.tree.nodes[focus].first_child = idx;
        idx
    }

    /// Replaces the focused subtree with a node labeled `shared` whose only
    /// child is the old subtree relabeled `rest`. The new node takes the old
    /// one's place among its siblings and keeps the focus.
    pub(crate) fn split(&mut self, shared: Vec<T>, rest: Vec<T>) {
        let focus = self.focus;

        let mut moved = NodeData::new(rest, focus);
        moved.first_child = self.tree.nodes[focus].first_child;
        let moved_idx = self.tree.push_node(moved);

        let mut child = self.tree.nodes[moved_idx].first_child;
        while child != EMPTY {
            self.tree.nodes[child].parent = moved_idx;
            child = self.tree.nodes[child].next_sibling;
        }

        let node = &mut self.tree.nodes[focus];
        node.label = shared;
        node.first_child = moved_idx;
    }
}
