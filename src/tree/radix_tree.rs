use std::fmt;

use crate::matching::Strategy;

use super::cursor::{Cursor, CursorMut};
use super::generic::GenericTree;
use super::engine;

/// Link value for a missing parent, child or sibling
pub(super) const EMPTY: usize = usize::MAX;

/// Reasons an insertion is refused. The tree is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sequences must hold at least one element
    EmptySequence,

    /// The tree was built with one strategy and the caller asked for another
    StrategyMismatch {
        /// Strategy the tree was built with
        expected: Strategy,

        /// Strategy passed by the caller
        found: Strategy,
    },
}

/// Radix tree over sequences of `T`, stored as an arena of nodes linked by
/// index.
///
/// The root always carries an empty label. Children are kept newest first,
/// and no two siblings share anything under the tree's [`Strategy`].
#[derive(Debug, Clone)]
pub struct RadixTree<T> {
    pub(super) nodes: Vec<NodeData<T>>,
    pub(super) root: usize,
    strategy: Strategy,
}

#[derive(Debug, Clone)]
pub(super) struct NodeData<T> {
    pub(super) label: Vec<T>,
    pub(super) parent: usize,
    pub(super) first_child: usize,
    pub(super) next_sibling: usize,
}

impl<T> NodeData<T> {
    pub(super) fn new(label: Vec<T>, parent: usize) -> Self {
        Self {
            label,
            parent,
            first_child: EMPTY,
            next_sibling: EMPTY,
        }
    }
}

impl<T: PartialEq + Clone> Default for RadixTree<T> {
    fn default() -> Self {
        RadixTree::empty(Strategy::default())
    }
}

impl<T: PartialEq + Clone> RadixTree<T> {
    /// Creates a tree holding only the root, bound to `strategy` for its
    /// whole lifetime
    pub fn empty(strategy: Strategy) -> Self {
        Self {
            nodes: vec![NodeData::new(Vec::new(), EMPTY)],
            root: 0,
            strategy,
        }
    }

    /// Creates a tree whose root has a single child holding `sequence`
    pub fn singleton(strategy: Strategy, sequence: &[T]) -> Result<Self, Error> {
        Self::empty(strategy).with(sequence)
    }

    /// Builds a tree by inserting every sequence in order, starting from an
    /// empty tree. The order of the input decides the shape of the tree.
    ///
    /// Stops at the first sequence that is refused.
    pub fn from_sequences<I, S>(strategy: Strategy, sequences: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        let mut tree = Self::empty(strategy);
        for sequence in sequences {
            tree.insert(sequence.as_ref())?;
        }
        Ok(tree)
    }

    /// Inserts `sequence`, splitting the node where it diverges from what is
    /// already stored and grafting the rest.
    ///
    /// Inserting a sequence that is already represented changes nothing.
    pub fn insert(&mut self, sequence: &[T]) -> Result<(), Error> {
        if sequence.is_empty() {
            return Err(Error::EmptySequence);
        }

        let strategy = self.strategy;
        engine::place(CursorMut::new(self), strategy, sequence);
        Ok(())
    }

    /// Consuming form of [`RadixTree::insert`], handy for chaining
    pub fn with(mut self, sequence: &[T]) -> Result<Self, Error> {
        self.insert(sequence)?;
        Ok(self)
    }

    /// Copies the tree into an owned node/children form for traversal and
    /// rendering
    pub fn to_underlying_tree(&self) -> GenericTree<T> {
        self.build_generic(self.root)
    }

    fn build_generic(&self, idx: usize) -> GenericTree<T> {
        let node = &self.nodes[idx];
        let mut children = Vec::new();
        let mut child = node.first_child;
        while child != EMPTY {
            children.push(self.build_generic(child));
            child = self.nodes[child].next_sibling;
        }
        GenericTree::new(node.label.clone(), children)
    }
}

impl<T> RadixTree<T> {
    /// Strategy this tree was built with
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root].first_child == EMPTY
    }

    /// Read-only cursor positioned at the root
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.root)
    }

    pub(super) fn push_node(&mut self, node: NodeData<T>) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        idx
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptySequence => write!(f, "cannot insert an empty sequence"),
            Error::StrategyMismatch { expected, found } => write!(
                f,
                "tree uses {} matching, insertion asked for {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for Error {}
