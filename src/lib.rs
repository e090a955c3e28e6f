//! Incremental radix tree over sequences of arbitrary elements.
//!
//! Sequences are inserted one at a time. Whatever a new sequence shares with
//! the existing content is merged into a common ancestor node, so the size of
//! the tree follows the number of distinct sub-sequences rather than the total
//! input length.
//!
//! What "shared" means is decided by the [`Strategy`] the tree is built with:
//! a positional prefix ([`Strategy::Ordered`]) or plain membership regardless
//! of position ([`Strategy::Unordered`]).
//!
//! ```
//! use seqradix::{render, RadixTree, Strategy};
//!
//! let tree = RadixTree::from_sequences(Strategy::Ordered, [[1, 2, 3], [1, 2, 4]]).unwrap();
//! assert_eq!(render::outline(&tree.to_underlying_tree()), "1 2\n  4\n  3\n");
//! ```

pub mod matching;
pub mod render;
mod tree;

pub use matching::Strategy;
pub use tree::{insert, Children, Cursor, Error, GenericTree, RadixTree};
