//! Insertion engine.
//!
//! The walk starts at the root and looks at one node at a time. At every
//! node the incoming sequence (or what is left of it) is matched against the
//! node's label with the tree's [`Strategy`], and one of four things happens:
//!
//! * nothing is shared: move on to the next sibling, or add the sequence as
//!   a new child of the parent once the siblings are exhausted
//! * the label is fully consumed: continue into the children with whatever
//!   is left, or attach it to a leaf
//! * the label is partially consumed: split the node into the shared part
//!   and the rest, and hang the unmatched remainder of the sequence off the
//!   shared part
//! * everything is consumed: the sequence is already present
//!
//! Each step either moves to a sibling in a finite list, descends with a
//! strictly shorter sequence, or stops, so the walk always terminates.

use log::{debug, trace};

use crate::matching::Strategy;

use super::cursor::CursorMut;
use super::radix_tree::{Error, RadixTree};

/// Inserts `sequence` into `tree` with `strategy` and hands the updated tree
/// back.
///
/// `strategy` must be the one the tree was built with; trees never mix
/// strategies. On error the tree is dropped untouched, clone it first if the
/// old version is still needed.
pub fn insert<T>(
    strategy: Strategy,
    sequence: &[T],
    tree: RadixTree<T>,
) -> Result<RadixTree<T>, Error>
where
    T: PartialEq + Clone,
{
    if strategy != tree.strategy() {
        return Err(Error::StrategyMismatch {
            expected: tree.strategy(),
            found: strategy,
        });
    }
    tree.with(sequence)
}

/// Places a non-empty `sequence` starting from a cursor at the root
pub(super) fn place<T>(mut cursor: CursorMut<'_, T>, strategy: Strategy, sequence: &[T])
where
    T: PartialEq + Clone,
{
    if !cursor.to_first_child() {
        debug!("tree is empty, adding sequence of {} as first child", sequence.len());
        cursor.prepend_child(sequence.to_vec());
        return;
    }

    let mut xs = sequence.to_vec();
    loop {
        let ys = cursor.label();
        let shared = strategy.intersect(&xs, ys);
        trace!(
            "node {}: {} of {} incoming elements shared with label of {}",
            cursor.focus(),
            shared.len(),
            xs.len(),
            ys.len(),
        );

        if shared.is_empty() {
            if cursor.to_next_sibling() {
                continue;
            }

            // last sibling, the sequence becomes a new child of the parent
            cursor.to_parent();
            let idx = cursor.prepend_child(xs);
            debug!("added node {} under node {}", idx, cursor.focus());
            return;
        }

        let right = strategy.right_remainder(ys, &shared);
        let left = strategy.remainder(&xs, &shared);

        if right.is_empty() {
            // label fully consumed
            if left.is_empty() {
                debug!("sequence already present, ends at node {}", cursor.focus());
                return;
            }

            if !cursor.to_first_child() {
                let idx = cursor.prepend_child(left);
                debug!("extended leaf {} with node {}", cursor.focus(), idx);
                return;
            }

            xs = left;
            continue;
        }

        debug!(
            "splitting node {} into {} shared and {} remaining elements",
            cursor.focus(),
            shared.len(),
            right.len(),
        );
        cursor.split(shared, right);
        if !left.is_empty() {
            cursor.prepend_child(left);
        }
        return;
    }
}
