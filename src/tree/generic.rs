use serde::{Deserialize, Serialize};

/// Owned, node-labeled tree handed to consumers that traverse or render a
/// finished [`RadixTree`].
///
/// Children are kept in the order the radix tree stores them, newest first.
///
/// [`RadixTree`]: crate::RadixTree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct GenericTree<T> {
    label: Vec<T>,
    children: Vec<GenericTree<T>>,
}

impl<T> GenericTree<T> {
    pub fn new(label: Vec<T>, children: Vec<GenericTree<T>>) -> Self {
        Self { label, children }
    }

    pub fn label(&self) -> &[T] {
        &self.label
    }

    pub fn children(&self) -> &[GenericTree<T>] {
        &self.children
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<GenericTree<T>>) {
        (self.label, self.children)
    }

    /// Folds the tree bottom-up: `f` receives each node's label together
    /// with the already folded results of its children, in stored order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqradix::{RadixTree, Strategy};
    ///
    /// let tree = RadixTree::from_sequences(Strategy::Ordered, [[1, 2, 3], [1, 2, 4]])
    ///     .unwrap()
    ///     .to_underlying_tree();
    ///
    /// // number of elements stored across all labels
    /// let total = tree.fold(&mut |label: &[i32], children: Vec<usize>| {
    ///     label.len() + children.iter().sum::<usize>()
    /// });
    /// assert_eq!(total, 4);
    /// ```
    pub fn fold<R, F>(&self, f: &mut F) -> R
    where
        F: FnMut(&[T], Vec<R>) -> R,
    {
        let mut folded = Vec::with_capacity(self.children.len());
        for child in &self.children {
            folded.push(child.fold(f));
        }
        f(&self.label, folded)
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.fold(&mut |_, children: Vec<usize>| 1 + children.iter().sum::<usize>())
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.fold(&mut |_, children: Vec<usize>| {
            children.iter().max().map_or(0, |d| d + 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Strategy;
    use crate::tree::RadixTree;

    fn sample() -> GenericTree<i32> {
        RadixTree::from_sequences(
            Strategy::Ordered,
            [vec![1, 2, 3], vec![1, 2, 4], vec![1, 2, 4, 5], vec![7]],
        ).unwrap()
        .to_underlying_tree()
    }

    #[test]
    fn test_accessors_follow_stored_order() {
        let tree = sample();
        assert!(tree.label().is_empty());

        let labels: Vec<_> = tree.children().iter().map(|c| c.label().to_vec()).collect();
        assert_eq!(labels, vec![vec![7], vec![1, 2]]);

        let (label, children) = tree.into_parts();
        assert!(label.is_empty());
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_counts() {
        let tree = sample();
        // root, [7], [1, 2], [4], [5], [3]
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.depth(), 3);
        assert_eq!(GenericTree::<i32>::new(vec![], vec![]).depth(), 0);
    }

    #[test]
    fn test_fold_visits_children_before_parent() {
        let mut order = Vec::new();
        sample().fold(&mut |label: &[i32], _: Vec<()>| order.push(label.to_vec()));
        assert_eq!(
            order,
            vec![vec![7], vec![5], vec![4], vec![3], vec![1, 2], vec![]]
        );
    }

    #[test]
    fn test_serializes_for_consumers() {
        let tree = sample();
        let bytes = bincode::serialize(&tree).unwrap();
        let decoded: GenericTree<i32> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, tree);
    }
}
