//! Membership matching, regardless of position

/// Every element of `xs` that also appears somewhere in `ys`, in `xs` order.
///
/// Each occurrence in `ys` can be matched once, so the result never holds
/// more copies of an element than `ys` does and is always a sub-multiset of
/// both inputs.
pub(super) fn intersect<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    let mut unused: Vec<&T> = ys.iter().collect();
    xs.iter()
        .filter(|&x| match unused.iter().position(|&y| y == x) {
            Some(pos) => {
                unused.swap_remove(pos);
                true
            },
            None => false,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Strategy;

    #[test]
    fn test_intersect_keeps_incoming_order() {
        assert_eq!(intersect(&[2, 1, 4], &[1, 2, 3]), vec![2, 1]);
        assert_eq!(intersect(&[5, 4, 2, 1], &[1, 2, 3]), vec![2, 1]);
    }

    #[test]
    fn test_intersect_matches_each_label_element_once() {
        assert_eq!(intersect(&[1, 1, 2], &[1]), vec![1]);
        assert_eq!(intersect(&[1, 1], &[1, 2]), vec![1]);
        assert_eq!(intersect(&[1, 2, 1], &[1, 1, 3]), vec![1, 1]);
        assert_eq!(intersect(&[7, 7], &[1]), Vec::<i32>::new());
    }

    #[test]
    fn test_label_never_fully_consumed_by_extra_copies() {
        // [1] against [1, 1, 3]: one 1 is shared, the other stays pending
        let strategy = Strategy::Unordered;
        let shared = strategy.intersect(&[1, 1, 3], &[1]);
        assert_eq!(shared, vec![1]);
        assert_eq!(strategy.right_remainder(&[1], &shared), Vec::<i32>::new());
        assert_eq!(strategy.remainder(&[1, 1, 3], &shared), vec![1, 3]);
    }

    #[test]
    fn test_remainder_removes_once_per_match() {
        let strategy = Strategy::Unordered;
        assert_eq!(strategy.remainder(&[2, 1, 4], &[2, 1]), vec![4]);
        assert_eq!(strategy.remainder(&[1, 2, 1, 4], &[1]), vec![2, 1, 4]);
        assert_eq!(strategy.remainder(&[1, 2, 1, 4], &[1, 1]), vec![2, 4]);
    }

    #[test]
    fn test_right_remainder_of_label() {
        let strategy = Strategy::Unordered;
        assert_eq!(strategy.right_remainder(&[1, 2, 3], &[2, 1]), vec![3]);
        assert_eq!(strategy.right_remainder(&[1, 2], &[2, 1]), Vec::<i32>::new());
    }
}
