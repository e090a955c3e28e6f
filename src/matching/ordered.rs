//! Positional prefix matching

/// Longest prefix of `xs` that is also a prefix of `ys`
pub(super) fn intersect<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    let len = common_prefix_len(xs, ys);
    xs[..len].to_vec()
}

/// Drops as many leading elements of `xs` as `intersect` holds
pub(super) fn remainder<T: Clone>(xs: &[T], intersect: &[T]) -> Vec<T> {
    xs.get(intersect.len()..)
        .map(<[T]>::to_vec)
        .unwrap_or_default()
}

fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .zip(b.iter())
        .take_while(|(a, b)| a == b)
        .count()
}
