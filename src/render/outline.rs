use std::fmt::Display;

use crate::tree::GenericTree;

use super::label_text;

/// Indentation added per level
const INDENT: &str = "  ";

/// Renders the tree as an indented outline, one node per line, children
/// indented under their parent. Every line ends with a newline.
pub fn outline<T: Display>(tree: &GenericTree<T>) -> String {
    tree.children()
        .iter()
        .flat_map(|child| child.fold(&mut lines))
        .map(|line| line + "\n")
        .collect()
}

fn lines<T: Display>(label: &[T], children: Vec<Vec<String>>) -> Vec<String> {
    let mut out = vec![label_text(label)];
    out.extend(
        children
            .into_iter()
            .flatten()
            .map(|line| format!("{}{}", INDENT, line)),
    );
    out
}
