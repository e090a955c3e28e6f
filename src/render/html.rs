use std::fmt::Display;

use crate::tree::GenericTree;

use super::label_text;

/// Renders the tree as nested `<ul>`/`<li>` markup, one list item per node.
/// Labels are HTML-escaped. A tree holding only the root renders as an empty
/// string.
pub fn html<T: Display>(tree: &GenericTree<T>) -> String {
    let items = tree
        .children()
        .iter()
        .map(|child| child.fold(&mut list_item))
        .collect();
    list(items)
}

fn list_item<T: Display>(label: &[T], children: Vec<String>) -> String {
    format!("<li>{}{}</li>", escape(&label_text(label)), list(children))
}

fn list(items: Vec<String>) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("<ul>{}</ul>", items.concat())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Strategy;
    use crate::tree::RadixTree;

    #[test]
    fn test_nested_lists() {
        let tree = RadixTree::from_sequences(Strategy::Ordered, [[1, 2, 3], [1, 2, 4]]).unwrap();
        assert_eq!(
            html(&tree.to_underlying_tree()),
            "<ul><li>1 2<ul><li>4</li><li>3</li></ul></li></ul>"
        );
    }

    #[test]
    fn test_siblings_share_one_list() {
        let tree = RadixTree::from_sequences(Strategy::Unordered, [[1, 2], [3, 4]]).unwrap();
        assert_eq!(
            html(&tree.to_underlying_tree()),
            "<ul><li>3 4</li><li>1 2</li></ul>"
        );
    }

    #[test]
    fn test_root_only_is_empty() {
        let tree = RadixTree::<i32>::empty(Strategy::Ordered);
        assert_eq!(html(&tree.to_underlying_tree()), "");
    }

    #[test]
    fn test_labels_escaped() {
        let tree = RadixTree::singleton(Strategy::Ordered, &["<b>", "&"]).unwrap();
        assert_eq!(
            html(&tree.to_underlying_tree()),
            "<ul><li>&lt;b&gt; &amp;</li></ul>"
        );
    }
}
