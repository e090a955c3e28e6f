//! Presentation of a finished tree.
//!
//! Both renderers are built on [`GenericTree::fold`]: each node is rendered
//! from its label and its already rendered children. The root's empty label
//! is never printed.
//!
//! Labels are printed as their elements separated by single spaces.

mod html;
mod outline;

use std::fmt::Display;

pub use self::html::html;
pub use self::outline::outline;

/// Elements of a label joined by spaces
fn label_text<T: Display>(label: &[T]) -> String {
    label
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
