//! Matching strategies that decide what "sharing a prefix" means when two
//! sequences meet in the tree.
//!
//! There are exactly two strategies, [`Strategy::Ordered`] and
//! [`Strategy::Unordered`]. A tree is bound to one of them when it is created
//! and every insertion into that tree goes through the same strategy.
//!
//! All operations here are total: empty inputs are valid and produce empty
//! outputs.

mod ordered;
mod unordered;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How an incoming sequence is matched against an existing node label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Positional matching: the shared part is the common prefix
    #[default]
    Ordered,

    /// Membership matching: the shared part is every element of the incoming
    /// sequence that appears anywhere in the label, kept in incoming order,
    /// with each label element matched at most once
    Unordered,
}

/// Returned when a strategy name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl Strategy {
    /// Part of `xs` shared with the label `ys`
    pub fn intersect<T: PartialEq + Clone>(&self, xs: &[T], ys: &[T]) -> Vec<T> {
        match self {
            Strategy::Ordered => ordered::intersect(xs, ys),
            Strategy::Unordered => unordered::intersect(xs, ys),
        }
    }

    /// What is left of `xs` once `intersect` has been matched
    pub fn remainder<T: PartialEq + Clone>(&self, xs: &[T], intersect: &[T]) -> Vec<T> {
        match self {
            Strategy::Ordered => ordered::remainder(xs, intersect),
            Strategy::Unordered => remove_each(xs, intersect),
        }
    }

    /// What is left of an existing label `ys` once `intersect` has been
    /// extracted from it
    pub fn right_remainder<T: PartialEq + Clone>(&self, ys: &[T], intersect: &[T]) -> Vec<T> {
        match self {
            // the intersect is always a prefix of ys here, so removing one
            // occurrence per element is the same as dropping the prefix
            Strategy::Ordered => ordered::remainder(ys, intersect),
            Strategy::Unordered => remove_each(ys, intersect),
        }
    }

    /// Name used in configuration and when displaying the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Ordered => "ordered",
            Strategy::Unordered => "unordered",
        }
    }
}

/// Removes from `xs` one occurrence for every element of `removed`. Elements
/// of `removed` that no longer occur in what is left are ignored.
pub(crate) fn remove_each<T: PartialEq + Clone>(xs: &[T], removed: &[T]) -> Vec<T> {
    let mut left = xs.to_vec();
    for r in removed {
        if let Some(pos) = left.iter().position(|x| x == r) {
            left.remove(pos);
        }
    }
    left
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ordered" => Ok(Strategy::Ordered),
            "unordered" => Ok(Strategy::Unordered),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown matching strategy: {:?}", self.0)
    }
}

impl std::error::Error for ParseStrategyError {}
