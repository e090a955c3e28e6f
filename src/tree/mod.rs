mod cursor;
mod engine;
mod generic;
mod radix_tree;

pub use self::cursor::{Children, Cursor};
pub use self::engine::insert;
pub use self::generic::GenericTree;
pub use self::radix_tree::{Error, RadixTree};
