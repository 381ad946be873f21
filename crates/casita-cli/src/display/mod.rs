//! Text rendering for human-readable output: value formatting, fixed-width
//! tables, and the box-drawing tree used by the status summary.

pub mod table;
pub mod tree;
pub mod value;

pub use table::Table;
pub use tree::{Tree, TreeNode};
