//! # SVM Lookup Tree
//!
//! An in-memory ordered key→value index: a B-tree variant whose nodes
//! hold up to `L` sorted leaves and `L + 1` children, with separator keys
//! stored in the parents themselves. Inserts reject duplicates, split
//! full nodes by promoting a middle "anchor" leaf into the parent, and
//! grow the tree in height only by synthesizing a new root.
//!
//! The tree is a single-owner data structure: no locks, no interior
//! mutability, no thread safety of its own. Nodes live in an arena and
//! refer to each other by index, so parent back-references need neither
//! `Rc` nor raw pointers.
//!
//! ## Example
//!
//! ```rust
//! use svm_index::LookupTree;
//!
//! let mut tree: LookupTree<u32, &str, 4> = LookupTree::new();
//! assert!(tree.insert(2, "two"));
//! assert!(tree.insert(1, "one"));
//! assert!(!tree.insert(2, "again")); // duplicate, tree unchanged
//!
//! let hit = tree.get(&1);
//! assert!(hit.found);
//! assert_eq!(hit.value, Some(&"one"));
//! ```

mod leaf;
mod node;
mod tree;

pub use leaf::Leaf;
pub use tree::{LookupResult, LookupTree};
