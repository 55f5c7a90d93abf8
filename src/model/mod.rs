//! Data model of the profile index.
//!
//! # Index representation
//! Profiles are kept in a [ProfileIndex], an unbalanced binary search tree
//! of [TreeNode]s keyed by full name. Each node exclusively owns its two
//! children through a [Link] (`Option<Box<TreeNode>>`).
//!
//! | Type | Role |
//! |------|------|
//! | [Marker] | STR motif with its observed count |
//! | [Profile] | Markers of one person plus the interest flag |
//! | [TreeNode] | Key (`"Last, First"`) and [Profile] |
//! | [ProfileIndex] | Tree plus the two reference sequences |
//!
//! # Classification
//! [`ProfileIndex::classify()`] flags profiles whose markers sufficiently
//! match the reference sequences, see [crate::matching] for the rule.
//! Afterwards [`ProfileIndex::prune_unmarked()`] removes everyone else.

pub mod index;
pub mod marker;
pub mod profile;
pub mod tree_node;

pub use index::{InOrderIter, IndexError, LevelOrderIter, ProfileIndex};
pub use marker::Marker;
pub use profile::Profile;
pub use tree_node::{Link, TreeNode};
