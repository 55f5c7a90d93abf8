//! Node of the profile search tree.

use crate::model::Profile;
use std::fmt;

/// Owning link to a child node; `None` if the child slot is vacant.
pub type Link = Option<Box<TreeNode>>;

// =#========================================================================#=
// TREE NODE
// =#========================================================================#=
/// A node of a [ProfileIndex](crate::model::ProfileIndex), holding the full
/// name of a person (`"Last, First"`) as key and their [Profile] as value.
///
/// Each node exclusively owns its children. Nodes can only be created and
/// restructured by the index, callers get read access.
pub struct TreeNode {
    pub(crate) key: String,
    pub(crate) profile: Profile,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl TreeNode {
    pub(crate) fn new(key: String, profile: Profile) -> Self {
        Self {
            key,
            profile,
            left: None,
            right: None,
        }
    }

    /// Returns the key (full name) of this node.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the profile stored at this node.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of children (0, 1 or 2).
    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}

impl fmt::Debug for TreeNode {
    /// Shows only which child slots are occupied, not the subtrees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("key", &self.key)
            .field("profile", &self.profile)
            .field("has_left", &self.left.is_some())
            .field("has_right", &self.right.is_some())
            .finish()
    }
}
