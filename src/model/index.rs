//! Binary search tree over DNA profiles, keyed by full name.
//!
//! Provides [ProfileIndex], which owns the tree together with the two
//! reference sequences profiles are classified against, as well as the
//! iterators [InOrderIter] and [LevelOrderIter].
//!
//! The tree is deliberately unbalanced: its shape is determined by the
//! insertion order alone. All traversals use explicit stacks or queues, so
//! degenerate trees (e.g. from sorted input) do not exhaust the call stack.

use crate::model::Profile;
use crate::model::tree_node::{Link, TreeNode};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

// =#========================================================================#=
// INDEX ERROR
// =#========================================================================#=
/// Errors of checked operations on a [ProfileIndex].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Keys must contain at least one character.
    #[error("key must not be empty")]
    EmptyKey,
    /// A node with this key already exists.
    #[error("key '{0}' is already present")]
    DuplicateKey(String),
}

// =#========================================================================#=
// PROFILE INDEX
// =#========================================================================#=
/// Unbalanced binary search tree mapping full names (`"Last, First"`) to
/// [Profile]s, together with the two reference sequences used by
/// [`classify()`](ProfileIndex::classify).
///
/// # Ordering
/// Keys are compared with the ordering of [str] (byte-wise, case-sensitive).
/// Strictly smaller keys go left, all others right. Keys are assumed to be
/// distinct: [`insert()`](ProfileIndex::insert) places a duplicate into the
/// right subtree of its twin, whereas
/// [`try_insert()`](ProfileIndex::try_insert) rejects it.
///
/// # Example
/// ```
/// use strdb::model::{Marker, Profile, ProfileIndex};
///
/// let mut index = ProfileIndex::with_sequences("AGATAGATAGAT", "TATC");
/// index.insert("Doe, Jane", Profile::new(vec![Marker::new("AGAT", 3)]));
/// index.insert("Roe, Rick", Profile::new(vec![Marker::new("TATC", 2)]));
///
/// index.classify();
/// assert_eq!(index.count_matching(true), 1);
/// assert_eq!(index.collect_by_flag(false), vec!["Roe, Rick"]);
///
/// assert_eq!(index.prune_unmarked(), 1);
/// assert!(index.contains("Doe, Jane"));
/// assert!(!index.contains("Roe, Rick"));
/// ```
#[derive(Default)]
pub struct ProfileIndex {
    /// Root of the tree, `None` if empty
    root: Link,

    /// First reference sequence
    first_sequence: String,

    /// Second reference sequence
    second_sequence: String,

    /// Number of nodes in the tree
    len: usize,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl ProfileIndex {
    /// Creates an empty index with empty reference sequences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with the given reference sequences.
    ///
    /// # Arguments
    /// * `first` - First reference sequence
    /// * `second` - Second reference sequence
    pub fn with_sequences(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            root: None,
            first_sequence: first.into(),
            second_sequence: second.into(),
            len: 0,
        }
    }

    /// Returns the root node, or `None` if the index is empty.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Returns the first reference sequence.
    pub fn first_sequence(&self) -> &str {
        &self.first_sequence
    }

    /// Replaces the first reference sequence.
    pub fn set_first_sequence(&mut self, sequence: impl Into<String>) {
        self.first_sequence = sequence.into();
    }

    /// Returns the second reference sequence.
    pub fn second_sequence(&self) -> &str {
        &self.second_sequence
    }

    /// Replaces the second reference sequence.
    pub fn set_second_sequence(&mut self, sequence: impl Into<String>) {
        self.second_sequence = sequence.into();
    }

    /// Returns the number of profiles in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree, that is, the number of nodes on a
    /// longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&TreeNode> = self.root().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| [node.left(), node.right()])
                .flatten()
                .collect();
        }

        height
    }

    /// Returns whether a profile is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns the profile stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Profile> {
        self.find(key).map(TreeNode::profile)
    }

    /// Returns a mutable reference to the profile stored under `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Profile> {
        occupied_slot(&mut self.root, key)
            .as_deref_mut()
            .map(|node| &mut node.profile)
    }

    /// Returns an iterator over the nodes in key order (in-order traversal).
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self.root())
    }

    /// Returns an iterator over the nodes level by level, left to right.
    pub fn level_order_iter(&self) -> LevelOrderIter<'_> {
        LevelOrderIter::new(self.root())
    }

    /// Searches the node with the given key.
    fn find(&self, key: &str) -> Option<&TreeNode> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }
}

// ============================================================================
// Insertion & Deletion (pub)
// ============================================================================
impl ProfileIndex {
    /// Inserts a new node with the given key and profile.
    ///
    /// Walks down from the root, going left if `key` is smaller than the key
    /// of the current node and right otherwise, and attaches the new node at
    /// the first vacant slot. An empty index gets the new node as root.
    ///
    /// Keys are assumed to be distinct. A duplicate key ends up in the right
    /// subtree of the existing node; use
    /// [`try_insert()`](ProfileIndex::try_insert) to reject duplicates.
    ///
    /// # Arguments
    /// * `key` - Full name of the person, e.g. `"Doe, Jane"`
    /// * `profile` - Profile of the person
    pub fn insert(&mut self, key: impl Into<String>, profile: Profile) {
        let key = key.into();
        let slot = vacant_slot(&mut self.root, &key);
        *slot = Some(Box::new(TreeNode::new(key, profile)));
        self.len += 1;
    }

    /// Inserts a new node like [`insert()`](ProfileIndex::insert), but
    /// rejects empty and already present keys.
    ///
    /// # Errors
    /// * [IndexError::EmptyKey] - if `key` is empty
    /// * [IndexError::DuplicateKey] - if a node with `key` exists
    ///
    /// The index is left unchanged on error.
    pub fn try_insert(&mut self, key: impl Into<String>, profile: Profile) -> Result<(), IndexError> {
        let key = key.into();
        if key.is_empty() {
            return Err(IndexError::EmptyKey);
        }
        if self.contains(&key) {
            return Err(IndexError::DuplicateKey(key));
        }

        self.insert(key, profile);
        Ok(())
    }

    /// Removes the node with the given key, if present.
    ///
    /// Depending on the number of children of the found node:
    /// * none - it is detached from its parent (or the root is cleared),
    /// * one - its child takes its place,
    /// * two - it takes over key and profile of its in-order successor (the
    ///   leftmost node of its right subtree), which is then detached in turn.
    ///   The successor has no left child, so it falls under the cases above.
    ///
    /// # Returns
    /// `true` if a node was removed, `false` if no node has this key
    /// (in which case the index is unchanged).
    pub fn delete(&mut self, key: &str) -> bool {
        let slot = occupied_slot(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            trace!(key, "no profile to delete");
            return false;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = detach_leftmost(&mut node.right) {
                    let TreeNode {
                        key: successor_key,
                        profile: successor_profile,
                        ..
                    } = *successor;
                    node.key = successor_key;
                    node.profile = successor_profile;
                }
                Some(node)
            }
        };

        self.len -= 1;
        trace!(key, remaining = self.len, "deleted profile");
        true
    }
}

// ============================================================================
// Classification & Queries (pub)
// ============================================================================
impl ProfileIndex {
    /// Returns the number of profiles whose interest flag equals `of_interest`.
    pub fn count_matching(&self, of_interest: bool) -> usize {
        self.iter()
            .filter(|node| node.profile().is_of_interest() == of_interest)
            .count()
    }

    /// Classifies all profiles against the stored reference sequences.
    ///
    /// A marker matches if its occurrences in both sequences together equal
    /// its observed count. A profile is flagged as of interest if at least
    /// half (rounded up) of its markers match. Flags are never reset.
    pub fn classify(&mut self) {
        let Self {
            root,
            first_sequence,
            second_sequence,
            ..
        } = self;
        let flagged = classify_all(root, first_sequence, second_sequence);
        debug!(flagged, total = self.len, "classified profiles");
    }

    /// Classifies all profiles like [`classify()`](ProfileIndex::classify),
    /// but against the given sequences instead of the stored ones.
    ///
    /// # Arguments
    /// * `first` - First reference sequence
    /// * `second` - Second reference sequence
    pub fn classify_with(&mut self, first: &str, second: &str) {
        let flagged = classify_all(&mut self.root, first, second);
        debug!(flagged, total = self.len, "classified profiles");
    }

    /// Collects the keys of all profiles whose interest flag equals
    /// `of_interest`, in level order: root first, then all nodes of depth 1
    /// from left to right, and so on.
    ///
    /// The number of keys equals [`count_matching(of_interest)`](ProfileIndex::count_matching).
    pub fn collect_by_flag(&self, of_interest: bool) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.count_matching(of_interest));
        keys.extend(
            self.level_order_iter()
                .filter(|node| node.profile().is_of_interest() == of_interest)
                .map(|node| node.key().to_string()),
        );

        keys
    }

    /// Removes all profiles not flagged as of interest.
    ///
    /// The keys to remove are collected with
    /// [`collect_by_flag(false)`](ProfileIndex::collect_by_flag) before the
    /// first deletion; each is then removed via
    /// [`delete()`](ProfileIndex::delete).
    ///
    /// # Returns
    /// The number of removed profiles.
    pub fn prune_unmarked(&mut self) -> usize {
        let unmarked = self.collect_by_flag(false);

        let mut removed = 0;
        for key in &unmarked {
            if self.delete(key) {
                removed += 1;
            }
        }

        debug!(removed, remaining = self.len, "pruned unmarked profiles");
        removed
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl ProfileIndex {
    /// Renders the tree as text, one node per line. Flagged profiles are
    /// marked with `[*]`, vacant child slots next to an occupied one with `-`.
    ///
    /// # Example Output
    /// ```text
    /// Profile index with 4 profiles:
    /// "M" [ ]
    ///   ├─ L: "F" [*]
    ///   │  ├─ L: "B" [ ]
    ///   │  └─ R: -
    ///   └─ R: "T" [ ]
    /// ```
    pub fn render_tree(&self) -> String {
        const LAST: bool = true;

        let mut out = format!("Profile index with {} profiles:\n", self.len);
        let Some(root) = self.root() else {
            out.push_str("(empty)\n");
            return out;
        };

        // (node, prefix, is_last, side)
        let mut stack = vec![(Some(root), String::new(), LAST, "")];
        while let Some((node, prefix, is_last, side)) = stack.pop() {
            let connector = if prefix.is_empty() {
                ""
            } else if is_last {
                "└─ "
            } else {
                "├─ "
            };

            let Some(node) = node else {
                out.push_str(&format!("{prefix}{connector}{side}-\n"));
                continue;
            };

            let flag = if node.profile().is_of_interest() { '*' } else { ' ' };
            out.push_str(&format!("{prefix}{connector}{side}\"{}\" [{flag}]\n", node.key()));

            if node.is_leaf() {
                continue;
            }

            let child_prefix = if prefix.is_empty() {
                "  ".to_string()
            } else {
                format!("{}{}  ", prefix, if is_last { " " } else { "│" })
            };
            // Right goes on the stack first to be printed last
            stack.push((node.right(), child_prefix.clone(), LAST, "R: "));
            stack.push((node.left(), child_prefix, !LAST, "L: "));
        }

        out
    }
}

impl<K: Into<String>> FromIterator<(K, Profile)> for ProfileIndex {
    fn from_iter<I: IntoIterator<Item = (K, Profile)>>(iter: I) -> Self {
        let mut index = ProfileIndex::new();
        index.extend(iter);
        index
    }
}

impl<K: Into<String>> Extend<(K, Profile)> for ProfileIndex {
    fn extend<I: IntoIterator<Item = (K, Profile)>>(&mut self, iter: I) {
        for (key, profile) in iter {
            self.insert(key, profile);
        }
    }
}

impl fmt::Debug for ProfileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keys in order instead of the nested nodes, whose depth is unbounded
        f.debug_struct("ProfileIndex")
            .field("len", &self.len)
            .field("first_sequence", &self.first_sequence)
            .field("second_sequence", &self.second_sequence)
            .field("keys", &KeysDebug(self))
            .finish()
    }
}

struct KeysDebug<'a>(&'a ProfileIndex);

impl fmt::Debug for KeysDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(TreeNode::key)).finish()
    }
}

impl Drop for ProfileIndex {
    fn drop(&mut self) {
        // Unlink iteratively; recursive drop of a degenerate tree overflows
        let mut stack: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// =#========================================================================#=
// SLOT HELPERS
// =#========================================================================#=
/// Returns the vacant slot where a node with `key` is to be attached.
fn vacant_slot<'a>(mut slot: &'a mut Link, key: &str) -> &'a mut Link {
    while let Some(node) = slot {
        slot = if key < node.key.as_str() {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    slot
}

/// Returns the slot holding the node with `key`, or the vacant slot where
/// the search for it ended.
fn occupied_slot<'a>(mut slot: &'a mut Link, key: &str) -> &'a mut Link {
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => key.cmp(node.key()),
            None => return slot,
        };
        if ordering == Ordering::Equal {
            return slot;
        }

        let Some(node) = slot else {
            return slot;
        };
        slot = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Detaches the leftmost node of the subtree in `slot`, putting its right
/// child (if any) in its place.
fn detach_leftmost(mut slot: &mut Link) -> Option<Box<TreeNode>> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = slot else {
            return None;
        };
        slot = &mut node.left;
    }

    let mut leftmost = slot.take()?;
    *slot = leftmost.right.take();
    Some(leftmost)
}

/// Classifies every profile in the subtree of `root`.
///
/// # Returns
/// The number of profiles of interest after classification.
fn classify_all(root: &mut Link, first: &str, second: &str) -> usize {
    let mut flagged = 0;
    let mut stack: Vec<&mut TreeNode> = root.as_deref_mut().into_iter().collect();

    while let Some(node) = stack.pop() {
        let TreeNode {
            profile,
            left,
            right,
            ..
        } = node;

        if profile.classify(first, second) {
            flagged += 1;
        }

        stack.extend(right.as_deref_mut());
        stack.extend(left.as_deref_mut());
    }

    flagged
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for in-order traversal (keys in ascending order).
///
/// Uses a stack of the pending left spine instead of recursion.
pub struct InOrderIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> InOrderIter<'a> {
    fn new(root: Option<&'a TreeNode>) -> Self {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Iterator for level-order traversal (breadth-first, left before right).
pub struct LevelOrderIter<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> LevelOrderIter<'a> {
    fn new(root: Option<&'a TreeNode>) -> Self {
        LevelOrderIter {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a ProfileIndex {
    type Item = &'a TreeNode;
    type IntoIter = InOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
