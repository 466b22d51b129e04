//! A Binary Search Tree over distinct values that is built balanced from a sequence and only
//! rebalanced when asked to. Inserting and deleting never move existing nodes around (beyond
//! splicing out a deleted node) so a tree can drift out of balance; [`Tree::is_balanced`] notices
//! and [`Tree::rebalance`] rebuilds it into minimal height.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::new([1, 5, 8, 11, 13]);
//!
//! // Duplicates are ignored.
//! tree.insert(6);
//! tree.insert(6);
//! tree.insert(2);
//! assert!(tree.includes(&6));
//! assert_eq!(tree.len(), 7);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! tree.delete_item(&5);
//! assert!(!tree.includes(&5));
//! assert!(tree.includes(&6));
//!
//! // Deleting something that isn't there does nothing.
//! tree.delete_item(&42);
//! assert_eq!(tree.len(), 6);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::node::{Link, Node};
use crate::util;

/// A Binary Search Tree of distinct values. See the [module documentation][self] for an overview.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    /// An empty tree.
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> Drop for Tree<T> {
    // The derived drop recurses once per level which a degenerate tree can turn into a stack
    // overflow. Unlink every node first so each `Box` is dropped without children.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> Tree<T> {
    /// Builds a balanced tree from `values`. The values are sorted and duplicates dropped before
    /// building, so any order (and any amount of repetition) is fine.
    ///
    /// Every subtree is rooted at the middle of its sorted range. When the range has an even
    /// length the lower of the two middle values is picked.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
    ///
    /// assert_eq!(tree.len(), 11);
    /// assert_eq!(tree.root(), Some(&8));
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let values = util::sorted_distinct(values.into_iter().collect());
        log::trace!("building tree from {} distinct values", values.len());
        Self {
            root: build_subtree(values),
        }
    }

    /// The value stored at the root, if there is one.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.value)
    }

    /// The number of values in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        let mut len = 0;
        self.pre_order_for_each(|_| len += 1);
        len
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns whether `value` is stored in the tree.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3]);
    ///
    /// assert!(tree.includes(&1));
    /// assert!(!tree.includes(&42));
    /// ```
    pub fn includes(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Inserts `value` as a new leaf. Inserting a value that is already in the tree does nothing.
    ///
    /// The tree is not rebalanced afterwards.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::default();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// assert!(tree.includes(&3));
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let link = locate(&mut self.root, &value);
        if link.is_none() {
            *link = Some(Node::new_boxed(value));
        }
    }

    /// Removes `value` from the tree. If the tree doesn't contain `value`, nothing happens.
    ///
    /// A node with one child is replaced by that child. A node with two children keeps its place
    /// but takes the value of its in-order successor (the smallest value in its right subtree)
    /// and the successor's node is removed instead.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new([1]);
    /// tree.delete_item(&1);
    ///
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete_item(&mut self, value: &T)
    where
        T: Ord,
    {
        let link = locate(&mut self.root, value);
        let Some(mut node) = link.take() else {
            return;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = take_min(&mut node.right) {
                    node.value = successor;
                }
                Some(node)
            }
        };
    }

    /// The number of edges between the root and the node holding `value`, or `None` if `value`
    /// isn't in the tree.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.depth(&4), Some(0));
    /// assert_eq!(tree.depth(&7), Some(2));
    /// assert_eq!(tree.depth(&8), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }

    /// The number of edges on the longest path from the node holding `value` down to a leaf, or
    /// `None` if `value` isn't in the tree. Leaves have a height of 0.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3, 4, 5, 6, 7]);
    ///
    /// assert_eq!(tree.height(&4), Some(2));
    /// assert_eq!(tree.height(&7), Some(0));
    /// assert_eq!(tree.height(&8), None);
    /// ```
    pub fn height(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(value).map(Node::height)
    }

    /// Returns whether, for every node, the heights of its two subtrees differ by at most one. An
    /// empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        // Post-order leaves the heights of a node's subtrees on top of this stack, right on top
        // of left. An empty subtree has a height of -1.
        let mut heights: Vec<isize> = Vec::new();
        let mut balanced = true;
        self.post_order_nodes(|node| {
            let right = match node.right {
                Some(_) => heights.pop().unwrap_or(-1),
                None => -1,
            };
            let left = match node.left {
                Some(_) => heights.pop().unwrap_or(-1),
                None => -1,
            };
            balanced &= left.abs_diff(right) <= 1;
            heights.push(left.max(right) + 1);
        });

        balanced
    }

    /// Rebuilds the tree into minimal height if it isn't balanced. Balanced (and empty) trees are
    /// left alone.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::default();
    /// for x in 1..=7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(&1), Some(6));
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.root(), Some(&4));
    /// assert_eq!(tree.height(&4), Some(2));
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        if self.is_balanced() {
            return;
        }
        let Some(root) = self.root.take() else {
            return;
        };

        // Drain the values level by level, unlinking every node as we go.
        let mut values = Vec::new();
        let mut queue = VecDeque::from([root]);
        while let Some(mut node) = queue.pop_front() {
            queue.extend(node.left.take());
            queue.extend(node.right.take());
            values.push(node.value);
        }

        log::debug!("rebalancing tree of {} values", values.len());
        self.root = build_subtree(util::sorted_distinct(values));
    }

    fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }
}

/// Builds a balanced subtree from sorted, distinct `values`, rooted at the lower median.
fn build_subtree<T>(mut values: Vec<T>) -> Link<T> {
    let mid = values.len().checked_sub(1)? / 2;
    let right = values.split_off(mid + 1);
    let value = values.pop()?;

    let mut node = Node::new_boxed(value);
    node.left = build_subtree(values);
    node.right = build_subtree(right);
    Some(node)
}

/// Follows the search path for `value` starting at `link`. Returns the link holding `value` or
/// the empty link where `value` would be inserted.
fn locate<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return link,
        };
        // `link` is moved into the tuple so that the `Equal` arm can hand it back while the
        // other arms reborrow through it.
        match (ordering, link) {
            (Ordering::Less, Some(node)) => link = &mut node.left,
            (Ordering::Greater, Some(node)) => link = &mut node.right,
            (_, found) => return found,
        }
    }
}

/// Removes the leftmost node of the subtree at `link`, splicing its right child into its place,
/// and returns its value.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let min = link.take()?;
    let Node { value, right, .. } = *min;
    *link = right;
    Some(value)
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.in_order_for_each(|value| {
            set.entry(value);
        });
        set.finish()
    }
}

/// Draws the tree sideways, one value per line, with the right subtree above each node and the
/// left subtree below it.
///
/// ```
/// use rebuild_bst::Tree;
///
/// let tree = Tree::new([1, 2, 3]);
///
/// assert_eq!(
///     tree.to_string(),
///     "│   ┌── 3\n\
///      └── 2\n    \
///      └── 1\n"
/// );
/// ```
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A node with the prefix of its line and whether it hangs off its parent's left.
        enum Frame<'a, V> {
            Expand(&'a Node<V>, String, bool),
            Emit(&'a Node<V>, String, bool),
        }

        let mut stack: Vec<Frame<'_, T>> = self
            .root
            .as_deref()
            .map(|root| Frame::Expand(root, String::new(), true))
            .into_iter()
            .collect();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Expand(node, prefix, is_left) => {
                    if let Some(left) = node.left() {
                        let extend = if is_left { "    " } else { "│   " };
                        stack.push(Frame::Expand(left, format!("{prefix}{extend}"), true));
                    }
                    let right_prefix = format!("{prefix}{}", if is_left { "│   " } else { "    " });
                    stack.push(Frame::Emit(node, prefix, is_left));
                    if let Some(right) = node.right() {
                        stack.push(Frame::Expand(right, right_prefix, false));
                    }
                }
                Frame::Emit(node, prefix, is_left) => {
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{prefix}{connector}{}", node.value)?;
                }
            }
        }

        Ok(())
    }
}
