//! Whole-tree traversals. Every traversal here keeps its own stack (or queue) instead of
//! recursing because the tree doesn't balance itself and can degrade into a long list.

use std::collections::VecDeque;

use crate::node::Node;
use crate::{Error, Tree};

/// What to do with a node popped off the post-order stack.
enum Step {
    /// Its children still need to be visited first.
    Descend,
    /// Both subtrees are done so the node itself is next.
    Visit,
}

impl<T> Tree<T> {
    /// Calls `visit` on every value breadth first: the root, then all values one edge away from
    /// the root (left to right), and so on.
    ///
    /// Unlike the other traversals the visitor is optional here so that forgetting it is a
    /// reported error rather than a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVisitor`] without visiting anything if `visit` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Error, Tree};
    ///
    /// let tree = Tree::new([1, 2, 3, 4, 5, 6, 7]);
    ///
    /// let mut values = Vec::new();
    /// tree.level_order_for_each(Some(|v: &i32| values.push(*v))).unwrap();
    /// assert_eq!(values, vec![4, 2, 6, 1, 3, 5, 7]);
    ///
    /// assert_eq!(
    ///     tree.level_order_for_each(None::<fn(&i32)>),
    ///     Err(Error::MissingVisitor)
    /// );
    /// ```
    pub fn level_order_for_each<'a, F>(&'a self, visit: Option<F>) -> Result<(), Error>
    where
        F: FnMut(&'a T),
    {
        let mut visit = visit.ok_or(Error::MissingVisitor)?;
        self.level_order_nodes(|node| visit(&node.value));
        Ok(())
    }

    /// Calls `visit` on every value, visiting a node before its left subtree and its left subtree
    /// before its right subtree.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3, 4, 5, 6, 7]);
    ///
    /// let mut values = Vec::new();
    /// tree.pre_order_for_each(|v| values.push(*v));
    /// assert_eq!(values, vec![4, 2, 1, 3, 6, 5, 7]);
    /// ```
    pub fn pre_order_for_each<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(&node.value);
            // Right goes on first so left comes off first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Calls `visit` on every value in ascending order.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([3, 1, 2, 3]);
    ///
    /// let mut values = Vec::new();
    /// tree.in_order_for_each(|v| values.push(*v));
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn in_order_for_each<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                return;
            };
            visit(&node.value);
            current = node.right();
        }
    }

    /// Calls `visit` on every value, visiting a node's left subtree, then its right subtree, then
    /// the node itself.
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3, 4, 5, 6, 7]);
    ///
    /// let mut values = Vec::new();
    /// tree.post_order_for_each(|v| values.push(*v));
    /// assert_eq!(values, vec![1, 3, 2, 5, 7, 6, 4]);
    /// ```
    pub fn post_order_for_each<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        self.post_order_nodes(|node| visit(&node.value));
    }

    pub(crate) fn level_order_nodes<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Post-order walk over the nodes themselves. Callers that fold subtree results (e.g. heights)
    /// can rely on a node's left subtree finishing before its right subtree, which finishes right
    /// before the node.
    pub(crate) fn post_order_nodes<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        let mut stack: Vec<(&Node<T>, Step)> = self
            .root
            .as_deref()
            .map(|root| (root, Step::Descend))
            .into_iter()
            .collect();

        while let Some((node, step)) = stack.pop() {
            match step {
                Step::Descend => {
                    stack.push((node, Step::Visit));
                    stack.extend(node.right().map(|right| (right, Step::Descend)));
                    stack.extend(node.left().map(|left| (left, Step::Descend)));
                }
                Step::Visit => visit(node),
            }
        }
    }
}
