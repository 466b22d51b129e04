use std::collections::VecDeque;

/// An owning link to a subtree. `None` marks the empty spot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one value and owns both of its children. Every `Node` is owned by exactly
/// one link (its parent's `left`/`right` or the tree's root), so moving a subtree always means
/// `take`-ing it out of its old link first.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    ///
    /// This walks the subtree level by level instead of recursing so that degenerate (list
    /// shaped) subtrees can't overflow the stack.
    pub(crate) fn height(&self) -> usize {
        let mut level = VecDeque::from([self]);
        let mut height = 0;
        loop {
            for _ in 0..level.len() {
                if let Some(node) = level.pop_front() {
                    level.extend(node.left());
                    level.extend(node.right());
                }
            }
            if level.is_empty() {
                return height;
            }
            height += 1;
        }
    }
}
