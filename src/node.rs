//! The `Node` a [`Tree`][crate::Tree] is made of. A `Node` owns its value and
//! both of its subtrees, so every node has exactly one owner: its parent or,
//! for the root, the `Tree` itself.
//!
//! `Node` enforces nothing. Keeping values ordered is the `Tree`'s job, so
//! rearranging nodes by hand can produce something that is no longer a BST.
//!
//! # Examples
//!
//! ```
//! use ordtree::Node;
//!
//! let mut node = Node::with_children(
//!     2,
//!     Some(Box::new(Node::new(1))),
//!     Some(Box::new(Node::new(3))),
//! );
//!
//! assert_eq!(node.value(), &2);
//! assert_eq!(node.left().map(Node::value), Some(&1));
//!
//! // Setters hand back whatever they replaced.
//! let old_right = node.set_right(None);
//! assert_eq!(old_right.map(|n| *n.value()), Some(3));
//! assert!(!node.is_leaf());
//! ```

use std::mem;

/// An owned, possibly empty, subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A value with a left and a right subtree.
// TODO stack based Debug
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self::with_children(value, None, None)
    }

    /// Construct a new `Node` holding `value` with the given subtrees.
    pub fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the value stored in this node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the stored value, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Mutable access to the root of the left subtree, if there is one.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Replaces the left subtree, returning the old one.
    pub fn set_left(&mut self, left: Link<T>) -> Link<T> {
        mem::replace(&mut self.left, left)
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Mutable access to the root of the right subtree, if there is one.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Replaces the right subtree, returning the old one.
    pub fn set_right(&mut self, right: Link<T>) -> Link<T> {
        mem::replace(&mut self.right, right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Splits the node into its value and subtrees.
    pub fn into_parts(self) -> (T, Link<T>, Link<T>) {
        (self.value, self.left, self.right)
    }
}

/// Clones the whole subtree without recursing, building each copy from the
/// copies of its children.
impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let clone_subtree = |link: &Link<T>| {
            fold_post_order(link.as_deref(), |node, left, right| {
                Box::new(Self::with_children(node.value.clone(), left, right))
            })
        };
        Self::with_children(
            self.value.clone(),
            clone_subtree(&self.left),
            clone_subtree(&self.right),
        )
    }
}

/// Visits every node below `root` after both of its subtrees, on an explicit
/// stack. `f` receives the node and the results for its left and right
/// subtrees (`None` for an empty one); the result for `root` is returned.
pub(crate) fn fold_post_order<'a, T, R, F>(root: Option<&'a Node<T>>, mut f: F) -> Option<R>
where
    F: FnMut(&'a Node<T>, Option<R>, Option<R>) -> R,
{
    enum Visit<'a, T> {
        Enter(&'a Node<T>),
        Exit(&'a Node<T>),
    }

    let mut visits: Vec<Visit<'a, T>> = root.map(Visit::Enter).into_iter().collect();
    let mut results: Vec<R> = Vec::new();
    while let Some(visit) = visits.pop() {
        match visit {
            Visit::Enter(node) => {
                visits.push(Visit::Exit(node));
                // Left is pushed last so its result lands below the right one.
                visits.extend(node.right().map(Visit::Enter));
                visits.extend(node.left().map(Visit::Enter));
            }
            Visit::Exit(node) => {
                let right = match node.right {
                    Some(_) => results.pop(),
                    None => None,
                };
                let left = match node.left {
                    Some(_) => results.pop(),
                    None => None,
                };
                results.push(f(node, left, right));
            }
        }
    }

    debug_assert!(results.len() <= 1);
    results.pop()
}

/// Drops everything reachable from `link` using an explicit stack.
///
/// The default drop glue for `Box<Node<T>>` recurses once per level, which
/// overflows the stack on a degenerate tree that is deep enough.
pub(crate) fn dismantle<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
