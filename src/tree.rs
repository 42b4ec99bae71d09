//! An ordered BST with caller-driven rebalancing.
//!
//! Inserting never restructures existing nodes, so the shape of the tree
//! depends on insertion order. [`Tree::is_balanced`] reports whether every
//! node's subtrees differ in height by at most one and [`Tree::rebalance`]
//! rebuilds a minimal-height tree from the same values.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(10);
//! tree.insert(20);
//! tree.insert(5);
//! tree.insert(25);
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//! assert!(tree.contains(&25));
//! assert!(!tree.contains(&15));
//!
//! // Building from a vector sorts it and inserts medians first.
//! let tree = Tree::from(vec![1, 0, 4, 76, 58, 12, 9, 133]);
//! assert!(tree.is_balanced());
//! assert_eq!(&*tree.to_sorted_array(), &[0, 1, 4, 9, 12, 58, 76, 133]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::iter::{IntoIter, Iter};
use crate::node::{self, Link, Node};

/// A Binary Search Tree holding values of an ordered type `T`.
///
/// Duplicates are stored as separate nodes and always go into the left
/// subtree of an equal value.
pub struct Tree<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`.
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            size: self.size,
        }
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("root", &self.root)
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Builds a tree from an array of values. The values are sorted and then
    /// inserted median first, so for distinct values the result is balanced.
    /// `None` gives an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree = Tree::from_array(Some(vec![4, 2, 6, 1, 3, 5, 7]));
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(4));
    ///
    /// let empty = Tree::<i32>::from_array(None);
    /// assert!(empty.is_empty());
    /// ```
    pub fn from_array(data: Option<Vec<T>>) -> Self
    where
        T: Ord,
    {
        let mut tree = Self::new();
        if let Some(mut data) = data {
            log::debug!("Building tree from {} values", data.len());
            data.sort();
            tree.insert_sorted(data);
            log::trace!("Built tree of height {}", tree.height());
        }
        tree
    }

    /// Builds a tree by inserting the values of a list one at a time, in
    /// list order. Nothing is sorted, so the shape follows the list.
    /// `None` gives an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree = Tree::from_list(Some(vec![1, 2, 3]));
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.height(), 3);
    ///
    /// let empty = Tree::<i32>::from_list(None::<Vec<i32>>);
    /// assert!(empty.is_empty());
    /// ```
    pub fn from_list<I>(data: Option<I>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        if let Some(data) = data {
            tree.extend(data);
        }
        tree
    }

    /// Returns the number of values in the tree. Duplicates count once per
    /// insert.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree is not empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts `value`. Values less than or equal to a node go to its left,
    /// greater values go to its right. Equal values are not merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.to_sorted_list(), vec![1, 1]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        insert(&mut self.root, value);
        self.size += 1;
    }

    /// Returns `true` if some value in the tree compares equal to `target`.
    /// This costs `O(height)`, which is `O(N)` for a degenerate tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, target: &T) -> bool
    where
        T: Ord,
    {
        contains(self.root(), target)
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty
    /// tree has a height of 0. Computed from scratch on every call.
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Returns `true` if, at every node, the heights of the left and right
    /// subtrees differ by at most one. Every node's height is computed once,
    /// bottom up, so this is `O(N)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let balanced: Tree<_> = [10, 20, 5, 25].into_iter().collect();
    /// assert!(balanced.is_balanced());
    ///
    /// let stick: Tree<_> = [10, 20, 30, 40].into_iter().collect();
    /// assert!(!stick.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        is_balanced(self.root())
    }

    /// Rebuilds the tree with minimal height from the same values.
    ///
    /// The values are moved out in order, the old structure is dropped, and
    /// the median of every range is inserted before the two halves around
    /// it. For distinct values the result has height `⌈lg(N + 1)⌉` and
    /// passes [`Tree::is_balanced`]. Equal values always go left, so a run
    /// of duplicates can still leave a lopsided subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<_> = (0..15).collect();
    /// assert_eq!(tree.height(), 15);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 4);
    /// assert_eq!(tree.len(), 15);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        log::debug!("Rebalancing tree of {} values", self.size);
        let sorted: Vec<T> = mem::take(self).into_iter().collect();
        self.insert_sorted(sorted);
        log::trace!("Rebalanced tree to height {}", self.height());

        if cfg!(debug_assertions) {
            assert_eq!(self.size, self.iter().count());
            assert!(self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b));
        }
    }

    /// Returns a copy of every value in ascending order, in a slice sized to
    /// [`Tree::len`] before the traversal starts.
    ///
    /// # Panics
    ///
    /// If the tree holds a different number of nodes than [`Tree::len`],
    /// which would mean its bookkeeping is broken.
    pub fn to_sorted_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        let mut array = Vec::with_capacity(self.size);
        array.extend(self.iter().cloned());
        assert_eq!(array.len(), self.size, "tree size out of sync with its nodes");

        array.into_boxed_slice()
    }

    /// Returns a copy of every value in ascending order.
    pub fn to_sorted_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.size)
    }

    /// Inserts the values of an ascending vector: the lower median first,
    /// then the values below it, then the values above it. Recursion depth
    /// is `lg(N)` since every call halves the vector.
    fn insert_sorted(&mut self, mut sorted: Vec<T>)
    where
        T: Ord,
    {
        // Everything up to and including the lower median, `(first + last) / 2`.
        let upper = sorted.split_off((sorted.len() + 1) / 2);
        let Some(median) = sorted.pop() else {
            return;
        };

        self.insert(median);
        self.insert_sorted(sorted);
        self.insert_sorted(upper);
    }

    #[cfg(test)]
    pub(crate) fn from_parts(root: Link<T>, size: usize) -> Self {
        Self { root, size }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_list(Some(iter))
    }
}

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(data: Vec<T>) -> Self {
        Self::from_array(Some(data))
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let size = mem::take(&mut self.size);
        IntoIter::new(self.root.take(), size)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn insert<T>(mut link: &mut Link<T>, value: T)
where
    T: Ord,
{
    while let Some(node) = link {
        link = match value.cmp(&node.value) {
            Ordering::Less | Ordering::Equal => &mut node.left,
            Ordering::Greater => &mut node.right,
        };
    }
    *link = Some(Box::new(Node::new(value)));
}

fn contains<T>(mut node: Option<&Node<T>>, target: &T) -> bool
where
    T: Ord,
{
    while let Some(n) = node {
        node = match target.cmp(n.value()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return true,
            Ordering::Greater => n.right(),
        };
    }
    false
}

/// Height of a subtree and whether every node in it has subtrees whose
/// heights differ by at most one.
#[derive(Clone, Copy)]
struct Shape {
    height: usize,
    balanced: bool,
}

impl Shape {
    const EMPTY: Self = Self {
        height: 0,
        balanced: true,
    };
}

fn shape<T>(node: Option<&Node<T>>) -> Shape {
    node::fold_post_order(node, |_, left, right| {
        let left = left.unwrap_or(Shape::EMPTY);
        let right = right.unwrap_or(Shape::EMPTY);
        Shape {
            height: 1 + left.height.max(right.height),
            balanced: left.balanced
                && right.balanced
                && left.height.abs_diff(right.height) <= 1,
        }
    })
    .unwrap_or(Shape::EMPTY)
}

fn height<T>(node: Option<&Node<T>>) -> usize {
    shape(node).height
}

fn is_balanced<T>(node: Option<&Node<T>>) -> bool {
    shape(node).balanced
}
