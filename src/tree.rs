//! A mutable BST whose nodes exclusively own their children. Nothing balances the tree
//! behind the caller's back: [`Tree::insert`] and [`Tree::delete`] only ever touch the path
//! to the affected node, and the shape is restored on demand with [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! // Duplicates are dropped and the rest is built balanced.
//! let mut tree = Tree::from_values([5, 3, 8, 3, 1]);
//! assert_eq!(tree.to_vec(), vec![1, 3, 5, 8]);
//! assert!(tree.is_balanced());
//!
//! // Growing one side degrades the balance...
//! tree.insert(100);
//! tree.insert(101);
//! tree.insert(102);
//! assert!(!tree.is_balanced());
//!
//! // ...until it is asked for again.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.to_vec(), vec![1, 3, 5, 8, 100, 101, 102]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Returned by [`Tree::height`] and [`Tree::depth`] when the value is not in the tree. It is
/// also the height of an empty subtree.
pub const NOT_FOUND: isize = -1;

type Child<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of unique values. Every value in a node's left subtree is smaller than
/// the node's value and every value in its right subtree is larger.
#[derive(Clone)]
pub struct Tree<T> {
    root: Child<T>,
    len: usize,
}

/// A single node of a [`Tree`]. Outside of the tree a `Node` can only be looked at, never
/// changed, which keeps the ordering of the tree intact.
#[derive(Clone, Debug)]
pub struct Node<T> {
    data: T,
    left: Child<T>,
    right: Child<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// The value held by this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the subtree holding smaller values, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the subtree holding larger values, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Counts the edges on the longest path from this node down to a leaf.
    fn height(&self) -> isize {
        let left = self.left().map_or(NOT_FOUND, Node::height);
        let right = self.right().map_or(NOT_FOUND, Node::height);
        left.max(right) + 1
    }

    /// Height of the subtree in nodes, or `None` as soon as some node in it has children whose
    /// heights differ by more than one.
    fn balanced_height(node: Option<&Node<T>>) -> Option<usize> {
        let Some(node) = node else {
            return Some(0);
        };
        let left = Self::balanced_height(node.left())?;
        let right = Self::balanced_height(node.right())?;
        if left.abs_diff(right) > 1 {
            return None;
        }
        Some(left.max(right) + 1)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, for code that wants to walk the tree's shape itself.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether the heights of the two subtrees of every node differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(3);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        Node::balanced_height(self.root()).is_some()
    }

    /// Builds a balanced subtree out of the next `count` values of `values`, which must
    /// already be sorted and unique. The middle value (the lower one for an even count)
    /// becomes the root.
    ///
    /// The left subtree is built before the root value is pulled, so values are consumed in
    /// order and nothing needs to be cloned or indexed.
    fn build_balanced(values: &mut impl Iterator<Item = T>, count: usize) -> Child<T> {
        if count == 0 {
            return None;
        }
        let mid = (count - 1) / 2;
        let left = Self::build_balanced(values, mid);
        let mut node = Node::new_boxed(values.next()?);
        node.left = left;
        node.right = Self::build_balanced(values, count - mid - 1);
        Some(node)
    }

    /// Moves every value out of the tree in ascending order.
    fn drain_sorted(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.take();
        self.len = 0;

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { data, right, .. } = *node;
            values.push(data);
            current = right;
        }

        values
    }

    /// Removes the smallest node under `slot`, splicing its right subtree into its place.
    fn take_leftmost(slot: &mut Child<T>) -> Option<T> {
        let mut current = slot;
        while current.as_ref()?.left.is_some() {
            current = &mut current.as_mut()?.left;
        }
        let node = current.take()?;
        let Node { data, right, .. } = *node;
        *current = right;
        Some(data)
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Whether `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::from_values([2, 1, 3]);
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// The height of the subtree rooted at `value`, counted in edges, so a leaf has height
    /// `0`. Returns [`NOT_FOUND`] if `value` is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, NOT_FOUND};
    ///
    /// let tree = Tree::from_values([1, 2, 3, 4]);
    /// assert_eq!(tree.height(&2), 2);
    /// assert_eq!(tree.height(&4), 0);
    /// assert_eq!(tree.height(&42), NOT_FOUND);
    /// ```
    pub fn height(&self, value: &T) -> isize {
        self.find_node(value).map_or(NOT_FOUND, Node::height)
    }

    /// The number of edges between the root and `value`, so the root has depth `0`. Returns
    /// [`NOT_FOUND`] if `value` is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, NOT_FOUND};
    ///
    /// let tree = Tree::from_values([1, 2, 3, 4]);
    /// assert_eq!(tree.depth(&2), 0);
    /// assert_eq!(tree.depth(&4), 2);
    /// assert_eq!(tree.depth(&42), NOT_FOUND);
    /// ```
    pub fn depth(&self, value: &T) -> isize {
        let mut depth = 0;
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.data) {
                Ordering::Less => node.left(),
                Ordering::Equal => return depth,
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        NOT_FOUND
    }

    fn find_node(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.data) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Walks the whole tree checking the ordering of every node against its ancestors and that
    /// the stored length matches the number of nodes.
    ///
    /// ## Panics
    ///
    /// When the tree is inconsistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut num_nodes = 0;
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
        stack.extend(self.root().map(|root| (root, None, None)));

        while let Some((node, lower, upper)) = stack.pop() {
            if let Some(lower) = lower {
                assert!(*lower < node.data, "left subtree holds a larger value");
            }
            if let Some(upper) = upper {
                assert!(node.data < *upper, "right subtree holds a smaller value");
            }
            stack.extend(node.left().map(|left| (left, lower, Some(&node.data))));
            stack.extend(node.right().map(|right| (right, Some(&node.data), upper)));
            num_nodes += 1;
        }

        assert_eq!(num_nodes, self.len);
    }
}

impl<T> Tree<T>
where
    T: Ord + fmt::Debug,
{
    /// Builds a balanced tree holding each distinct value of `values` once.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::from_values([5, 3, 8, 3, 1]);
    ///
    /// // 1, 3, 5, 8 splits at 3.
    /// assert_eq!(tree.root().map(|root| *root.data()), Some(3));
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        log::debug!("Tree::from_values building {} nodes", values.len());

        let len = values.len();
        let root = Self::build_balanced(&mut values.into_iter(), len);
        Self { root, len }
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree unchanged, if `value`
    /// is already present. The tree is not rebalanced afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    log::trace!("Tree::insert({:?}) already present", value);
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        log::trace!("Tree::insert({:?})", value);
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Removes `value` from the tree. Returns `false`, leaving the tree unchanged, if `value`
    /// isn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::from_values([1, 2, 3]);
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.to_vec(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        let deleted = Self::delete_from(&mut self.root, value);
        if deleted {
            log::trace!("Tree::delete({:?})", value);
            self.len -= 1;
        } else {
            log::trace!("Tree::delete({:?}) not found", value);
        }
        deleted
    }

    fn delete_from(slot: &mut Child<T>, value: &T) -> bool {
        let Some(node) = slot else {
            return false;
        };
        match value.cmp(&node.data) {
            Ordering::Less => Self::delete_from(&mut node.left, value),
            Ordering::Greater => Self::delete_from(&mut node.right, value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // The in-order successor has no left child, so lifting its value here
                    // removes exactly one node further down.
                    if let Some(successor) = Self::take_leftmost(&mut node.right) {
                        node.data = successor;
                    }
                } else {
                    let child = node.left.take().or_else(|| node.right.take());
                    *slot = child;
                }
                true
            }
        }
    }

    /// Rebuilds the tree into a balanced shape holding the same values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 0..10 {
    ///     tree.insert(value);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.to_vec(), (0..10).collect::<Vec<_>>());
    /// ```
    pub fn rebalance(&mut self) {
        let values = self.drain_sorted();
        let len = values.len();
        log::debug!("Tree::rebalance rebuilding {} nodes", len);

        self.root = Self::build_balanced(&mut values.into_iter(), len);
        self.len = len;
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord + fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
