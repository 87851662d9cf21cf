//! Walking a [`Tree`] in each of the four classic orders.
//!
//! Every order is available both as a lazy iterator ([`Tree::iter_order`]) and as a
//! callback-driven walk (`level_order_each` and friends). The iterators keep their own
//! stack (or queue, for level order) so walking a degenerate tree never recurses.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, Tree};
//!
//! let tree = Tree::from_values([1, 2, 3, 4, 5]);
//!
//! let mut levels = Vec::new();
//! tree.level_order_each(|value| levels.push(*value));
//! assert_eq!(levels, vec![3, 1, 4, 2, 5]);
//!
//! let post: Vec<_> = tree.iter_order(Order::Post).copied().collect();
//! assert_eq!(post, vec![2, 1, 5, 4, 3]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::tree::{Node, Tree};
use crate::Error;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then its children left to right, then their children.
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. This is ascending order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl Order {
    /// All orders, in the order they are usually listed.
    pub const ALL: [Order; 4] = [Order::Level, Order::Pre, Order::In, Order::Post];

    /// A short, human readable name that [`Order::from_str`] accepts back.
    pub fn name(self) -> &'static str {
        match self {
            Self::Level => "level-order",
            Self::Pre => "pre-order",
            Self::In => "in-order",
            Self::Post => "post-order",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = Error;

    /// Accepts `level`, `level-order`, `level_order` and `levelOrder` (and likewise for the
    /// other orders), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        let stem = normalized.strip_suffix("order").unwrap_or(&normalized);
        match stem {
            "level" => Ok(Self::Level),
            "pre" => Ok(Self::Pre),
            "in" => Ok(Self::In),
            "post" => Ok(Self::Post),
            _ => Err(Error::UnknownOrder(s.to_owned())),
        }
    }
}

/// A frame on the traversal stack. `expanded` marks a node whose children have already been
/// pushed, so the next time it is popped it is yielded.
struct Frame<'a, T> {
    node: &'a Node<T>,
    expanded: bool,
}

/// A lazy, single pass walk over the values of a [`Tree`] in some [`Order`].
///
/// Created by [`Tree::iter_order`] and [`Tree::iter`].
pub struct Iter<'a, T> {
    order: Order,
    /// Used as a queue for level order and as a stack otherwise.
    pending: VecDeque<Frame<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>, order: Order) -> Self {
        let pending = tree
            .root()
            .map(|node| Frame {
                node,
                expanded: false,
            })
            .into_iter()
            .collect();
        Self {
            order,
            pending,
            remaining: tree.len(),
        }
    }

    fn push(&mut self, node: Option<&'a Node<T>>) {
        if let Some(node) = node {
            self.pending.push_back(Frame {
                node,
                expanded: false,
            });
        }
    }

    fn push_expanded(&mut self, node: &'a Node<T>) {
        self.pending.push_back(Frame {
            node,
            expanded: true,
        });
    }

    fn next_node(&mut self) -> Option<&'a Node<T>> {
        if self.order == Order::Level {
            let Frame { node, .. } = self.pending.pop_front()?;
            self.push(node.left());
            self.push(node.right());
            return Some(node);
        }

        loop {
            let Frame { node, expanded } = self.pending.pop_back()?;
            if expanded {
                return Some(node);
            }
            // Pushed in reverse so the left side comes off the stack first.
            match self.order {
                Order::Pre => {
                    self.push(node.right());
                    self.push(node.left());
                    return Some(node);
                }
                Order::In => {
                    self.push(node.right());
                    self.push_expanded(node);
                    self.push(node.left());
                }
                Order::Post => {
                    self.push_expanded(node);
                    self.push(node.right());
                    self.push(node.left());
                }
                Order::Level => unreachable!("level order is handled above"),
            }
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next_node()?;
        self.remaining -= 1;
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_order(Order::In)
    }

    /// Iterates over the values in the given order.
    pub fn iter_order(&self, order: Order) -> Iter<'_, T> {
        Iter::new(self, order)
    }

    /// Calls `visit` with every value in the given order. Fails with
    /// [`Error::InvalidCallback`] before visiting anything if there is no visitor.
    ///
    /// Prefer the `*_each` methods when the visitor is known statically; this entry point is
    /// for callers that pick the order and the visitor at runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, Order, Tree};
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// let mut sum = 0;
    /// tree.traverse(Order::Pre, Some(&mut |value: &i32| sum += value)).unwrap();
    /// assert_eq!(sum, 6);
    ///
    /// assert_eq!(tree.traverse(Order::Pre, None), Err(Error::InvalidCallback));
    /// ```
    pub fn traverse(
        &self,
        order: Order,
        visit: Option<&mut dyn FnMut(&T)>,
    ) -> Result<(), Error> {
        let visit = visit.ok_or(Error::InvalidCallback)?;
        self.iter_order(order).for_each(visit);
        Ok(())
    }

    /// Calls `visit` with every value, level by level from the root, left to right.
    pub fn level_order_each(&self, visit: impl FnMut(&T)) {
        self.iter_order(Order::Level).for_each(visit);
    }

    /// Calls `visit` with every value, each node before its subtrees.
    pub fn pre_order_each(&self, visit: impl FnMut(&T)) {
        self.iter_order(Order::Pre).for_each(visit);
    }

    /// Calls `visit` with every value in ascending order.
    pub fn in_order_each(&self, visit: impl FnMut(&T)) {
        self.iter_order(Order::In).for_each(visit);
    }

    /// Calls `visit` with every value, each node after its subtrees.
    pub fn post_order_each(&self, visit: impl FnMut(&T)) {
        self.iter_order(Order::Post).for_each(visit);
    }

    /// Collects the values in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
