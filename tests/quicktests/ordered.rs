use ordered_tree::{Node, Order, Tree, NOT_FOUND};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Checks the BST property of every node against the bounds set by its ancestors, using only
/// the read-only node views.
fn is_search_tree(tree: &Tree<i8>) -> bool {
    let mut stack: Vec<(&Node<i8>, Option<i8>, Option<i8>)> = Vec::new();
    stack.extend(tree.root().map(|root| (root, None, None)));

    while let Some((node, lower, upper)) = stack.pop() {
        let data = *node.data();
        if lower.map_or(false, |lower| lower >= data) || upper.map_or(false, |upper| data >= upper)
        {
            return false;
        }
        stack.extend(node.left().map(|left| (left, lower, Some(data))));
        stack.extend(node.right().map(|right| (right, Some(data), upper)));
    }

    true
}

/// Whether every order visits exactly the values of the model, each once.
fn orders_agree(tree: &Tree<i8>, model: &BTreeSet<i8>) -> bool {
    let sorted: Vec<i8> = model.iter().copied().collect();
    Order::ALL.iter().all(|&order| {
        let mut visited: Vec<i8> = tree.iter_order(order).copied().collect();
        if order == Order::In {
            return visited == sorted;
        }
        visited.sort_unstable();
        visited == sorted
    })
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes, and rebalances we have the same set of values in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        let consistent = match op {
            Op::Insert(v) => tree.insert(*v) == model.insert(*v),
            Op::Delete(v) => tree.delete(v) == model.remove(v),
            Op::Rebalance => {
                tree.rebalance();
                tree.is_balanced()
            }
            Op::Iter => orders_agree(tree, model),
        };
        if !consistent || tree.len() != model.len() || !is_search_tree(tree) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut model)
        && orders_agree(&tree, &model)
        && model.iter().all(|value| tree.find(value))
}

#[quickcheck]
fn built_tree_is_sorted_and_balanced(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());
    let model: BTreeSet<_> = xs.into_iter().collect();

    tree.is_balanced() && is_search_tree(&tree) && orders_agree(&tree, &model)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x) && tree.height(x) == NOT_FOUND && tree.depth(x) == NOT_FOUND)
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.iter().copied());
    let before = tree.to_vec();

    xs.iter().all(|x| !tree.insert(*x)) && tree.to_vec() == before && tree.len() == before.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    for delete in &deletes {
        let mut expected = tree.to_vec();
        expected.retain(|x| x != delete);
        tree.delete(delete);
        if tree.to_vec() != expected {
            return false;
        }
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    deletes.iter().all(|x| !tree.find(x))
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| tree.find(x))
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.to_vec();

    tree.rebalance();
    tree.is_balanced() && tree.to_vec() == before && is_search_tree(&tree)
}

#[quickcheck]
fn depth_and_height_agree(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let Some(root) = tree.root().map(|root| *root.data()) else {
        return xs.is_empty();
    };
    let tree_height = tree.height(&root);

    tree.depth(&root) == 0
        && xs.iter().all(|x| {
            let (depth, height) = (tree.depth(x), tree.height(x));
            depth >= 0 && height >= 0 && depth + height <= tree_height
        })
}
