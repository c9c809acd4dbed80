#![allow(dead_code)]

use bintree::model::{BinaryTree, NodeValue, Side};

/// Tree of `1,2,3,4,,5,6`:
/// ```text
///       1
///     /   \
///    2     3
///   /     / \
///  4     5   6
/// ```
pub const EXAMPLE: &str = "1,2,3,4,,5,6";

pub fn example_tree() -> BinaryTree<NodeValue> {
    bintree::from_string(EXAMPLE).unwrap().unwrap()
}

pub fn int_tree(text: &str) -> BinaryTree<i64> {
    bintree::text::TreeStringParser::new()
        .parse::<i64>(text)
        .unwrap()
        .unwrap()
}

pub fn values<'a, V: Clone + 'a>(nodes: impl IntoIterator<Item = &'a bintree::Node<V>>) -> Vec<V> {
    nodes.into_iter().map(|n| n.value().clone()).collect()
}

pub fn ints(values: &[i64]) -> Vec<NodeValue> {
    values.iter().map(|&v| NodeValue::Int(v)).collect()
}

/// Builds a binary search tree by inserting `values` in the given order.
pub fn search_tree(values: &[i64]) -> BinaryTree<i64> {
    let mut tree = BinaryTree::new(values[0]);
    for &value in &values[1..] {
        let mut current = tree.root_index();
        loop {
            let node = tree.node(current);
            let (side, next) = if value < *node.value() {
                (Side::Left, node.left())
            } else {
                (Side::Right, node.right())
            };
            match next {
                Some(child) => current = child,
                None => {
                    tree.add_child(current, side, value);
                    break;
                }
            }
        }
    }
    tree.connect();
    tree
}
