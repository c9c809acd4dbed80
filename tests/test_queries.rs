mod common;

use bintree::from_string;
use bintree::model::NodeValue;
use common::{example_tree, int_tree, ints, values};
use pretty_assertions::assert_eq;

// --- TESTS SYMMETRY ---
#[test]
fn test_symmetrical() {
    assert!(int_tree("1,2,2,3,4,4,3").is_symmetrical());
    assert!(int_tree("1,2,2,null,3,3").is_symmetrical());
    assert!(int_tree("1").is_symmetrical());
}

#[test]
fn test_not_symmetrical() {
    assert!(!int_tree("1,2,2,null,3,null,3").is_symmetrical());
    assert!(!int_tree("1,2,3").is_symmetrical());
    assert!(!int_tree("1,2").is_symmetrical());
    assert!(!example_tree().is_symmetrical());
}

// --- TESTS DEPTH & PATHS ---
#[test]
fn test_max_depth() {
    assert_eq!(example_tree().max_depth(), 3);
    assert_eq!(int_tree("1").max_depth(), 1);
    assert_eq!(int_tree("1,null,2,null,3,null,4").max_depth(), 4);
}

#[test]
fn test_all_paths() {
    let tree = example_tree();
    let paths: Vec<Vec<NodeValue>> = tree.all_paths().map(values).collect();
    assert_eq!(
        paths,
        vec![ints(&[1, 2, 4]), ints(&[1, 3, 5]), ints(&[1, 3, 6])]
    );
}

#[test]
fn test_all_paths_single_node() {
    let tree = int_tree("7");
    let paths: Vec<Vec<i64>> = tree.all_paths().map(values).collect();
    assert_eq!(paths, vec![vec![7]]);
}

#[test]
fn test_path_to() {
    let tree = example_tree();
    let six = tree.find(&NodeValue::Int(6)).unwrap().index();
    assert_eq!(values(tree.path_to(six)), ints(&[1, 3, 6]));
    assert_eq!(values(tree.path_to(tree.root_index())), ints(&[1]));
}

#[test]
fn test_has_path_sum() {
    let tree = example_tree();
    assert!(tree.has_path_sum(7));
    assert!(tree.has_path_sum(9));
    assert!(tree.has_path_sum(10));
    assert!(!tree.has_path_sum(8));
    // Only root-to-leaf paths count
    assert!(!tree.has_path_sum(3));
}

#[test]
fn test_has_path_sum_negative_and_zero() {
    let tree = int_tree("0,-2,3,0");
    assert!(tree.has_path_sum(-2));
    assert!(tree.has_path_sum(3));
    assert!(!tree.has_path_sum(0));
}

#[test]
fn test_has_path_sum_overflow_never_matches() {
    let mut tree = bintree::BinaryTree::new(i64::MAX);
    tree.add_left(0, 1);
    assert!(!tree.has_path_sum(i64::MIN));
}

#[test]
fn test_has_path_sum_with_strings() {
    let tree = from_string("1,a,2").unwrap().unwrap();
    assert!(tree.has_path_sum(3));
    assert!(!tree.has_path_sum(1));
}

#[test]
fn test_find_path() {
    let tree = example_tree();
    let path = tree.find_path(&NodeValue::Int(5)).unwrap();
    assert_eq!(values(path), ints(&[1, 3, 5]));
    assert!(tree.find_path(&NodeValue::Int(9)).is_none());
}

// --- TESTS LOWEST COMMON ANCESTOR ---
#[test]
fn test_lowest_common_ancestor() {
    let tree = example_tree();
    let lca = |keys: &[i64]| {
        tree.lowest_common_ancestor(&ints(keys))
            .map(|node| node.value().clone())
    };

    assert_eq!(lca(&[4, 5]), Some(NodeValue::Int(1)));
    assert_eq!(lca(&[5, 6]), Some(NodeValue::Int(3)));
    assert_eq!(lca(&[4, 2]), Some(NodeValue::Int(2)));
    assert_eq!(lca(&[4, 5, 6]), Some(NodeValue::Int(1)));
    assert_eq!(lca(&[6, 6]), Some(NodeValue::Int(6)));
}

#[test]
fn test_lowest_common_ancestor_needs_two_present_keys() {
    let tree = example_tree();
    assert!(tree.lowest_common_ancestor(&ints(&[4])).is_none());
    assert!(tree.lowest_common_ancestor(&[]).is_none());
    assert!(tree.lowest_common_ancestor(&ints(&[4, 9])).is_none());
}

#[test]
fn test_lowest_common_ancestor_of_indices() {
    let tree = int_tree("3,5,1,6,2,0,8,null,null,7,4");
    let seven = tree.find(&7).unwrap().index();
    let four = tree.find(&4).unwrap().index();
    let eight = tree.find(&8).unwrap().index();

    let lca = |indices: &[usize]| tree.lowest_common_ancestor_of(indices).map(|n| *n.value());
    assert_eq!(lca(&[seven, four]), Some(2));
    assert_eq!(lca(&[seven, eight]), Some(3));
    assert_eq!(lca(&[seven, 999]), None);
    assert_eq!(lca(&[seven]), None);
}
