mod common;

use bintree::model::NodeValue;
use bintree::text::{NullStyle, TreeStringParser, TreeStringWriter};
use bintree::{TreeError, from_string, to_string};
use common::{EXAMPLE, example_tree, int_tree};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

// --- TESTS READING ---
#[test]
fn test_example_structure() {
    let tree = example_tree();
    let root = tree.root();
    assert_eq!(root.value(), &NodeValue::Int(1));

    let two = &tree[root.left().unwrap()];
    let three = &tree[root.right().unwrap()];
    assert_eq!(two.value(), &NodeValue::Int(2));
    assert_eq!(three.value(), &NodeValue::Int(3));

    assert_eq!(tree[two.left().unwrap()].value(), &NodeValue::Int(4));
    assert_eq!(two.right(), None);
    assert_eq!(tree[three.left().unwrap()].value(), &NodeValue::Int(5));
    assert_eq!(tree[three.right().unwrap()].value(), &NodeValue::Int(6));

    assert_eq!(tree.num_nodes(), 6);
    assert!(tree.is_valid());
}

#[test]
fn test_empty_input_is_no_tree() {
    assert!(from_string("").unwrap().is_none());
    assert!(from_string("   ").unwrap().is_none());
    assert!(from_string("[]").unwrap().is_none());
    assert!(from_string(",1,2").unwrap().is_none());
    assert!(from_string("null,1,2").unwrap().is_none());
}

#[test]
fn test_null_and_empty_tokens_are_equivalent() {
    let with_null = from_string("1,null,2,3").unwrap().unwrap();
    let with_empty = from_string("1,,2,3").unwrap().unwrap();
    assert_eq!(with_null, with_empty);

    let root = with_null.root();
    assert_eq!(root.left(), None);
    let two = &with_null[root.right().unwrap()];
    assert_eq!(two.value(), &NodeValue::Int(2));
    assert_eq!(with_null[two.left().unwrap()].value(), &NodeValue::Int(3));
}

#[test]
fn test_brackets_quotes_and_whitespace_are_trimmed() {
    let tree = from_string("[1, 2, 3, 4, null, 5, 6]").unwrap().unwrap();
    assert_eq!(tree, example_tree());

    let quoted = from_string("'1', \"2\"\n, 3").unwrap().unwrap();
    assert_eq!(quoted.num_nodes(), 3);
}

#[test]
fn test_trailing_commas_are_absent_children() {
    let tree = from_string("1,2,,,,").unwrap().unwrap();
    assert_eq!(tree.num_nodes(), 2);
    assert!(tree[1].is_leaf());
}

#[test]
fn test_partial_last_level() {
    // 4 gets a left child only, everyone else stays a leaf
    let tree = int_tree("1,2,3,4,5,6,7,8");
    assert_eq!(tree.num_nodes(), 8);
    let four = tree.find(&4).unwrap();
    assert_eq!(tree[four.left().unwrap()].value(), &8);
    assert_eq!(four.right(), None);
}

#[test]
fn test_non_numeric_tokens_are_kept_as_strings() {
    let tree = from_string("a,1,b").unwrap().unwrap();
    let root = tree.root();
    assert_eq!(root.value(), &NodeValue::Str("a".to_string()));
    assert_eq!(tree[root.left().unwrap()].value(), &NodeValue::Int(1));
    assert_eq!(tree[root.right().unwrap()].value().as_str(), Some("b"));
}

#[test]
fn test_out_of_range_integers_are_kept_as_strings() {
    let tree = from_string("99999999999999999999,1").unwrap().unwrap();
    assert_eq!(tree.root().value().as_str(), Some("99999999999999999999"));
    assert_eq!(tree.root().value().as_int(), None);
    assert!(!tree.has_path_sum(1));
}

#[test]
fn test_zero_is_a_node() {
    let tree = int_tree("0,0,null,0");
    assert_eq!(tree.num_nodes(), 3);
    assert_eq!(tree.to_string(), "0,0,null,0");
}

#[test]
fn test_strict_typing_reports_position() {
    let result = TreeStringParser::new().parse::<i64>("1,2,x");
    assert_eq!(
        result.unwrap_err(),
        TreeError::InvalidToken {
            position: 2,
            token: "x".to_string(),
            reason: "invalid digit found in string".to_string(),
        }
    );
}

#[test]
fn test_custom_null_token() {
    let parser = TreeStringParser::new().with_null_token("#");
    let tree = parser.parse::<i64>("1,#,2").unwrap().unwrap();
    assert_eq!(tree.root().left(), None);
    assert_eq!(tree.num_nodes(), 2);
}

#[test]
fn test_custom_trim_chars() {
    let parser = TreeStringParser::new().with_trim_chars(&[' ', '(', ')']);
    let tree = parser.parse::<i64>("(1, 2, 3)").unwrap().unwrap();
    assert_eq!(tree.num_nodes(), 3);
}

#[test]
fn test_connect_pass_after_parsing() {
    let tree = example_tree();
    let four = tree.find(&NodeValue::Int(4)).unwrap();
    let five = tree.find(&NodeValue::Int(5)).unwrap();
    let six = tree.find(&NodeValue::Int(6)).unwrap();

    assert_eq!(four.prev(), None);
    assert_eq!(four.next(), Some(five.index()));
    assert_eq!(five.prev(), Some(four.index()));
    assert_eq!(five.next(), Some(six.index()));
    assert_eq!(six.next(), None);
    assert_eq!(tree.root().next(), None);

    let unconnected = TreeStringParser::new()
        .without_connect()
        .parse::<i64>(EXAMPLE)
        .unwrap()
        .unwrap();
    for node in unconnected.nodes() {
        assert_eq!((node.prev(), node.next()), (None, None));
    }
}

#[traced_test]
#[test]
fn test_tokens_after_last_level_are_ignored() {
    let tree = int_tree("1,null,null,7,8");
    assert_eq!(tree.num_nodes(), 1);
    assert!(logs_contain("ignoring tokens after the last level"));
}

// --- TESTS WRITING ---
#[test]
fn test_write_example() {
    assert_eq!(to_string(&example_tree()), "1,2,3,4,null,5,6");
}

#[test]
fn test_write_drops_trailing_nulls() {
    let tree = int_tree("1,2,null,3,null,null,null,null,null");
    assert_eq!(tree.to_string(), "1,2,null,3");
}

#[test]
fn test_write_sparse_tree_roundtrip() {
    let text = "5,4,8,11,null,13,4,7,2,null,null,null,1";
    let tree = int_tree(text);
    assert_eq!(tree.to_string(), text);
}

#[test]
fn test_write_styles() {
    let tree = example_tree();
    let writer = TreeStringWriter::new()
        .with_null_style(NullStyle::Empty)
        .with_brackets();
    assert_eq!(writer.write(&tree), "[1,2,3,4,,5,6]");

    let mut out = String::from("tree: ");
    TreeStringWriter::new().write_to(&tree, &mut out).unwrap();
    assert_eq!(out, "tree: 1,2,3,4,null,5,6");
}

#[test]
fn test_write_single_node() {
    assert_eq!(int_tree("42").to_string(), "42");
    assert_eq!(int_tree("42,null,null").to_string(), "42");
}

#[test]
fn test_write_does_not_pad_last_level() {
    assert_eq!(int_tree("1,2,3,4").to_string(), "1,2,3,4");
    assert_eq!(int_tree("1,2,null").to_string(), "1,2");
    assert_eq!(int_tree("1,2,3,4,null,null,null").to_string(), "1,2,3,4");
}
