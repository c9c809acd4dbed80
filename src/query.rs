//! Structural queries on a [BinaryTree]: symmetry, depth, root-to-leaf
//! paths, path sums, ancestor paths and lowest common ancestors.
//!
//! Values are compared by equality only. Lookups by value return the first
//! match in post-order, so searched values should be unique within the tree.

use crate::model::{BinaryTree, Node, NodeIndex, NodeValue};
use crate::traversal::PostOrderIter;

// =#========================================================================#=
// PATH SUM (Trait)
// =#========================================================================T=
/// Trait for values that can be summed along a root-to-leaf path.
///
/// `path_sum` returns `None` if the path has no defined sum (e.g. an integer
/// overflow); such a path never matches a target.
pub trait PathSum {
    /// Type of the sum of a path.
    type Total: PartialEq;

    /// Sums the values of a path.
    fn path_sum<'a, I>(values: I) -> Option<Self::Total>
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;
}

macro_rules! impl_path_sum_checked {
    ($($t:ty),*) => {$(
        impl PathSum for $t {
            type Total = $t;

            fn path_sum<'a, I>(values: I) -> Option<$t>
            where
                I: IntoIterator<Item = &'a $t>,
            {
                values.into_iter().try_fold(0 as $t, |acc, v| acc.checked_add(*v))
            }
        }
    )*};
}

impl_path_sum_checked!(i8, i16, i32, i64, i128, isize);
impl_path_sum_checked!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_path_sum_float {
    ($($t:ty),*) => {$(
        impl PathSum for $t {
            type Total = $t;

            fn path_sum<'a, I>(values: I) -> Option<$t>
            where
                I: IntoIterator<Item = &'a $t>,
            {
                Some(values.into_iter().sum())
            }
        }
    )*};
}

impl_path_sum_float!(f32, f64);

/// Sums the integers; a path containing a string value has no sum.
impl PathSum for NodeValue {
    type Total = i64;

    fn path_sum<'a, I>(values: I) -> Option<i64>
    where
        I: IntoIterator<Item = &'a NodeValue>,
    {
        values
            .into_iter()
            .try_fold(0i64, |acc, v| acc.checked_add(v.as_int()?))
    }
}

// =$========================================================================$=
// QUERIES
// =$========================================================================$=
impl<V> BinaryTree<V> {
    /// Returns the number of levels of the tree.
    pub fn max_depth(&self) -> usize {
        self.levels().count()
    }

    /// Returns the path from the root to the node at `index`, root first.
    ///
    /// Follows parent links, so this is linear in the depth of the node.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn path_to(&self, index: NodeIndex) -> Vec<&Node<V>> {
        let mut path = vec![&self[index]];
        let mut current = self[index].parent();
        while let Some(parent) = current {
            let node = &self[parent];
            path.push(node);
            current = node.parent();
        }
        path.reverse();
        path
    }

    /// Returns an iterator over every root-to-leaf path.
    ///
    /// Leaves are found by a post-order walk, so paths come from left to
    /// right.
    pub fn all_paths(&self) -> AllPathsIter<'_, V> {
        AllPathsIter {
            tree: self,
            post_order: self.post_order_iter(),
        }
    }

    /// Returns the lowest common ancestor of the nodes at `indices`,
    /// compared by identity.
    ///
    /// Paths to all targets are compared index by index from the root down;
    /// the last node they all share is returned.
    ///
    /// # Returns
    /// `None` if fewer than two indices are given or any index is out of
    /// bounds.
    pub fn lowest_common_ancestor_of(&self, indices: &[NodeIndex]) -> Option<&Node<V>> {
        if indices.len() < 2 {
            return None;
        }

        let mut paths = Vec::with_capacity(indices.len());
        for &index in indices {
            self.get(index)?;
            paths.push(self.path_to(index));
        }

        let common_depth = paths.iter().map(Vec::len).min()?;
        let (reference, others) = paths.split_first()?;

        let mut lca = None;
        for depth in 0..common_depth {
            let candidate = reference[depth].index();
            if others.iter().any(|path| path[depth].index() != candidate) {
                break;
            }
            lca = Some(reference[depth]);
        }

        lca
    }
}

impl<V: PartialEq> BinaryTree<V> {
    /// Checks whether the tree is a mirror image of itself.
    ///
    /// Each level, with absent children kept as empty slots, has to read the
    /// same from both ends. A single node is symmetrical.
    pub fn is_symmetrical(&self) -> bool {
        let mut level: Vec<Option<&Node<V>>> = vec![Some(self.root())];

        while level.iter().any(Option::is_some) {
            let values: Vec<Option<&V>> = level.iter().map(|slot| slot.map(Node::value)).collect();
            if !values.iter().eq(values.iter().rev()) {
                return false;
            }

            // Children of empty slots are empty on both mirrored sides,
            // so only present nodes contribute slots
            level = level
                .iter()
                .flatten()
                .flat_map(|node| [node.left(), node.right()])
                .map(|child| child.map(|index| &self[index]))
                .collect();
        }

        true
    }

    /// Returns the first node in post-order whose value equals `key`.
    pub fn find(&self, key: &V) -> Option<&Node<V>> {
        self.post_order_iter().find(|node| node.value() == key)
    }

    /// Returns the path from the root to the first node (in post-order)
    /// whose value equals `key`, or `None` if the value is absent.
    pub fn find_path(&self, key: &V) -> Option<Vec<&Node<V>>> {
        self.find(key).map(|node| self.path_to(node.index()))
    }

    /// Returns the lowest common ancestor of the nodes holding `keys`.
    ///
    /// Each key is resolved with [`find()`](Self::find), then
    /// [`lowest_common_ancestor_of()`](Self::lowest_common_ancestor_of) is
    /// applied.
    ///
    /// # Returns
    /// `None` if fewer than two keys are given or any key is absent.
    ///
    /// # Example
    /// ```
    /// use bintree::from_string;
    /// use bintree::model::NodeValue;
    ///
    /// let tree = from_string("3,5,1,6,2,0,8,null,null,7,4").unwrap().unwrap();
    /// let lca = tree.lowest_common_ancestor(&[NodeValue::Int(7), NodeValue::Int(6)]).unwrap();
    /// assert_eq!(lca.value(), &NodeValue::Int(5));
    /// ```
    pub fn lowest_common_ancestor(&self, keys: &[V]) -> Option<&Node<V>> {
        if keys.len() < 2 {
            return None;
        }

        let indices = keys
            .iter()
            .map(|key| self.find(key).map(Node::index))
            .collect::<Option<Vec<_>>>()?;

        self.lowest_common_ancestor_of(&indices)
    }
}

impl<V: PathSum> BinaryTree<V> {
    /// Returns whether any root-to-leaf path sums up to `target`.
    ///
    /// # Example
    /// ```
    /// use bintree::from_string;
    ///
    /// let tree = from_string("5,4,8,11,null,13,4,7,2,null,null,null,1").unwrap().unwrap();
    /// assert!(tree.has_path_sum(22));
    /// assert!(!tree.has_path_sum(23));
    /// ```
    pub fn has_path_sum(&self, target: V::Total) -> bool {
        let target = Some(target);
        self.all_paths()
            .any(|path| V::path_sum(path.into_iter().map(Node::value)) == target)
    }
}

/// Iterator over root-to-leaf paths, see [`BinaryTree::all_paths`].
pub struct AllPathsIter<'a, V> {
    tree: &'a BinaryTree<V>,
    post_order: PostOrderIter<'a, V>,
}

impl<'a, V> Iterator for AllPathsIter<'a, V> {
    type Item = Vec<&'a Node<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.post_order
            .find(|node| node.is_leaf())
            .map(|leaf| tree.path_to(leaf.index()))
    }
}
