//! Array-backed complete binary trees.
//!
//! The full skeleton up to the maximum depth is allocated up front. Training
//! never compares depths against the configuration: a node at the deepest
//! level simply has no children and therefore ends up a leaf.

mod node;

pub use node::{Node, NodeIndex};

use crate::error::TrainingError;

/// A complete binary tree stored as a flat `Vec<Node>`.
///
/// The root lives at depth 1; every node above `maximum_depth` has both
/// children and every node at `maximum_depth` has none.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayTree<S, P> {
    nodes: Vec<Node<S, P>>,
    maximum_depth: usize,
}

impl<S, P> ArrayTree<S, P> {
    /// Allocate an empty tree holding `2^maximum_depth - 1` nodes.
    ///
    /// # Errors
    ///
    /// | Variant                            | When                                   |
    /// |------------------------------------|----------------------------------------|
    /// | [`TrainingError::InvalidMaxDepth`] | `maximum_depth` is zero                |
    /// | [`TrainingError::TreeTooDeep`]     | the nodes cannot be allocated          |
    pub fn new(maximum_depth: usize) -> Result<Self, TrainingError> {
        if maximum_depth == 0 {
            return Err(TrainingError::InvalidMaxDepth { maximum_depth });
        }
        let num_of_nodes = num_of_nodes_for_depth(maximum_depth)
            .ok_or(TrainingError::TreeTooDeep { maximum_depth })?;

        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(num_of_nodes)
            .map_err(|_| TrainingError::TreeTooDeep { maximum_depth })?;
        nodes.extend((0..num_of_nodes).map(|_| Node::empty()));
        Ok(Self {
            nodes,
            maximum_depth,
        })
    }

    #[must_use]
    pub fn root(&self) -> NodeIndex {
        NodeIndex::new(0)
    }

    /// Borrow the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not produced by a tree of at least this depth.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &Node<S, P> {
        &self.nodes[index.index()]
    }

    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut Node<S, P> {
        &mut self.nodes[index.index()]
    }

    /// Return the `(left, right)` children of `index`, or `None` at the deepest level.
    #[must_use]
    pub fn children(&self, index: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
        if self.depth_of(index) < self.maximum_depth {
            Some((index.left_child(), index.right_child()))
        } else {
            None
        }
    }

    /// Depth of `index`, counting the root as depth 1.
    #[must_use]
    pub fn depth_of(&self, index: NodeIndex) -> usize {
        (usize::BITS - (index.index() + 1).leading_zeros()) as usize
    }

    #[must_use]
    pub fn maximum_depth(&self) -> usize {
        self.maximum_depth
    }

    /// Number of pre-allocated nodes, visited or not.
    #[must_use]
    pub fn num_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes reached by training, in depth-first order (left before right).
    ///
    /// These are the root and the children of every node that carries a split point.
    #[must_use]
    pub fn reachable(&self) -> Vec<NodeIndex> {
        let mut reached = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(index) = stack.pop() {
            reached.push(index);
            if self.node(index).split_point().is_none() {
                continue;
            }
            if let Some((left, right)) = self.children(index) {
                stack.push(right);
                stack.push(left);
            }
        }
        reached
    }

    #[must_use]
    pub fn num_of_leaves(&self) -> usize {
        self.reachable()
            .into_iter()
            .filter(|&index| self.node(index).is_leaf())
            .count()
    }
}

fn num_of_nodes_for_depth(maximum_depth: usize) -> Option<usize> {
    let shift = u32::try_from(maximum_depth).ok()?;
    if shift >= usize::BITS {
        return None;
    }
    Some((1usize << shift) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestTree = ArrayTree<usize, f64>;

    #[test]
    fn zero_depth_is_rejected() {
        let err = TestTree::new(0).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidMaxDepth { maximum_depth: 0 }));
    }

    #[test]
    fn absurd_depth_is_rejected() {
        let err = TestTree::new(usize::BITS as usize).unwrap_err();
        assert!(matches!(err, TrainingError::TreeTooDeep { .. }));
    }

    #[test]
    fn unallocatable_depth_is_rejected() {
        let err = TestTree::new(60).unwrap_err();
        assert!(matches!(err, TrainingError::TreeTooDeep { maximum_depth: 60 }));
    }

    #[test]
    fn skeleton_is_complete() {
        let tree = TestTree::new(4).unwrap();
        assert_eq!(tree.num_of_nodes(), 15);
        assert_eq!(tree.maximum_depth(), 4);
        assert!(!tree.node(tree.root()).is_visited());
    }

    #[test]
    fn depth_one_root_has_no_children() {
        let tree = TestTree::new(1).unwrap();
        assert_eq!(tree.num_of_nodes(), 1);
        assert!(tree.children(tree.root()).is_none());
    }

    #[test]
    fn only_deepest_level_lacks_children() {
        let tree = TestTree::new(3).unwrap();
        for i in 0..tree.num_of_nodes() {
            let index = NodeIndex::new(i);
            let depth = tree.depth_of(index);
            assert!((1..=3).contains(&depth));
            assert_eq!(tree.children(index).is_some(), depth < 3, "node {index}");
        }
    }

    #[test]
    fn depth_of_follows_levels() {
        let tree = TestTree::new(4).unwrap();
        let depths: Vec<usize> = (0..7).map(|i| tree.depth_of(NodeIndex::new(i))).collect();
        assert_eq!(depths, vec![1, 2, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn reachable_follows_split_nodes_only() {
        let mut tree = TestTree::new(3).unwrap();
        let root = tree.root();
        let (left, right) = tree.children(root).unwrap();
        tree.node_mut(root).split_point = Some(0.5);
        tree.node_mut(left).leaf = true;
        tree.node_mut(right).leaf = true;

        assert_eq!(tree.reachable(), vec![root, left, right]);
        assert_eq!(tree.num_of_leaves(), 2);
    }
}
