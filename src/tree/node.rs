use std::fmt;

/// Position of a node in the array layout of an [`ArrayTree`](super::ArrayTree).
///
/// The root is index 0; node `i` has its children at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Return the zero-based array position.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn left_child(self) -> Self {
        Self(2 * self.0 + 1)
    }

    pub(crate) fn right_child(self) -> Self {
        Self(2 * self.0 + 2)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of a tree under training.
///
/// `S` is the weak learner's per-node statistics, `P` its split point.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S, P> {
    pub(crate) statistics: Option<S>,
    pub(crate) leaf: bool,
    pub(crate) split_point: Option<P>,
}

impl<S, P> Node<S, P> {
    pub(crate) fn empty() -> Self {
        Self {
            statistics: None,
            leaf: false,
            split_point: None,
        }
    }

    /// Statistics of the samples that reached this node, once it has been visited.
    #[must_use]
    pub fn statistics(&self) -> Option<&S> {
        self.statistics.as_ref()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// The split chosen for this node. Only internal nodes carry one.
    #[must_use]
    pub fn split_point(&self) -> Option<&P> {
        self.split_point.as_ref()
    }

    /// Return `true` once training has assigned statistics to this node.
    #[must_use]
    pub fn is_visited(&self) -> bool {
        self.statistics.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeIndex};

    #[test]
    fn node_index_children() {
        let root = NodeIndex::new(0);
        assert_eq!(root.left_child().index(), 1);
        assert_eq!(root.right_child().index(), 2);
        assert_eq!(NodeIndex::new(2).left_child().index(), 5);
    }

    #[test]
    fn node_index_display() {
        assert_eq!(format!("{}", NodeIndex::new(7)), "7");
    }

    #[test]
    fn empty_node_is_unvisited() {
        let node: Node<usize, f64> = Node::empty();
        assert!(!node.is_visited());
        assert!(!node.is_leaf());
        assert!(node.split_point().is_none());
    }
}
