pub mod bagging;
pub mod params;
mod trainer;

pub use trainer::{RandomForestTrainer, ThreadSafe};

use crate::tree::ArrayTree;

/// An ensemble of trained trees, in training order.
#[derive(Debug, Clone, PartialEq)]
pub struct Forest<S, P> {
    trees: Vec<ArrayTree<S, P>>,
}

impl<S, P> Forest<S, P> {
    pub fn new() -> Self {
        Self { trees: Vec::new() }
    }

    pub fn push(&mut self, tree: ArrayTree<S, P>) {
        self.trees.push(tree);
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn trees(&self) -> &[ArrayTree<S, P>] {
        &self.trees
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArrayTree<S, P>> {
        self.trees.iter()
    }

    pub fn into_trees(self) -> Vec<ArrayTree<S, P>> {
        self.trees
    }
}

impl<S, P> Default for Forest<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, P> IntoIterator for &'a Forest<S, P> {
    type Item = &'a ArrayTree<S, P>;
    type IntoIter = std::slice::Iter<'a, ArrayTree<S, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S, P> IntoIterator for Forest<S, P> {
    type Item = ArrayTree<S, P>;
    type IntoIter = std::vec::IntoIter<ArrayTree<S, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.into_iter()
    }
}
