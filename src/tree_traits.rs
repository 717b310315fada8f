use std::fmt;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::tree::Tree;

/// Conversion into a printable `termtree` rendering.
pub trait TreeRender<A> {
    /// Renders every node with `label`.
    fn to_termtree_with<F>(&self, label: F) -> TermTree<String>
    where
        F: FnMut(&A) -> String;

    fn to_termtree(&self) -> TermTree<String>
    where
        A: fmt::Display,
    {
        self.to_termtree_with(|value| value.to_string())
    }
}

impl<A> TreeRender<A> for Tree<A> {
    #[instrument(level = "debug", skip_all)]
    fn to_termtree_with<F>(&self, mut label: F) -> TermTree<String>
    where
        F: FnMut(&A) -> String,
    {
        self.fold(|value, leaves: Vec<TermTree<String>>| {
            TermTree::new(label(value)).with_leaves(leaves)
        })
    }
}

impl<A: fmt::Display> fmt::Display for Tree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_termtree())
    }
}
