//! Core tree type and its two recursion schemes.
//!
//! `unfold` grows a tree from a seed, `fold` collapses it bottom-up, and `map`
//! is nothing more than a `fold` whose combiner rebuilds each node.

use std::fmt;
use std::mem;

use tracing::instrument;

/// Immutable, ordered-children tree node.
///
/// The order of `children` is significant: it is the order in which `fold`
/// hands folded child results to its combiner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<A> {
    pub(crate) value: A,
    children: Children<A>,
}

/// Owns the subtrees of a node and releases them without recursion, so
/// dropping a tree costs no call stack however deep it is.
#[derive(Clone, PartialEq, Eq)]
struct Children<A>(Vec<Tree<A>>);

impl<A> Drop for Children<A> {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.0);
        while let Some(mut node) = pending.pop() {
            // node goes out of scope with an empty child list
            pending.append(&mut node.children.0);
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Children<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<A> Tree<A> {
    pub fn new(value: A, children: Vec<Tree<A>>) -> Self {
        Self {
            value,
            children: Children(children),
        }
    }

    /// A node without children.
    pub fn leaf(value: A) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn value(&self) -> &A {
        &self.value
    }

    pub fn children(&self) -> &[Tree<A>] {
        &self.children.0
    }

    pub fn is_leaf(&self) -> bool {
        self.children.0.is_empty()
    }

    pub fn into_parts(mut self) -> (A, Vec<Tree<A>>) {
        let children = mem::take(&mut self.children.0);
        (self.value, children)
    }

    /// Builds a tree from `seed`.
    ///
    /// `generator` is called exactly once per node, in preorder. It returns the
    /// node's value and the seeds of its children, in order. An empty seed
    /// sequence makes the node a leaf; a generator that never returns one does
    /// not terminate.
    ///
    /// ```
    /// use treegami::Tree;
    ///
    /// let tree = Tree::unfold(|n: u32| (n, if n < 3 { vec![n + 1] } else { vec![] }), 1);
    /// assert_eq!(tree.fold(|v, acc: Vec<u32>| v + acc.iter().sum::<u32>()), 6);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn unfold<S, I, G>(mut generator: G, seed: S) -> Self
    where
        G: FnMut(S) -> (A, I),
        I: IntoIterator<Item = S>,
    {
        unfold_node(&mut generator, seed)
    }

    /// Reduces the tree to a single value, leaves first.
    ///
    /// `combiner` receives each node's value together with the folded results
    /// of its children, in declaration order. An empty result vector means the
    /// node is a leaf.
    #[instrument(level = "trace", skip_all)]
    pub fn fold<'a, R, F>(&'a self, mut combiner: F) -> R
    where
        F: FnMut(&'a A, Vec<R>) -> R,
    {
        fold_node(self, &mut combiner)
    }

    /// Consuming counterpart of [`fold`](Self::fold): the combiner takes
    /// ownership of every value.
    #[instrument(level = "trace", skip_all)]
    pub fn into_fold<R, F>(self, mut combiner: F) -> R
    where
        F: FnMut(A, Vec<R>) -> R,
    {
        into_fold_node(self, &mut combiner)
    }

    /// Transforms every value while keeping the shape, expressed as a fold.
    pub fn map<'a, B, F>(&'a self, mut transform: F) -> Tree<B>
    where
        F: FnMut(&'a A) -> B,
    {
        self.fold(|value, children| Tree::new(transform(value), children))
    }

    pub fn into_map<B, F>(self, mut transform: F) -> Tree<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_fold(|value, children| Tree::new(transform(value), children))
    }
}

impl<T> Tree<Option<T>> {
    /// Placeholder node: no value, no children.
    pub fn empty() -> Self {
        Self::leaf(None)
    }
}

impl<A: Default> Default for Tree<A> {
    fn default() -> Self {
        Self::leaf(A::default())
    }
}

fn unfold_node<S, A, I, G>(generator: &mut G, seed: S) -> Tree<A>
where
    G: FnMut(S) -> (A, I),
    I: IntoIterator<Item = S>,
{
    let (value, seeds) = generator(seed);
    let children = seeds
        .into_iter()
        .map(|seed| unfold_node(generator, seed))
        .collect();
    Tree::new(value, children)
}

fn fold_node<'a, A, R, F>(node: &'a Tree<A>, combiner: &mut F) -> R
where
    F: FnMut(&'a A, Vec<R>) -> R,
{
    let folded = node
        .children()
        .iter()
        .map(|child| fold_node(child, combiner))
        .collect();
    combiner(&node.value, folded)
}

fn into_fold_node<A, R, F>(node: Tree<A>, combiner: &mut F) -> R
where
    F: FnMut(A, Vec<R>) -> R,
{
    let (value, children) = node.into_parts();
    let folded = children
        .into_iter()
        .map(|child| into_fold_node(child, combiner))
        .collect();
    combiner(value, folded)
}
