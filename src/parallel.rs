//! Per-subtree parallel evaluation on the rayon thread pool.
//!
//! Sibling subtrees are independent, so they are unfolded or folded as
//! parallel tasks joined by their parent. Results are collected through
//! indexed parallel iterators: children still arrive in declaration order.

use rayon::prelude::*;
use tracing::instrument;

use crate::tree::Tree;

#[instrument(level = "trace", skip_all)]
pub fn par_unfold<S, A, G>(generator: G, seed: S) -> Tree<A>
where
    G: Fn(S) -> (A, Vec<S>) + Sync,
    S: Send,
    A: Send,
{
    par_unfold_node(&generator, seed)
}

#[instrument(level = "trace", skip_all)]
pub fn par_try_unfold<S, A, E, G>(generator: G, seed: S) -> Result<Tree<A>, E>
where
    G: Fn(S) -> Result<(A, Vec<S>), E> + Sync,
    S: Send,
    A: Send,
    E: Send,
{
    par_try_unfold_node(&generator, seed)
}

impl<A: Sync> Tree<A> {
    /// Parallel [`fold`](Self::fold).
    #[instrument(level = "trace", skip_all)]
    pub fn par_fold<'a, R, F>(&'a self, combiner: F) -> R
    where
        F: Fn(&'a A, Vec<R>) -> R + Sync,
        R: Send,
    {
        par_fold_node(self, &combiner)
    }

    #[instrument(level = "trace", skip_all)]
    pub fn par_try_fold<'a, R, E, F>(&'a self, combiner: F) -> Result<R, E>
    where
        F: Fn(&'a A, Vec<R>) -> Result<R, E> + Sync,
        R: Send,
        E: Send,
    {
        par_try_fold_node(self, &combiner)
    }

    /// Parallel [`map`](Self::map), still expressed as a fold.
    pub fn par_map<'a, B, F>(&'a self, transform: F) -> Tree<B>
    where
        F: Fn(&'a A) -> B + Sync,
        B: Send,
    {
        self.par_fold(|value, children| Tree::new(transform(value), children))
    }
}

fn par_unfold_node<S, A, G>(generator: &G, seed: S) -> Tree<A>
where
    G: Fn(S) -> (A, Vec<S>) + Sync,
    S: Send,
    A: Send,
{
    let (value, seeds) = generator(seed);
    let children = seeds
        .into_par_iter()
        .map(|seed| par_unfold_node(generator, seed))
        .collect();
    Tree::new(value, children)
}

fn par_try_unfold_node<S, A, E, G>(generator: &G, seed: S) -> Result<Tree<A>, E>
where
    G: Fn(S) -> Result<(A, Vec<S>), E> + Sync,
    S: Send,
    A: Send,
    E: Send,
{
    let (value, seeds) = generator(seed)?;
    let children = seeds
        .into_par_iter()
        .map(|seed| par_try_unfold_node(generator, seed))
        .collect::<Result<Vec<_>, E>>()?;
    Ok(Tree::new(value, children))
}

fn par_fold_node<'a, A, R, F>(node: &'a Tree<A>, combiner: &F) -> R
where
    A: Sync,
    F: Fn(&'a A, Vec<R>) -> R + Sync,
    R: Send,
{
    let folded = node
        .children()
        .par_iter()
        .map(|child| par_fold_node(child, combiner))
        .collect();
    combiner(&node.value, folded)
}

fn par_try_fold_node<'a, A, R, E, F>(node: &'a Tree<A>, combiner: &F) -> Result<R, E>
where
    A: Sync,
    F: Fn(&'a A, Vec<R>) -> Result<R, E> + Sync,
    R: Send,
    E: Send,
{
    let folded = node
        .children()
        .par_iter()
        .map(|child| par_try_fold_node(child, combiner))
        .collect::<Result<Vec<_>, E>>()?;
    combiner(&node.value, folded)
}
