//! Checked variants of the recursion schemes.
//!
//! Errors produced by caller functions are returned unchanged and stop the
//! traversal at the first failure. [`Tree::unfold_bounded`] and
//! [`exact_children`] add the only failures the crate raises itself.

use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::tree::Tree;

impl<A> Tree<A> {
    /// Like [`unfold`](Self::unfold), but the generator may fail.
    #[instrument(level = "trace", skip_all)]
    pub fn try_unfold<S, I, E, G>(mut generator: G, seed: S) -> Result<Self, E>
    where
        G: FnMut(S) -> Result<(A, I), E>,
        I: IntoIterator<Item = S>,
    {
        try_unfold_node(&mut generator, seed)
    }

    /// Unfold that refuses to grow deeper than `max_depth` levels.
    ///
    /// The root sits at level 1. Instead of generating a node below the limit
    /// the whole construction fails with [`TreeError::DepthExceeded`], which
    /// turns a runaway generator into an error rather than a stack overflow.
    #[instrument(level = "trace", skip_all, fields(max_depth = max_depth))]
    pub fn unfold_bounded<S, I, G>(mut generator: G, seed: S, max_depth: usize) -> TreeResult<Self>
    where
        G: FnMut(S) -> (A, I),
        I: IntoIterator<Item = S>,
    {
        Self::try_unfold(
            |leveled| level_step(leveled, max_depth, &mut generator),
            (1, seed),
        )
        .inspect_err(|e| debug!("unfold_bounded: {}", e))
    }

    #[instrument(level = "trace", skip_all)]
    pub fn try_fold<'a, R, E, F>(&'a self, mut combiner: F) -> Result<R, E>
    where
        F: FnMut(&'a A, Vec<R>) -> Result<R, E>,
    {
        try_fold_node(self, &mut combiner)
    }

    pub fn try_map<'a, B, E, F>(&'a self, mut transform: F) -> Result<Tree<B>, E>
    where
        F: FnMut(&'a A) -> Result<B, E>,
    {
        self.try_fold(|value, children| Ok(Tree::new(transform(value)?, children)))
    }
}

/// Takes ownership of exactly `N` folded child results.
///
/// Meant for combiners that only make sense for a fixed arity, such as a
/// binary node expecting a left and a right result.
///
/// ```
/// use treegami::{exact_children, TreeError};
///
/// let [l, r] = exact_children::<_, 2>(vec![1, 2]).unwrap();
/// assert_eq!(l + r, 3);
/// assert_eq!(
///     exact_children::<i32, 2>(vec![1]),
///     Err(TreeError::Arity { expected: 2, found: 1 })
/// );
/// ```
pub fn exact_children<R, const N: usize>(children: Vec<R>) -> TreeResult<[R; N]> {
    <[R; N]>::try_from(children).map_err(|rest| TreeError::Arity {
        expected: N,
        found: rest.len(),
    })
}

/// One generator step on a seed tagged with its level.
///
/// Child seeds come back tagged with the next level. A seed past `limit`
/// fails before the generator sees it.
pub(crate) fn level_step<S, A, I>(
    (level, seed): (usize, S),
    limit: usize,
    generator: impl FnOnce(S) -> (A, I),
) -> TreeResult<(A, Vec<(usize, S)>)>
where
    I: IntoIterator<Item = S>,
{
    if level > limit {
        return Err(TreeError::DepthExceeded { limit });
    }
    let (value, seeds) = generator(seed);
    Ok((value, seeds.into_iter().map(|s| (level + 1, s)).collect()))
}

fn try_unfold_node<S, A, I, E, G>(generator: &mut G, seed: S) -> Result<Tree<A>, E>
where
    G: FnMut(S) -> Result<(A, I), E>,
    I: IntoIterator<Item = S>,
{
    let (value, seeds) = generator(seed)?;
    let children = seeds
        .into_iter()
        .map(|seed| try_unfold_node(generator, seed))
        .collect::<Result<Vec<_>, E>>()?;
    Ok(Tree::new(value, children))
}

fn try_fold_node<'a, A, R, E, F>(node: &'a Tree<A>, combiner: &mut F) -> Result<R, E>
where
    F: FnMut(&'a A, Vec<R>) -> Result<R, E>,
{
    let folded = node
        .children()
        .iter()
        .map(|child| try_fold_node(child, combiner))
        .collect::<Result<Vec<_>, E>>()?;
    combiner(&node.value, folded)
}
