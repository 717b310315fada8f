//! Strategy dispatch for unfold, fold and map.

use std::path::Path;

use tracing::{debug, instrument};

use crate::config::{Settings, Strategy};
use crate::errors::TreeResult;
use crate::fallible::level_step;
use crate::parallel::{par_try_unfold, par_unfold};
use crate::tree::Tree;
use crate::tree_stack::{
    fold_iterative, try_fold_iterative, try_unfold_iterative, unfold_iterative,
};

/// Runs the recursion schemes with the strategy and depth limit from
/// [`Settings`].
///
/// Every strategy produces identical trees and results; they differ only in
/// how the work is scheduled. Callbacks therefore carry the strictest bounds
/// (`Fn + Sync`) needed by the parallel strategy.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    settings: Settings,
}

impl Evaluator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Evaluator configured through [`Settings::load`].
    pub fn load(path: Option<&Path>) -> TreeResult<Self> {
        Settings::load(path).map(Self::new)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Unfolds with the configured strategy.
    ///
    /// Fails with [`TreeError::DepthExceeded`](crate::TreeError::DepthExceeded)
    /// only when `max_depth` is set and the generator goes past it.
    #[instrument(level = "trace", skip_all)]
    pub fn unfold<S, A, I, G>(&self, generator: G, seed: S) -> TreeResult<Tree<A>>
    where
        G: Fn(S) -> (A, I) + Sync,
        I: IntoIterator<Item = S>,
        S: Send,
        A: Send,
    {
        let Settings {
            strategy,
            max_depth,
        } = self.settings;
        debug!("unfold: strategy={:?} max_depth={:?}", strategy, max_depth);

        let step = |seed: S| {
            let (value, seeds) = generator(seed);
            (value, seeds.into_iter().collect::<Vec<_>>())
        };

        let Some(limit) = max_depth else {
            return Ok(match strategy {
                Strategy::Recursive => Tree::unfold(step, seed),
                Strategy::Iterative => unfold_iterative(step, seed),
                Strategy::Parallel => par_unfold(step, seed),
            });
        };

        let bounded = |leveled: (usize, S)| level_step(leveled, limit, &step);
        match strategy {
            Strategy::Recursive => Tree::try_unfold(bounded, (1, seed)),
            Strategy::Iterative => try_unfold_iterative(bounded, (1, seed)),
            Strategy::Parallel => par_try_unfold(bounded, (1, seed)),
        }
    }

    #[instrument(level = "trace", skip_all)]
    pub fn fold<'a, A, R, F>(&self, tree: &'a Tree<A>, combiner: F) -> R
    where
        A: Sync,
        R: Send,
        F: Fn(&'a A, Vec<R>) -> R + Sync,
    {
        debug!("fold: strategy={:?}", self.settings.strategy);
        match self.settings.strategy {
            Strategy::Recursive => tree.fold(combiner),
            Strategy::Iterative => fold_iterative(tree, combiner),
            Strategy::Parallel => tree.par_fold(combiner),
        }
    }

    #[instrument(level = "trace", skip_all)]
    pub fn try_fold<'a, A, R, E, F>(&self, tree: &'a Tree<A>, combiner: F) -> Result<R, E>
    where
        A: Sync,
        R: Send,
        E: Send,
        F: Fn(&'a A, Vec<R>) -> Result<R, E> + Sync,
    {
        debug!("try_fold: strategy={:?}", self.settings.strategy);
        match self.settings.strategy {
            Strategy::Recursive => tree.try_fold(combiner),
            Strategy::Iterative => try_fold_iterative(tree, combiner),
            Strategy::Parallel => tree.par_try_fold(combiner),
        }
    }

    /// Map through [`fold`](Self::fold) with a node-rebuilding combiner.
    pub fn map<'a, A, B, F>(&self, tree: &'a Tree<A>, transform: F) -> Tree<B>
    where
        A: Sync,
        B: Send,
        F: Fn(&'a A) -> B + Sync,
    {
        self.fold(tree, |value, children| Tree::new(transform(value), children))
    }
}
