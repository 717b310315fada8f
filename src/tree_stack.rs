//! Non-recursive (iterative) versions of unfold and fold.
//!
//! They mimic the call stack of the recursive versions with an explicit
//! `Vec` of frames, so tree depth costs heap instead of stack. The `current`
//! frame is kept out of the stack; when it finishes it is handed to its
//! parent, and finishing with an empty stack means the root is done.

use std::convert::Infallible;
use std::mem;

use tracing::instrument;

use crate::tree::Tree;

struct UnfoldFrame<A, It> {
    value: A,
    seeds: It,
    children: Vec<Tree<A>>,
}

impl<A, It> UnfoldFrame<A, It> {
    fn new<I: IntoIterator<IntoIter = It>>((value, seeds): (A, I)) -> Self {
        Self {
            value,
            seeds: seeds.into_iter(),
            children: Vec::new(),
        }
    }
}

/// Iterative [`Tree::unfold`]. The generator sees seeds in the same preorder.
pub fn unfold_iterative<S, A, I, G>(mut generator: G, seed: S) -> Tree<A>
where
    G: FnMut(S) -> (A, I),
    I: IntoIterator<Item = S>,
{
    match try_unfold_iterative(|s| Ok::<_, Infallible>(generator(s)), seed) {
        Ok(tree) => tree,
        Err(never) => match never {},
    }
}

#[instrument(level = "trace", skip_all)]
pub fn try_unfold_iterative<S, A, I, E, G>(mut generator: G, seed: S) -> Result<Tree<A>, E>
where
    G: FnMut(S) -> Result<(A, I), E>,
    I: IntoIterator<Item = S>,
{
    let mut stack: Vec<UnfoldFrame<A, I::IntoIter>> = Vec::new();
    let mut current = UnfoldFrame::new(generator(seed)?);

    loop {
        match current.seeds.next() {
            Some(seed) => {
                let child = UnfoldFrame::new(generator(seed)?);
                stack.push(mem::replace(&mut current, child));
            }
            None => {
                let built = Tree::new(current.value, current.children);
                match stack.pop() {
                    Some(mut parent) => {
                        parent.children.push(built);
                        current = parent;
                    }
                    None => return Ok(built),
                }
            }
        }
    }
}

struct FoldFrame<'a, A, R> {
    node: &'a Tree<A>,
    next: std::slice::Iter<'a, Tree<A>>,
    folded: Vec<R>,
}

impl<'a, A, R> FoldFrame<'a, A, R> {
    fn new(node: &'a Tree<A>) -> Self {
        Self {
            node,
            next: node.children().iter(),
            folded: Vec::with_capacity(node.children().len()),
        }
    }
}

/// Iterative [`Tree::fold`].
pub fn fold_iterative<'a, A, R, F>(tree: &'a Tree<A>, mut combiner: F) -> R
where
    F: FnMut(&'a A, Vec<R>) -> R,
{
    match try_fold_iterative(tree, |value, folded| Ok::<_, Infallible>(combiner(value, folded))) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

#[instrument(level = "trace", skip_all)]
pub fn try_fold_iterative<'a, A, R, E, F>(tree: &'a Tree<A>, mut combiner: F) -> Result<R, E>
where
    F: FnMut(&'a A, Vec<R>) -> Result<R, E>,
{
    let mut stack: Vec<FoldFrame<'a, A, R>> = Vec::new();
    let mut current = FoldFrame::new(tree);

    loop {
        match current.next.next() {
            Some(child) => stack.push(mem::replace(&mut current, FoldFrame::new(child))),
            None => {
                let result = combiner(&current.node.value, current.folded)?;
                match stack.pop() {
                    Some(mut parent) => {
                        parent.folded.push(result);
                        current = parent;
                    }
                    None => return Ok(result),
                }
            }
        }
    }
}

struct IntoFoldFrame<A, R> {
    value: A,
    rest: std::vec::IntoIter<Tree<A>>,
    folded: Vec<R>,
}

impl<A, R> IntoFoldFrame<A, R> {
    fn new(node: Tree<A>) -> Self {
        let (value, children) = node.into_parts();
        Self {
            value,
            folded: Vec::with_capacity(children.len()),
            rest: children.into_iter(),
        }
    }
}

/// Iterative [`Tree::into_fold`].
///
/// Every node is taken apart as it is visited, so a very deep tree is also
/// released without recursion.
#[instrument(level = "trace", skip_all)]
pub fn into_fold_iterative<A, R, F>(tree: Tree<A>, mut combiner: F) -> R
where
    F: FnMut(A, Vec<R>) -> R,
{
    let mut stack: Vec<IntoFoldFrame<A, R>> = Vec::new();
    let mut current = IntoFoldFrame::new(tree);

    loop {
        match current.rest.next() {
            Some(child) => stack.push(mem::replace(&mut current, IntoFoldFrame::new(child))),
            None => {
                let result = combiner(current.value, current.folded);
                match stack.pop() {
                    Some(mut parent) => {
                        parent.folded.push(result);
                        current = parent;
                    }
                    None => return result,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ternary(x: u32) -> (u32, Vec<u32>) {
        if x < 13 {
            (x, vec![3 * x + 1, 3 * x + 2, 3 * x + 3])
        } else {
            (x, vec![])
        }
    }

    fn preorder(x: &u32, acc: Vec<String>) -> String {
        std::iter::once(x.to_string()).chain(acc).collect::<Vec<_>>().join(",")
    }

    #[test]
    fn given_same_generator_when_unfolding_iteratively_then_matches_recursive() {
        assert_eq!(unfold_iterative(ternary, 0), Tree::unfold(ternary, 0));
    }

    #[test]
    fn given_same_generator_when_unfolding_iteratively_then_same_call_order() {
        let mut recursive_calls = Vec::new();
        let mut iterative_calls = Vec::new();

        Tree::unfold(
            |x| {
                recursive_calls.push(x);
                ternary(x)
            },
            0,
        );
        unfold_iterative(
            |x| {
                iterative_calls.push(x);
                ternary(x)
            },
            0,
        );

        assert_eq!(iterative_calls, recursive_calls);
    }

    #[test]
    fn given_tree_when_folding_iteratively_then_matches_recursive() {
        let tree = Tree::unfold(ternary, 0);
        assert_eq!(fold_iterative(&tree, preorder), tree.fold(preorder));
    }

    #[test]
    fn given_owned_tree_when_into_fold_iterative_then_matches_into_fold() {
        let tree = Tree::unfold(ternary, 0);
        let sum = |x: u32, acc: Vec<u64>| u64::from(x) + acc.iter().sum::<u64>();
        assert_eq!(into_fold_iterative(tree.clone(), sum), tree.into_fold(sum));
    }

    #[test]
    fn given_single_node_when_folding_iteratively_then_combiner_sees_empty_acc() {
        let tree = Tree::leaf(7);
        let result = fold_iterative(&tree, |&x, acc: Vec<i32>| if acc.is_empty() { -x } else { x });
        assert_eq!(result, -7);
    }

    #[test]
    fn given_failing_generator_when_try_unfold_iterative_then_returns_error() {
        let result = try_unfold_iterative(
            |x: u32| if x == 5 { Err(x) } else { Ok(ternary(x)) },
            0,
        );
        assert_eq!(result, Err(5));
    }

    #[test]
    fn given_failing_combiner_when_try_fold_iterative_then_returns_error() {
        let tree = Tree::unfold(ternary, 0);
        let result = try_fold_iterative(&tree, |&x, acc: Vec<u32>| {
            if x == 14 {
                Err("fourteen")
            } else {
                Ok(x + acc.iter().sum::<u32>())
            }
        });
        assert_eq!(result, Err("fourteen"));
    }

    #[test]
    fn given_very_deep_path_when_unfold_and_fold_iteratively_then_no_stack_growth() {
        const DEPTH: u64 = 200_000;
        let path = unfold_iterative(|n: u64| (n, if n < DEPTH { vec![n + 1] } else { vec![] }), 1);
        let (sum, depth) = into_fold_iterative(path, |n, acc: Vec<(u64, u64)>| {
            let (sum, depth) = acc.first().copied().unwrap_or((0, 0));
            (sum + n, depth + 1)
        });
        assert_eq!(depth, DEPTH);
        assert_eq!(sum, DEPTH * (DEPTH + 1) / 2);
    }

    #[test]
    fn given_very_deep_path_when_folded_by_reference_then_drops_cleanly() {
        const DEPTH: usize = 200_000;
        let path = unfold_iterative(|n: usize| (n, if n < DEPTH { vec![n + 1] } else { vec![] }), 1);

        let size = fold_iterative(&path, |_, acc: Vec<usize>| 1 + acc.iter().sum::<usize>());
        let bottom = fold_iterative(&path, |&n, acc: Vec<usize>| acc.first().copied().unwrap_or(n));

        assert_eq!(size, DEPTH);
        assert_eq!(bottom, DEPTH);
        drop(path);
    }
}
