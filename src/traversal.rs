//! Common tree queries, all derived from `fold`.
//!
//! Traversal order is nothing but accumulator placement: `preorder` puts a
//! node's value in front of its children's results, `postorder` behind them.

use tracing::instrument;

use crate::tree::Tree;

impl<A> Tree<A> {
    /// Number of levels; a single leaf has depth 1.
    #[instrument(level = "debug", skip_all)]
    pub fn depth(&self) -> usize {
        self.fold(|_, acc: Vec<usize>| 1 + acc.into_iter().max().unwrap_or(0))
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.fold(|_, acc: Vec<usize>| 1 + acc.into_iter().sum::<usize>())
    }

    /// Values of all nodes without children, left to right.
    #[instrument(level = "debug", skip_all)]
    pub fn leaves(&self) -> Vec<&A> {
        self.fold(|value, acc: Vec<Vec<_>>| {
            if acc.is_empty() {
                vec![value]
            } else {
                acc.concat()
            }
        })
    }

    pub fn preorder(&self) -> Vec<&A> {
        self.fold(|value, acc: Vec<Vec<_>>| {
            let mut out = vec![value];
            out.extend(acc.into_iter().flatten());
            out
        })
    }

    pub fn postorder(&self) -> Vec<&A> {
        self.fold(|value, acc: Vec<Vec<_>>| {
            let mut out: Vec<_> = acc.into_iter().flatten().collect();
            out.push(value);
            out
        })
    }

    /// The tree with every value replaced by its child count.
    ///
    /// Two trees have the same shape exactly when their shapes are equal.
    pub fn shape(&self) -> Tree<usize> {
        self.fold(|_, children: Vec<Tree<usize>>| Tree::new(children.len(), children))
    }

    /// Lazy preorder iterator over the values.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter { stack: vec![self] }
    }
}

/// Preorder iterator driven by an explicit stack.
#[derive(Debug)]
pub struct Iter<'a, A> {
    stack: Vec<&'a Tree<A>>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(node.children().iter().rev());
        Some(&node.value)
    }
}

impl<'a, A> IntoIterator for &'a Tree<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // root
    // ├── child1
    // │   └── grandchild1
    // └── child2
    fn sample() -> Tree<&'static str> {
        Tree::new(
            "root",
            vec![
                Tree::new("child1", vec![Tree::leaf("grandchild1")]),
                Tree::leaf("child2"),
            ],
        )
    }

    #[test]
    fn given_sample_when_depth_then_counts_levels() {
        assert_eq!(sample().depth(), 3);
        assert_eq!(Tree::leaf(()).depth(), 1);
    }

    #[test]
    fn given_sample_when_size_then_counts_nodes() {
        assert_eq!(sample().size(), 4);
    }

    #[test]
    fn given_sample_when_leaves_then_returns_childless_nodes_in_order() {
        let tree = sample();
        assert_eq!(tree.leaves(), vec![&"grandchild1", &"child2"]);
    }

    #[test]
    fn given_sample_when_traversing_then_pre_and_postorder() {
        let tree = sample();
        assert_eq!(
            tree.preorder(),
            vec![&"root", &"child1", &"grandchild1", &"child2"]
        );
        assert_eq!(
            tree.postorder(),
            vec![&"grandchild1", &"child1", &"child2", &"root"]
        );
    }

    #[test]
    fn given_sample_when_iterating_then_matches_fold_preorder() {
        let tree = sample();
        let iterated: Vec<_> = tree.iter().collect();
        assert_eq!(iterated, tree.preorder());

        let mut count = 0;
        for _ in &tree {
            count += 1;
        }
        assert_eq!(count, tree.size());
    }

    #[test]
    fn given_sample_when_shape_then_records_child_counts() {
        let expected = Tree::new(
            2,
            vec![Tree::new(1, vec![Tree::leaf(0)]), Tree::leaf(0)],
        );
        assert_eq!(sample().shape(), expected);
        assert_eq!(sample().map(|s| s.len()).shape(), expected);
    }
}
