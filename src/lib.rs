//! Generic ordered trees driven by two dual recursion schemes.
//!
//! - [`Tree::unfold`] (anamorphism) grows a tree from a seed and a generator.
//! - [`Tree::fold`] (catamorphism) collapses a tree bottom-up with a combiner.
//! - [`Tree::map`] is a `fold` whose combiner rebuilds each node.
//!
//! The caller supplies behavior, the tree supplies structure: whether a node is
//! a leaf, or whether a traversal is preorder or postorder, is decided by the
//! combiner looking at its accumulator, not by the tree.
//!
//! ```
//! use treegami::Tree;
//!
//! let tree = Tree::unfold(|x: u32| (x, if x < 4 { vec![2 * x, 2 * x + 1] } else { vec![] }), 1);
//! let preorder = tree.fold(|x, acc: Vec<String>| {
//!     std::iter::once(x.to_string()).chain(acc).collect::<Vec<_>>().join(",")
//! });
//! assert_eq!(preorder, "1,2,4,5,3,6,7");
//! ```
//!
//! Checked variants live in [`fallible`], explicit-stack variants in
//! [`tree_stack`], rayon-backed ones in [`parallel`]. [`Evaluator`] picks one
//! of them from [`Settings`].

pub mod config;
pub mod errors;
pub mod evaluator;
pub mod fallible;
pub mod parallel;
pub mod traversal;
pub mod tree;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use config::{Settings, Strategy};
pub use errors::{TreeError, TreeResult};
pub use evaluator::Evaluator;
pub use fallible::exact_children;
pub use traversal::Iter;
pub use tree::Tree;
pub use tree_traits::TreeRender;
