//! An unbalanced Binary Search Tree (BST) set with cursors, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values in `Node`s. Every `Node` holds one value and may have a
//! left and a right child `Node`. The invariant that makes it a _search_ tree is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than its own
//!    value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`, where `height` is the number of `Node`s on the
//! longest path from the root `Node` to a leaf `Node`. [`Tree`] never rebalances, so inserting
//! sorted values produces a tree whose height equals its length.
//!
//! ## Cursors
//!
//! Lookups return a [`Cursor`]: a position that points at a stored value or one past the largest
//! one (the "end" cursor). A `Node` has no pointer to its parent, so a cursor remembers the path
//! from the root to its position and uses it to step to the next larger value.
//!
//! A [`CursorMut`] can also write to the value it points at. Doing so can break the ordering
//! invariant above; [`Tree::check_sorting_invariant`] is the only thing that will notice.
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(1);
//! tree.insert(0);
//! assert!(tree.check_sorting_invariant());
//!
//! *tree.begin_mut() = 2;
//! assert!(!tree.check_sorting_invariant());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod cursor;
mod iter;
mod node;
mod tree;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use tree::Tree;
