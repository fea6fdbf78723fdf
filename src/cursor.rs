//! Positions inside a [`Tree`].
//!
//! A cursor is the tree's iterator in the classic container sense: it points at one stored value
//! (or past the last one) and can be moved to the next larger value. Nodes do not know their
//! parents, so every cursor carries the path it took from the root. Moving forward either
//! descends into the right subtree or pops that path back up to the nearest ancestor whose left
//! subtree we just finished.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let tree: Tree<_> = [10, 5, 15].into_iter().collect();
//!
//! let mut cursor = tree.begin();
//! assert_eq!(*cursor, 5);
//! cursor.move_next();
//! assert_eq!(*cursor, 10);
//! cursor.move_next();
//! assert_eq!(*cursor, 15);
//! cursor.move_next();
//! assert!(cursor == tree.end());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr;

use crate::iter::{Iter, IterMut};
use crate::node::{Handle, Node, NodeMut};
use crate::Tree;

/// Which slot of its parent a node on the path occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Root,
    Left,
    Right,
}

#[derive(Clone, Copy)]
struct Step<H> {
    node: H,
    side: Side,
}

/// The ancestor path of a cursor: the root first, the current node last. An empty path is the
/// end position.
#[derive(Clone)]
pub(crate) struct Path<H> {
    steps: Vec<Step<H>>,
}

impl<H> Path<H> {
    pub(crate) fn end() -> Self {
        Self { steps: Vec::new() }
    }

    fn push(&mut self, node: H, side: Side) {
        self.steps.push(Step { node, side });
    }
}

impl<H: Copy> Path<H> {
    pub(crate) fn current(&self) -> Option<H> {
        self.steps.last().map(|step| step.node)
    }

    pub(crate) fn is_end(&self) -> bool {
        self.steps.is_empty()
    }

    /// The path to the smallest value under `root`.
    pub(crate) fn first(root: Option<H>) -> Self
    where
        H: Handle,
    {
        let mut path = Self::end();
        if let Some(root) = root {
            path.push_left_spine(root, Side::Root);
        }
        path
    }

    /// The path to the largest value under `root`.
    pub(crate) fn last(root: Option<H>) -> Self
    where
        H: Handle,
    {
        let mut path = Self::end();
        let mut next = root.map(|node| (node, Side::Root));
        while let Some((node, side)) = next {
            path.push(node, side);
            next = node.right().map(|right| (right, Side::Right));
        }
        path
    }

    /// The path to the node holding `value`, or the end path if there is none.
    pub(crate) fn find(root: Option<H>, value: &H::Value) -> Self
    where
        H: Handle,
        H::Value: Ord,
    {
        let mut path = Self::end();
        let mut next = root.map(|node| (node, Side::Root));
        while let Some((node, side)) = next {
            path.push(node, side);
            next = match value.cmp(node.value()) {
                Ordering::Less => node.left().map(|left| (left, Side::Left)),
                Ordering::Equal => return path,
                Ordering::Greater => node.right().map(|right| (right, Side::Right)),
            };
        }
        Self::end()
    }

    /// The path to the smallest value strictly greater than `value`, or the end path if there is
    /// none.
    ///
    /// Every node greater than `value` is a candidate and everything smaller than it lies to its
    /// left, so the best candidate is the last one seen on the way down. It is also an ancestor
    /// of every node visited after it, which means truncating the path at that candidate leaves
    /// exactly its own ancestor path.
    pub(crate) fn min_greater_than(root: Option<H>, value: &H::Value) -> Self
    where
        H: Handle,
        H::Value: Ord,
    {
        let mut path = Self::end();
        let mut best = 0;
        let mut next = root.map(|node| (node, Side::Root));
        while let Some((node, side)) = next {
            path.push(node, side);
            next = if node.value() > value {
                best = path.steps.len();
                node.left().map(|left| (left, Side::Left))
            } else {
                node.right().map(|right| (right, Side::Right))
            };
        }
        path.steps.truncate(best);
        path
    }

    /// Moves to the in-order successor of the current node. Does nothing at the end.
    pub(crate) fn advance(&mut self)
    where
        H: Handle,
    {
        let Some(current) = self.current() else {
            return;
        };

        match current.right() {
            Some(right) => self.push_left_spine(right, Side::Right),
            None => {
                // Climb out of right subtrees. Leaving a left child puts its parent on top, which
                // is the successor. Leaving the root empties the path.
                while let Some(step) = self.steps.pop() {
                    if step.side == Side::Left {
                        break;
                    }
                }
            }
        }

        if cfg!(debug_assertions) {
            if let Some(root) = self.steps.first() {
                assert_eq!(root.side, Side::Root);
            }
        }
    }

    fn push_left_spine(&mut self, node: H, side: Side)
    where
        H: Handle,
    {
        self.push(node, side);
        let mut node = node;
        while let Some(left) = node.left() {
            self.push(left, Side::Left);
            node = left;
        }
    }
}

/// A read-only position in a [`Tree`], pointing either at a stored value or at the end.
///
/// Cursors from the same tree compare equal when they point at the same node or are both at the
/// end. The end cursor is returned by every lookup that finds nothing.
///
/// Dereferencing a cursor at the end panics; use [`Cursor::get`] to check first.
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    path: Path<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, path: Path<&'a Node<T>>) -> Self {
        Self { tree, path }
    }

    /// The value under the cursor, or `None` at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).get(), Some(&1));
    /// assert_eq!(tree.find(&2).get(), None);
    /// ```
    pub fn get(&self) -> Option<&'a T> {
        self.path.current().map(|node| &node.value)
    }

    /// Whether this is the end cursor.
    pub fn is_end(&self) -> bool {
        self.path.is_end()
    }

    /// Moves to the next larger value, or to the end after the largest one. Moving the end
    /// cursor leaves it at the end.
    pub fn move_next(&mut self) {
        self.path.advance();
    }

    /// An iterator over the values from this position onwards, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = (1..=5).collect();
    ///
    /// let above_two: Vec<_> = tree.min_greater_than(&2).iter().copied().collect();
    /// assert_eq!(above_two, [3, 4, 5]);
    /// ```
    pub fn iter(self) -> Iter<'a, T> {
        Iter::new(self)
    }

    pub(crate) fn tree(&self) -> &'a Tree<T> {
        self.tree
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            path: self.path.clone(),
        }
    }
}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        let here = self.path.current().map(ptr::from_ref);
        let there = other.path.current().map(ptr::from_ref);
        ptr::eq(self.tree, other.tree) && here == there
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> Deref for Cursor<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced the end cursor"),
        }
    }
}

impl<'a, T> fmt::Debug for Cursor<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

/// A position in a [`Tree`] that can write to the value it points at.
///
/// Writing through a cursor can break the tree's ordering. Nothing checks for that until
/// [`Tree::check_sorting_invariant`] is called; lookups on a tree in that state give unspecified
/// (but memory safe) answers.
///
/// Dereferencing a cursor at the end panics; use [`CursorMut::get`] to check first.
pub struct CursorMut<'a, T> {
    path: Path<NodeMut<'a, T>>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(path: Path<NodeMut<'a, T>>) -> Self {
        Self { path }
    }

    /// The value under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&T> {
        self.path.steps.last().map(|step| step.node.value())
    }

    /// Mutable access to the value under the cursor, or `None` at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [1, 0].into_iter().collect();
    /// if let Some(value) = tree.begin_mut().get_mut() {
    ///     *value = 2;
    /// }
    ///
    /// // The tree doesn't notice until asked.
    /// assert!(!tree.check_sorting_invariant());
    /// ```
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The returned reference borrows `self` mutably, so it can't outlive the cursor
        // or coexist with another reference the cursor hands out.
        self.path.current().map(|node| unsafe { node.value_mut() })
    }

    /// Converts the cursor into a mutable reference to its value for the full borrow of the
    /// tree, or `None` at the end.
    pub fn into_mut(self) -> Option<&'a mut T> {
        // SAFETY: The cursor is consumed so this is the only reference it ever gives out.
        self.path.current().map(|node| unsafe { node.value_mut() })
    }

    /// Whether this is the end cursor.
    pub fn is_end(&self) -> bool {
        self.path.is_end()
    }

    /// Moves to the next larger value, or to the end after the largest one.
    pub fn move_next(&mut self) {
        self.path.advance();
    }

    /// An iterator over mutable references to the values from this position onwards, in
    /// ascending order.
    pub fn into_iter_mut(self) -> IterMut<'a, T> {
        IterMut::new(self.path)
    }
}

impl<'a, T> Deref for CursorMut<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced the end cursor"),
        }
    }
}

impl<'a, T> DerefMut for CursorMut<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("dereferenced the end cursor"),
        }
    }
}

impl<'a, T> fmt::Debug for CursorMut<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complex_tree() -> Tree<i32> {
        [10, 5, 15, 3, 7, 12, 17].into_iter().collect()
    }

    fn sides(cursor: &Cursor<'_, i32>) -> Vec<Side> {
        cursor.path.steps.iter().map(|step| step.side).collect()
    }

    #[test]
    fn begin_records_left_spine() {
        let tree = complex_tree();
        let cursor = tree.begin();

        assert_eq!(*cursor, 3);
        assert_eq!(sides(&cursor), [Side::Root, Side::Left, Side::Left]);
    }

    #[test]
    fn successor_from_right_subtree() {
        let tree = complex_tree();
        let mut cursor = tree.find(&10);
        cursor.move_next();

        assert_eq!(*cursor, 12);
        assert_eq!(sides(&cursor), [Side::Root, Side::Right, Side::Left]);
    }

    #[test]
    fn successor_by_climbing() {
        let tree = complex_tree();
        let mut cursor = tree.find(&7);
        assert_eq!(sides(&cursor), [Side::Root, Side::Left, Side::Right]);

        cursor.move_next();
        assert_eq!(*cursor, 10);
        assert_eq!(sides(&cursor), [Side::Root]);
    }

    #[test]
    fn climbing_past_root_is_end() {
        let tree = complex_tree();
        let mut cursor = tree.max_element();
        assert_eq!(*cursor, 17);

        cursor.move_next();
        assert!(cursor.is_end());
        assert!(cursor == tree.end());

        // Stays put.
        cursor.move_next();
        assert!(cursor.is_end());
    }

    #[test]
    fn min_greater_than_keeps_full_path() {
        let tree = complex_tree();

        // 13 isn't stored: the walk goes 10 -> 15 -> 12 and keeps 15.
        let mut cursor = tree.min_greater_than(&13);
        assert_eq!(*cursor, 15);
        assert_eq!(sides(&cursor), [Side::Root, Side::Right]);

        cursor.move_next();
        assert_eq!(*cursor, 17);
    }

    #[test]
    fn cursors_from_different_trees_differ() {
        let a = complex_tree();
        let b = complex_tree();

        assert!(a.begin() != b.begin());
        assert!(a.end() != b.end());
        assert!(a.end() == a.end());
    }

    #[test]
    fn cursor_equality_is_by_node() {
        let tree = complex_tree();
        let mut cursor = tree.begin();
        cursor.move_next();

        assert!(cursor == tree.find(&5));
        assert!(cursor != tree.begin());
        assert!(cursor.clone() == cursor);
    }

    #[test]
    #[should_panic(expected = "dereferenced the end cursor")]
    fn deref_end_panics() {
        let tree: Tree<i32> = Tree::new();
        let _value: i32 = *tree.end();
    }

    #[test]
    fn cursor_mut_walks_and_writes() {
        let mut tree = complex_tree();
        let mut cursor = tree.begin_mut();

        while let Some(value) = cursor.get_mut() {
            *value *= 10;
            cursor.move_next();
        }

        let values: Vec<_> = tree.iter().copied().collect();
        assert_eq!(values, [30, 50, 70, 100, 120, 150, 170]);
        assert!(tree.check_sorting_invariant());
    }

    #[test]
    fn into_mut_outlives_cursor() {
        let mut tree = complex_tree();
        if let Some(value) = tree.find_mut(&3).into_mut() {
            *value = 4;
        }

        assert!(tree.check_sorting_invariant());
        assert_eq!(tree.first(), Some(&4));
    }

    #[test]
    fn cursor_mut_debug() {
        let mut tree = complex_tree();
        assert_eq!(format!("{:?}", tree.find_mut(&7)), "CursorMut(Some(7))");
        assert_eq!(format!("{:?}", tree.find_mut(&8)), "CursorMut(None)");
        assert_eq!(format!("{:?}", tree.find(&7)), "Cursor(Some(7))");
    }
}
