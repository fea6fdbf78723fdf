//! An unbalanced BST holding a set of values.
//!
//! Values are kept in the order of their [`Ord`] implementation and each value is stored at most
//! once. Nothing rebalances the tree, so its height depends entirely on insertion order: sorted
//! input degenerates into a list.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! tree.insert(10);
//! tree.insert(5);
//! tree.insert(15);
//!
//! // Inserting a value that's already there changes nothing.
//! assert!(!tree.insert(10));
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.height(), 2);
//!
//! // Lookups return cursors; "not found" is the end cursor.
//! assert_eq!(*tree.find(&5), 5);
//! assert!(tree.find(&7) == tree.end());
//! assert_eq!(*tree.min_greater_than(&7), 10);
//!
//! let mut inorder = String::new();
//! tree.traverse_inorder(&mut inorder).unwrap();
//! assert_eq!(inorder, "5 10 15 ");
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::{Cursor, CursorMut, Path};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::node::{Link, Node, NodeMut};

/// A Binary Search Tree of unique values. See the [module documentation][self] for an overview.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies every node into a new tree of the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15].into_iter().collect();
    /// let mut copy = tree.clone();
    /// copy.insert(20);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(copy.len(), 4);
    /// ```
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.copy_nodes(self);
        copy
    }

    /// Releases every node of `self` before copying `source` into it.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_nodes(source);
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        // A work-list instead of the default recursive drop so that a tree degenerated into a
        // list doesn't overflow the stack.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The number of nodes on the longest path from the root to a leaf. A single value has
    /// height 1 and the empty tree has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let skewed: Tree<_> = (1..=3).collect();
    /// assert_eq!(skewed.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// A cursor at the smallest value, or the end cursor if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Path::first(self.root.as_deref()))
    }

    /// The cursor one past the largest value.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Path::end())
    }

    /// A mutable cursor at the smallest value. See [`CursorMut`] for the caveats of writing
    /// through it.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(Path::first(self.root.as_deref_mut().map(NodeMut::new)))
    }

    /// A cursor at the smallest value, or the end cursor if the tree is empty. This is the same
    /// position as [`Tree::begin`].
    pub fn min_element(&self) -> Cursor<'_, T> {
        self.begin()
    }

    /// A cursor at the largest value, or the end cursor if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 5].into_iter().collect();
    /// assert_eq!(*tree.max_element(), 20);
    ///
    /// let empty: Tree<i32> = Tree::new();
    /// assert!(empty.max_element() == empty.end());
    /// ```
    pub fn max_element(&self) -> Cursor<'_, T> {
        Cursor::new(self, Path::last(self.root.as_deref()))
    }

    /// The smallest value, if any.
    pub fn first(&self) -> Option<&T> {
        self.min_element().get()
    }

    /// The largest value, if any.
    pub fn last(&self) -> Option<&T> {
        self.max_element().get()
    }

    /// An ascending iterator over the values.
    pub fn iter(&self) -> Iter<'_, T> {
        self.begin().iter()
    }

    /// An ascending iterator over mutable references to the values. See [`CursorMut`] for the
    /// caveats of writing through them.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.begin_mut().into_iter_mut()
    }

    /// Walks the tree and reports whether its values are strictly ascending in order, i.e.
    /// whether nothing written through a [`CursorMut`] or [`IterMut`] has broken the ordering.
    ///
    /// Nothing else in the tree runs this check.
    pub fn check_sorting_invariant(&self) -> bool
    where
        T: Ord,
    {
        let mut values = self.iter();
        let Some(mut previous) = values.next() else {
            return true;
        };
        for value in values {
            if previous >= value {
                return false;
            }
            previous = value;
        }
        true
    }

    /// Writes every value followed by a single space, left subtree first, then the node, then
    /// the right subtree. That is, in ascending order.
    pub fn traverse_inorder<W>(&self, sink: &mut W) -> fmt::Result
    where
        W: fmt::Write,
        T: fmt::Display,
    {
        for value in self {
            write!(sink, "{value} ")?;
        }
        Ok(())
    }

    /// Writes every value followed by a single space, the node first, then its left subtree,
    /// then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 5].into_iter().collect();
    ///
    /// let mut preorder = String::new();
    /// tree.traverse_preorder(&mut preorder).unwrap();
    /// assert_eq!(preorder, "10 5 20 ");
    /// ```
    pub fn traverse_preorder<W>(&self, sink: &mut W) -> fmt::Result
    where
        W: fmt::Write,
        T: fmt::Display,
    {
        let mut pending: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            write!(sink, "{} ", node.value)?;
            // Right goes under left so that left is visited first.
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }
        Ok(())
    }

    /// Mirrors every node of `source` into `self`, which must be empty.
    fn copy_nodes(&mut self, source: &Self)
    where
        T: Clone,
    {
        let mut copied = 0;
        let mut pending: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
        if let Some(root) = source.root.as_deref() {
            pending.push((root, &mut self.root));
        }
        while let Some((from, slot)) = pending.pop() {
            let Node { left, right, .. } = &mut **slot.insert(Node::new_boxed(from.value.clone()));
            copied += 1;
            if let Some(from_left) = from.left.as_deref() {
                pending.push((from_left, left));
            }
            if let Some(from_right) = from.right.as_deref() {
                pending.push((from_right, right));
            }
        }

        if cfg!(debug_assertions) {
            assert_eq!(copied, source.len);
        }
        self.len = source.len;
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` unless an equal value is already stored. Returns whether the tree
    /// changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// A cursor at the stored value equal to `value`, or the end cursor if there is none.
    pub fn find(&self, value: &T) -> Cursor<'_, T> {
        Cursor::new(self, Path::find(self.root.as_deref(), value))
    }

    /// A mutable cursor at the stored value equal to `value`, or the end cursor if there is
    /// none. See [`CursorMut`] for the caveats of writing through it.
    pub fn find_mut(&mut self, value: &T) -> CursorMut<'_, T> {
        CursorMut::new(Path::find(self.root.as_deref_mut().map(NodeMut::new), value))
    }

    /// Whether a value equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        !self.find(value).is_end()
    }

    /// A cursor at the smallest stored value strictly greater than `value`, or the end cursor if
    /// there is none. `value` itself doesn't need to be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 5].into_iter().collect();
    ///
    /// assert_eq!(*tree.min_greater_than(&10), 20);
    /// assert_eq!(*tree.min_greater_than(&4), 5);
    /// assert!(tree.min_greater_than(&20) == tree.end());
    /// ```
    pub fn min_greater_than(&self, value: &T) -> Cursor<'_, T> {
        Cursor::new(self, Path::min_greater_than(self.root.as_deref(), value))
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let len = std::mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
