//! Ascending iterators over a [`Tree`].

use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{Cursor, Path};
use crate::node::{Link, Node, NodeMut};
use crate::Tree;

/// An ascending iterator over shared references to the values of a [`Tree`].
///
/// Created by [`Tree::iter`] or [`Cursor::iter`].
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(cursor: Cursor<'a, T>) -> Self {
        Self { cursor }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.cursor.get()?;
        self.cursor.move_next();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = usize::from(!self.cursor.is_end());
        (lower, Some(self.cursor.tree().len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, T> fmt::Debug for Iter<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An ascending iterator over mutable references to the values of a [`Tree`].
///
/// Created by [`Tree::iter_mut`] or [`CursorMut::into_iter_mut`][crate::CursorMut::into_iter_mut].
/// Writing through these references can break the tree's ordering; see
/// [`Tree::check_sorting_invariant`].
pub struct IterMut<'a, T> {
    path: Path<NodeMut<'a, T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(path: Path<NodeMut<'a, T>>) -> Self {
        Self { path }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let node = self.path.current()?;
        // Stepping on only reads child slots, never values, so it can happen before the value is
        // borrowed.
        self.path.advance();
        // SAFETY: The walk visits every node once, so no other reference to this value has been
        // or will be handed out by this iterator.
        Some(unsafe { node.value_mut() })
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// An owning ascending iterator over the values of a [`Tree`].
///
/// Created by [`Tree::into_iter`][IntoIterator::into_iter]. Nodes are released as the iterator
/// passes them.
pub struct IntoIter<T> {
    /// Nodes whose left subtree has already been detached and yielded (or pushed), in the order
    /// they will be visited from the top.
    pending: Vec<Box<Node<T>>>,
    len: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.pending.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let Node { value, right, .. } = *self.pending.pop()?;
        self.len -= 1;
        self.push_left_spine(right);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Dropping the pending nodes directly would recurse down their right subtrees.
        for _ in self.by_ref() {}
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Tree<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
