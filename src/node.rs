//! The element holder shared by [`Tree`][crate::Tree] and its cursors.

use std::marker::PhantomData;
use std::ptr::NonNull;

/// An exclusively owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single stored value with two owned children. A node never knows its parent: cursors
/// recover ancestry from the path they recorded on the way down.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A way of pointing at a node that can read its value and step to either child. Cursors are
/// written once against this trait and used both with shared references and with [`NodeMut`].
pub(crate) trait Handle: Copy {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(self) -> Option<Self>;
    fn right(self) -> Option<Self>;
}

impl<'a, T> Handle for &'a Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(self) -> Option<Self> {
        self.left.as_deref()
    }

    fn right(self) -> Option<Self> {
        self.right.as_deref()
    }
}

/// A mutable handle to a node, valid for `'a`.
///
/// Only the field that is needed is ever borrowed through it, so a `&'a mut T` handed out for a
/// node's value is never aliased by a reference to the whole node.
pub(crate) struct NodeMut<'a, T>(NonNull<Node<T>>, PhantomData<&'a mut Node<T>>);

impl<'a, T> Clone for NodeMut<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeMut<'a, T> {}

impl<'a, T> NodeMut<'a, T> {
    pub(crate) fn new(node: &'a mut Node<T>) -> Self {
        Self(NonNull::from(node), PhantomData)
    }

    /// # Safety
    ///
    /// The caller must ensure no other reference to this node's value is alive for as long as
    /// the returned reference is used.
    pub(crate) unsafe fn value_mut(self) -> &'a mut T {
        &mut (*self.0.as_ptr()).value
    }

    fn child(link: &'a mut Link<T>) -> Option<Self> {
        link.as_deref_mut().map(Self::new)
    }
}

impl<'a, T> Handle for NodeMut<'a, T> {
    type Value = T;

    fn value(&self) -> &T {
        // SAFETY: The handle was made from a `&'a mut Node` so the node is alive. Only the
        // `value` field is borrowed and only for as long as `&self`.
        unsafe { &(*self.0.as_ptr()).value }
    }

    fn left(self) -> Option<Self> {
        // SAFETY: `self` points to a live node borrowed for `'a`. Only the `left` slot is
        // borrowed here, never the value that might already be handed out.
        unsafe { Self::child(&mut (*self.0.as_ptr()).left) }
    }

    fn right(self) -> Option<Self> {
        // SAFETY: See `left`.
        unsafe { Self::child(&mut (*self.0.as_ptr()).right) }
    }
}
