//! Append-ordered persistent linked lists.
//!
//! A [`List`] is a forward chain of reference-counted nodes. The chain
//! is immutable once built: [`List::tail`] shares the suffix with its
//! source instead of copying it, and [`List::append`] builds a fresh
//! spine rather than splicing onto a chain another list may be viewing.
//! Structural sharing is therefore never observable as mutation.
//!
//! In contrast to [`Array`](crate::Array), degenerate inputs are never
//! fatal: the head of an empty list is the empty marker and the tail of
//! an empty list is an empty list.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::array::Array;

/// Spine buffer size for `append`. Lists in generated code are
/// typically short argument or field chains.
const SPINE_INLINE: usize = 8;

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Rc<Node<T>>>;

/// An append-ordered, structurally shared singly-linked list.
pub struct List<T> {
    head: Link<T>,
}

impl<T> List<T> {
    /// The list with no nodes.
    pub const fn empty() -> Self {
        Self { head: None }
    }

    /// The list holding exactly `value`.
    pub fn singleton(value: T) -> Self {
        Self {
            head: Some(Rc::new(Node { value, next: None })),
        }
    }

    /// The first element, or `None` for an empty list. Never fatal.
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// A new list viewing the chain past the first node.
    ///
    /// The suffix is shared with `self`, not copied, and `self` is
    /// unchanged. The tail of an empty list is an empty list; never
    /// fatal.
    pub fn tail(&self) -> Self {
        Self {
            head: self.head.as_ref().and_then(|node| node.next.clone()),
        }
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The node count. O(n): counted by traversal on every call.
    pub fn len(&self) -> i32 {
        self.iter().count() as i32
    }

    /// Iterate the elements in append order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Clone> List<T> {
    /// The list of `count` nodes all holding `value`.
    ///
    /// `count <= 0` yields the empty list; never fatal.
    pub fn replicate(value: T, count: i32) -> Self {
        let mut head = None;
        for _ in 0..count.max(0) {
            head = Some(Rc::new(Node {
                value: value.clone(),
                next: head,
            }));
        }
        Self { head }
    }

    /// A new list with `value` appended after this list's elements.
    ///
    /// O(n) in the current length: the spine is rebuilt by full
    /// traversal on every call. This cost is part of the runtime's
    /// documented contract (see `ort-bench`). `self` is unchanged, and
    /// lists sharing a suffix with `self` never observe the append.
    pub fn append(&self, value: T) -> Self {
        let spine: SmallVec<[T; SPINE_INLINE]> = self.iter().cloned().collect();
        let mut head = Some(Rc::new(Node { value, next: None }));
        for value in spine.into_iter().rev() {
            head = Some(Rc::new(Node { value, next: head }));
        }
        Self { head }
    }

    /// Materialize the chain as a fully populated [`Array`], in append
    /// order. The empty list yields a zero-length array.
    ///
    /// This is the single conversion bridge between the two containers.
    pub fn to_array(&self) -> Array<T> {
        self.iter().cloned().collect()
    }
}

/// Cheap: shares the entire chain with the source list.
impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build a list from element values, preserving iteration order.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut head = None;
        while let Some(value) = values.pop() {
            head = Some(Rc::new(Node { value, next: head }));
        }
        Self { head }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x == y => {}
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

/// Unlink the chain iteratively while this list is the sole owner.
///
/// The derived recursive drop would overflow the stack on long chains.
/// A node still shared with another list stops the walk; the remaining
/// owners keep the suffix alive.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(rc) = cursor {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => cursor = node.next.take(),
                Err(_shared) => break,
            }
        }
    }
}

/// Borrowing iterator over a [`List`], in append order.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}
