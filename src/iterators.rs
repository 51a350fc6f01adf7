use crate::deque::Deque;
use crate::error::{Error, Result};
use crate::slot::NIL;
use std::iter::FusedIterator;

/// A forward iterator over the deque, from front to back. It is
/// constructed from the [`iter`] method on `Deque`.
///
/// Each `Iter` is a single pass over the items. Any number of them
/// can be taken from the same deque, and they advance independently.
///
/// [`iter`]: struct.Deque.html#method.iter
pub struct Iter<'l, T> {
    target: &'l Deque<T>,
    next_index: usize,
    remaining: usize,
}

impl<'l, T> Iter<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>, next_index: usize, remaining: usize) -> Self {
        Self {
            target,
            next_index,
            remaining,
        }
    }

    /// True while there are items left to yield.
    pub fn has_next(&self) -> bool {
        NIL != self.next_index
    }

    /// Yield the next item, or fail with [`Error::IterationExhausted`]
    /// once every item has been yielded. Calling it again after that
    /// keeps failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.push_back(1);
    ///
    /// let mut i = d.iter();
    /// assert!(i.has_next());
    /// assert_eq!(Ok(&1), i.try_next());
    /// assert!(!i.has_next());
    /// assert_eq!(Err(Error::IterationExhausted), i.try_next());
    /// ```
    pub fn try_next(&mut self) -> Result<&'l T> {
        self.next().ok_or(Error::IterationExhausted)
    }
}

impl<'l, T> Clone for Iter<'l, T> {
    fn clone(&self) -> Self {
        Self::new(self.target, self.next_index, self.remaining)
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if NIL != self.next_index {
            let node = self.target.node(self.next_index);
            self.next_index = node.next();
            self.remaining -= 1;
            Some(node.item())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l, T> ExactSizeIterator for Iter<'l, T> {}

impl<'l, T> FusedIterator for Iter<'l, T> {}

/// An owning iterator that takes items off the front of the deque. It
/// is constructed from the `IntoIterator` implementation on `Deque`.
pub struct IntoIter<T> {
    target: Deque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(target: Deque<T>) -> Self {
        Self { target }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), Some(self.target.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
