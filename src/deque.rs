use crate::error::{Error, Result};
use crate::iterators::{IntoIter, Iter};
use crate::slot::{Node, Slot, NIL};
use std::fmt;
use std::iter::FromIterator;
use tracing::trace;

/// A double-ended queue backed by a doubly-linked list. Items can be
/// inserted and removed at either end in constant time.
pub struct Deque<T> {
    // Index of the first element on the free list. NIL when the
    // free-list is empty.
    free_list: usize,
    // The index of the head of the deque. NIL when the deque is empty.
    pub(crate) head: usize,
    // The index of the tail of the deque. NIL when the deque is empty.
    pub(crate) tail: usize,
    // The number of slots currently holding items.
    len_used: usize,
    // The number of slots currently on the free list.
    len_free: usize,
    // The arena holding every node of the chain.
    pub(crate) slots: Vec<Slot<T>>,
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`. No allocations are performed until
    /// items are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            free_list: NIL,
            head: NIL,
            tail: NIL,
            len_used: 0,
            len_free: 0,
            slots: Vec::new(),
        }
    }

    /// Create a new `Deque` instance with a freelist at least
    /// `capacity` elements deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::with_capacity(16);
    /// assert_eq!(16, deque.len_freelist());
    /// ```
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        let mut slots = Vec::with_capacity(capacity);

        let mut next = NIL;
        for i in 0..capacity {
            slots.push(Slot::new_free(next));
            next = i;
        }

        Deque {
            free_list: next,
            head: NIL,
            tail: NIL,
            len_used: 0,
            len_free: capacity,
            slots,
        }
    }

    /// Reserves room for at least `additional` more nodes in the
    /// arena. This only grows the underlying `Vec`; the reserved room
    /// is not added to the free list.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }

    /// Returns how many nodes the arena can hold without resizing.
    /// This is not necessarily `len() + len_freelist()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let d: Deque<u8> = Deque::with_capacity(16);
    /// assert_eq!(16, d.capacity());
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The number of items in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_front(1);
    /// d.push_back(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.pop_front();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the deque holds no items.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// assert!(d.is_empty());
    ///
    /// d.push_front(1);
    /// assert!(!d.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        0 == self.len_used
    }

    /// The number of vacant slots waiting to be reused.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// d.push_front(1);
    /// assert_eq!(0, d.len_freelist());
    ///
    /// d.pop_front();
    /// assert_eq!(1, d.len_freelist());
    ///
    /// d.push_back(2);
    /// assert_eq!(0, d.len_freelist());
    /// ```
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Insert `item` at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_front(1);
    /// d.push_front(2);
    ///
    /// assert_eq!(Some(&2), d.front());
    /// assert_eq!(Some(&1), d.back());
    /// ```
    pub fn push_front(&mut self, item: T) {
        let old_head = self.head;
        let ix = self.allocate(NIL, old_head, item);

        if NIL != old_head {
            self.node_mut(old_head).set_prev(ix);
        } else {
            // The deque was empty, so the new node is both ends.
            self.tail = ix;
        }
        self.head = ix;
    }

    /// Insert `item` at the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(1);
    /// d.push_back(2);
    ///
    /// assert_eq!(Some(&1), d.front());
    /// assert_eq!(Some(&2), d.back());
    /// ```
    pub fn push_back(&mut self, item: T) {
        let old_tail = self.tail;
        let ix = self.allocate(old_tail, NIL, item);

        if NIL != old_tail {
            self.node_mut(old_tail).set_next(ix);
        } else {
            self.head = ix;
        }
        self.tail = ix;
    }

    /// Insert `item` at the front of the deque, rejecting an absent
    /// item with [`Error::InvalidArgument`]. The deque is unchanged on
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(Ok(()), d.add_first(Some(10)));
    /// assert_eq!(Err(Error::InvalidArgument), d.add_first(None));
    /// assert_eq!(1, d.len());
    /// ```
    pub fn add_first(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(Error::InvalidArgument)?;
        self.push_front(item);
        Ok(())
    }

    /// Insert `item` at the back of the deque, rejecting an absent
    /// item with [`Error::InvalidArgument`]. The deque is unchanged on
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(Ok(()), d.add_last(Some(10)));
    /// assert_eq!(Err(Error::InvalidArgument), d.add_last(None));
    /// assert_eq!(1, d.len());
    /// ```
    pub fn add_last(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(Error::InvalidArgument)?;
        self.push_back(item);
        Ok(())
    }

    /// Remove the front of the deque and return it. If the deque is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    /// d.push_back(20);
    ///
    /// assert_eq!(Some(10), d.pop_front());
    /// assert_eq!(Some(20), d.pop_front());
    /// assert_eq!(None, d.pop_front());
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if NIL != self.head {
            Some(self.unlink(self.head))
        } else {
            None
        }
    }

    /// Remove the back of the deque and return it. If the deque is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_front(10);
    /// d.push_front(20);
    ///
    /// assert_eq!(Some(10), d.pop_back());
    /// assert_eq!(Some(20), d.pop_back());
    /// assert_eq!(None, d.pop_back());
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if NIL != self.tail {
            Some(self.unlink(self.tail))
        } else {
            None
        }
    }

    /// Remove and return the front of the deque, failing with
    /// [`Error::EmptyCollection`] when there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    ///
    /// assert_eq!(Ok(10), d.remove_first());
    /// assert_eq!(Err(Error::EmptyCollection), d.remove_first());
    /// ```
    pub fn remove_first(&mut self) -> Result<T> {
        self.pop_front().ok_or(Error::EmptyCollection)
    }

    /// Remove and return the back of the deque, failing with
    /// [`Error::EmptyCollection`] when there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.push_front(10);
    ///
    /// assert_eq!(Ok(10), d.remove_last());
    /// assert_eq!(Err(Error::EmptyCollection), d.remove_last());
    /// ```
    pub fn remove_last(&mut self) -> Result<T> {
        self.pop_back().ok_or(Error::EmptyCollection)
    }

    /// Get the front item of the deque. If the deque is empty, `None`
    /// is returned.
    pub fn front(&self) -> Option<&T> {
        if NIL != self.head {
            Some(self.node(self.head).item())
        } else {
            None
        }
    }

    /// Get the front item of the deque as a mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    ///
    /// if let Some(i) = d.front_mut() {
    ///     *i += 10;
    /// }
    ///
    /// assert_eq!(Some(&20), d.front());
    /// ```
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if NIL != self.head {
            Some(self.node_mut(self.head).item_mut())
        } else {
            None
        }
    }

    /// Get the back item of the deque. If the deque is empty, `None`
    /// is returned.
    pub fn back(&self) -> Option<&T> {
        if NIL != self.tail {
            Some(self.node(self.tail).item())
        } else {
            None
        }
    }

    /// Get the back item of the deque as a mutable reference.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if NIL != self.tail {
            Some(self.node_mut(self.tail).item_mut())
        } else {
            None
        }
    }

    /// Remove every item. All slots move onto the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = (0..3).collect();
    /// d.clear();
    ///
    /// assert!(d.is_empty());
    /// assert_eq!(3, d.len_freelist());
    /// ```
    pub fn clear(&mut self) {
        trace!(len = self.len_used, "clearing deque");
        while self.pop_front().is_some() {}
    }

    /// Create an iterator over the deque from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_back(2);
    /// d.push_back(3);
    /// d.push_front(1);
    ///
    /// let v: Vec<&u8> = d.iter().collect();
    /// assert_eq!(vec![&1, &2, &3], v);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.len_used)
    }

    pub(crate) fn node(&self, ix: usize) -> &Node<T> {
        self.slots[ix]
            .get_used()
            .expect("linked slot is expected to be used")
    }

    fn node_mut(&mut self, ix: usize) -> &mut Node<T> {
        self.slots[ix]
            .get_used_mut()
            .expect("linked slot is expected to be used")
    }

    // Detach the node at `ix`, which must be one of the two ends, and
    // clear the dangling link on whichever node replaces it.
    fn unlink(&mut self, ix: usize) -> T {
        let (prev, item, next) = self
            .free(ix)
            .into_used()
            .expect("unlinked slot is expected to be used")
            .take();

        if self.head == ix {
            debug_assert_eq!(NIL, prev);
            self.head = next;
        } else {
            debug_assert_ne!(NIL, prev);
            self.node_mut(prev).set_next(next);
        }

        if self.tail == ix {
            debug_assert_eq!(NIL, next);
            self.tail = prev;
        } else {
            debug_assert_ne!(NIL, next);
            self.node_mut(next).set_prev(prev);
        }

        item
    }

    fn allocate(&mut self, prev: usize, next: usize, item: T) -> usize {
        self.len_used += 1;

        let s = Slot::new_used(prev, next, item);

        if NIL == self.free_list {
            if self.slots.len() == self.slots.capacity() {
                trace!(capacity = self.slots.capacity(), "growing deque arena");
            }
            self.slots.push(s);
            self.slots.len() - 1
        } else {
            let ix = self.free_list;
            self.free_list = self.slots[ix]
                .get_free()
                .expect("free list slot is expected to be free")
                .next();
            self.slots[ix] = s;
            self.len_free -= 1;
            ix
        }
    }

    fn free(&mut self, ix: usize) -> Slot<T> {
        debug_assert!(self.slots[ix].get_used().is_some());

        self.len_used -= 1;

        let mut v = Slot::new_free(self.free_list);
        std::mem::swap(&mut v, &mut self.slots[ix]);
        self.free_list = ix;
        self.len_free += 1;
        v
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut d = Self::new();
        d.extend(iter);
        d
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.push_back(i);
        }
    }
}

impl<'l, T> IntoIterator for &'l Deque<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
