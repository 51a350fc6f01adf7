// Index standing in for an absent link.
pub(crate) const NIL: usize = usize::MAX;

pub(crate) struct Free {
    // The next vacant slot, or NIL at the end of the free list.
    next: usize,
}

impl Free {
    pub(crate) fn next(&self) -> usize {
        self.next
    }
}

pub(crate) struct Node<T> {
    // The slot toward the front of the deque.
    prev: usize,
    // The slot toward the back of the deque.
    next: usize,
    item: T,
}

impl<T> Node<T> {
    pub(crate) fn prev(&self) -> usize {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, prev: usize) {
        self.prev = prev;
    }

    pub(crate) fn next(&self) -> usize {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: usize) {
        self.next = next;
    }

    pub(crate) fn item(&self) -> &T {
        &self.item
    }

    pub(crate) fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    /// Consume the node, yielding `(prev, item, next)`.
    pub(crate) fn take(self) -> (usize, T, usize) {
        let Node { prev, item, next } = self;
        (prev, item, next)
    }
}

/// One cell of the deque's arena: either a linked node or a link in
/// the free list.
pub(crate) enum Slot<T> {
    Free(Free),
    Used(Node<T>),
}

impl<T> Slot<T> {
    pub(crate) fn new_free(next: usize) -> Slot<T> {
        Slot::Free(Free { next })
    }

    pub(crate) fn new_used(prev: usize, next: usize, item: T) -> Slot<T> {
        Slot::Used(Node { prev, next, item })
    }

    pub(crate) fn get_used(&self) -> Option<&Node<T>> {
        if let Slot::Used(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub(crate) fn get_used_mut(&mut self) -> Option<&mut Node<T>> {
        if let Slot::Used(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub(crate) fn get_free(&self) -> Option<&Free> {
        if let Slot::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_used(self) -> Option<Node<T>> {
        if let Slot::Used(node) = self {
            Some(node)
        } else {
            None
        }
    }
}
