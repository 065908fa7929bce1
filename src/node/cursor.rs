use {
    super::{Node, NodeId},
    crate::List,
};

/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
/// This `struct` is constructed by the [`List::cursor`](crate::List::cursor) function.
pub struct Cursor<'life, T> {
    list: &'life List<T>,
    // Invariant (2): `current` is the id of a node linked in `list`.
    current: NodeId,
}

impl<'life, T> Clone for Cursor<'life, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'life, T> Copy for Cursor<'life, T> {}

impl<'life, T> Cursor<'life, T> {
    /// Builds a `Cursor` from the id of a node linked in `list`.
    pub(crate) fn new(list: &'life List<T>, current: NodeId) -> Self {
        Self { list, current }
    }

    fn node(&self) -> &'life Node<T> {
        // Invariant (2) guarantees the id is inside the arena.
        &self.list.nodes[self.current.0]
    }

    /// Moves the cursor to the next element, returns `false` (and stays put) at the tail.
    pub fn move_next(&mut self) -> bool {
        match self.node().next() {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Moves the cursor to the previous element, returns `false` (and stays put) at the head.
    pub fn move_prev(&mut self) -> bool {
        match self.node().prev() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Returns the id of the element behind the cursor.
    pub fn id(&self) -> NodeId {
        self.current
    }

    /// Returns the value of the list element behind the cursor.
    pub fn value(&self) -> &'life T {
        self.node().value()
    }
}

impl<'life, T: std::fmt::Debug> std::fmt::Debug for Cursor<'life, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

impl<'life, T: std::fmt::Display> std::fmt::Display for Cursor<'life, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

impl<'life, T> std::cmp::PartialEq for Cursor<'life, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.list, other.list) && self.current == other.current
    }
}
