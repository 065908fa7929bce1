use core::fmt;

pub mod cursor;

/// Stable handle to a node of a [`List`](crate::List).
///
/// A `NodeId` is an index into the arena owned by the list. Relinking never moves a node inside
/// the arena, so an id keeps designating the same value for the whole life of the list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the position of the node inside the arena (its insertion order).
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// List element for a doubly linked list.
pub struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// The present implementation aims to preserve the following invariant (1):
// * `prev` and `next` are either `None` or the id of a node of the same arena
// * `a.next == Some(b)` if and only if `b.prev == Some(a)`
// * exactly one node has no `prev` (the head) and exactly one has no `next` (the tail), unless
// the list is empty
impl<T> Node<T> {
    /// Creates a new element with value `val`, connected to nothing.
    pub(crate) fn new(val: T) -> Self {
        Self {
            value: val,
            prev: None,
            next: None,
        }
    }

    /// Gets the id of the previous element.
    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    /// Gets the id of the next element.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// Gets a shared reference to the value of the node.
    ///
    /// There is no exclusive accessor: sorting reorders nodes, it never rewrites a value.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// Appends `new` after `tail`.
///
/// # Sketch
/// ```text
/// ┌────┬──►┌────┐
/// │tail│   │new │──► None
/// └────┘◄──┴────┘
/// ```
pub(crate) fn link_after<T>(nodes: &mut [Node<T>], tail: Option<NodeId>, new: NodeId) {
    nodes[new.0].prev = tail;
    nodes[new.0].next = None;
    if let Some(tail) = tail {
        nodes[tail.0].next = Some(new);
    }
}

/// Exchanges `first` with the element right after it and returns the id of that element.
/// Nothing happens if `first` is not part of the arena or is the last element.
///
/// # Sketch
///
/// ## Before
/// ```text
/// ┌────┬──►┌─────┬──►┌──────┬──►┌─────┐
/// │prev│   │first│   │second│   │after│
/// └────┘◄──┴─────┘◄──┴──────┘◄──┴─────┘
/// ```
///
/// ## After
/// ```text
/// ┌────┬──►┌──────┬──►┌─────┬──►┌─────┐
/// │prev│   │second│   │first│   │after│
/// └────┘◄──┴──────┘◄──┴─────┘◄──┴─────┘
/// ```
///
/// `prev` and `after` are optional. The caller is in charge of the list head: if `first` had no
/// previous element, `second` is the new first element.
pub(crate) fn exchange_with_next<T>(nodes: &mut [Node<T>], first: NodeId) -> Option<NodeId> {
    let second = nodes.get(first.0)?.next?;
    let prev = nodes[first.0].prev;
    let after = nodes[second.0].next;

    // The outer neighbors are connected first, invariant (1) is restored once the pair itself
    // is reconnected below.
    if let Some(prev) = prev {
        nodes[prev.0].next = Some(second);
    }
    if let Some(after) = after {
        nodes[after.0].prev = Some(first);
    }

    nodes[second.0].prev = prev;
    nodes[second.0].next = Some(first);
    nodes[first.0].prev = Some(second);
    nodes[first.0].next = after;

    Some(second)
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}
