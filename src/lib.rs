//! Classic sorting algorithms, step by step.
//!
//! Two data structures are sorted in ascending order: a plain slice of `i32` and a doubly linked
//! [`List`]. Every algorithm reports each structurally meaningful intermediate state to a
//! [`Snapshot`] sink, which makes the crate suitable for visualizing or checking how the
//! algorithms progress.
//!
//! The list is stored in an arena: nodes are addressed by [`NodeId`]s and only their links are
//! rewritten when the list is sorted, the values themselves never move nor change.
//!
//! # Basic usage
//! ```
//! use sortkit::{list, sort, Recorder};
//!
//! let mut array = [4, 2, 7, 1, 9, 3, 5];
//! let mut recorder = Recorder::default();
//! sort::sort::<sort::BubbleSort>(&mut array, &mut recorder);
//! assert_eq!(array, [1, 2, 3, 4, 5, 7, 9]);
//! assert!(!recorder.is_empty());
//!
//! let mut my_list = list![4, 2, 7, 1, 9, 3, 5];
//! sort::sort_list::<sort::InsertionSort>(&mut my_list, &mut sortkit::Silent);
//! assert_eq!(my_list.into_iter().collect::<Vec<i32>>(), &[1, 2, 3, 4, 5, 7, 9]);
//! ```
pub mod deck;
mod node;
pub mod snapshot;
pub mod sort;

pub use crate::{
    node::{cursor::Cursor, Node, NodeId},
    snapshot::{Event, Printer, Recorder, Silent, Snapshot},
    sort::Algorithm,
};

use {
    crate::node::{exchange_with_next, link_after},
    either::Either,
    std::iter::{self, FromIterator},
};

#[macro_export]
macro_rules! list {
    [$($elem:expr),* $(,)?] => {{
        #[allow(unused_mut)]
        let mut l = $crate::List::default();
        $(
            l.push_back($elem);
        )*
        l
    }}
}

/// A doubly linked list whose nodes live in an arena.
///
/// The list handle is the id of its first node (see [`List::head`]); operations that change
/// which node comes first update it.
pub struct List<T> {
    nodes: Vec<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}
impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Id of the first node, `None` when the list is empty.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }
    /// Id of the last node, `None` when the list is empty.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }
    /// Value of a node reached by following the links of the list.
    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.nodes[id.0].value()
    }
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::prev)
    }
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::next)
    }
    /// Appends `val` at the end of the list and returns the id of its node.
    pub fn push_back(&mut self, val: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(val));
        link_after(&mut self.nodes, self.tail, id);
        if self.head.is_none() {
            self.head = Some(id);
        }
        self.tail = Some(id);
        id
    }
    /// Makes `id` trade places with its previous element.
    ///
    /// Returns `false` and does nothing if `id` is unknown or is the first element. When `id`
    /// becomes the first element, the head of the list is updated accordingly.
    pub fn swap_with_prev(&mut self, id: NodeId) -> bool {
        let prev = match self.prev(id) {
            Some(prev) => prev,
            None => return false,
        };
        if exchange_with_next(&mut self.nodes, prev).is_none() {
            return false;
        }
        if self.head == Some(prev) {
            self.head = Some(id);
        }
        if self.tail == Some(id) {
            self.tail = Some(prev);
        }
        true
    }
    /// Makes `id` trade places with its next element.
    ///
    /// Returns `false` and does nothing if `id` is unknown or is the last element. When `id` was
    /// the first element, its successor becomes the head of the list.
    pub fn swap_with_next(&mut self, id: NodeId) -> bool {
        let next = match exchange_with_next(&mut self.nodes, id) {
            Some(next) => next,
            None => return false,
        };
        if self.head == Some(id) {
            self.head = Some(next);
        }
        if self.tail == Some(next) {
            self.tail = Some(id);
        }
        true
    }
    /// Returns a cursor on the first element, `None` if the list is empty.
    pub fn cursor(&self) -> Option<Cursor<'_, T>> {
        self.head.map(|head| Cursor::new(self, head))
    }
    /// Returns a cursor on the last element, `None` if the list is empty.
    pub fn cursor_back(&self) -> Option<Cursor<'_, T>> {
        self.tail.map(|tail| Cursor::new(self, tail))
    }
    /// Iterates from the first element to the last one.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        match self.cursor() {
            None => Either::Left(iter::empty()),
            Some(cursor) => Either::Right(Iter::new(cursor, self.len(), Cursor::move_next)),
        }
    }
    /// Ids of the nodes, in list order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.head, move |&id| self.next(id))
    }
    /// Iterates from the last element to the first one.
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> {
        match self.cursor_back() {
            None => Either::Left(iter::empty()),
            Some(cursor) => Either::Right(Iter::new(cursor, self.len(), Cursor::move_prev)),
        }
    }
    /// Checks that the links of the list are consistent: the head has no previous element, the
    /// tail has no next element, every `a.next == b` is mirrored by `b.prev == a` and walking
    /// forward from the head visits every node exactly once.
    pub fn check_links(&self) -> bool {
        let (head, tail) = match (self.head, self.tail) {
            (None, None) => return self.is_empty(),
            (Some(head), Some(tail)) => (head, tail),
            _ => return false,
        };
        if self.prev(head).is_some() || self.next(tail).is_some() {
            return false;
        }

        let mut visited = 1;
        let mut current = head;
        while let Some(next) = self.next(current) {
            if self.prev(next) != Some(current) || visited == self.len() {
                return false;
            }
            visited += 1;
            current = next;
        }
        current == tail && visited == self.len()
    }
}
impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut new: Self = Default::default();
        for x in iter {
            new.push_back(x);
        }
        new
    }
}
impl<T: std::fmt::Debug> std::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// List iterator, walking `remaining` elements from a cursor in one direction.
struct Iter<'life, T> {
    cursor: Cursor<'life, T>,
    remaining: usize,
    step: fn(&mut Cursor<'life, T>) -> bool,
}
impl<'life, T> Iter<'life, T> {
    fn new(
        cursor: Cursor<'life, T>,
        remaining: usize,
        step: fn(&mut Cursor<'life, T>) -> bool,
    ) -> Self {
        Self {
            cursor,
            remaining,
            step,
        }
    }
}
impl<'life, T> Iterator for Iter<'life, T> {
    type Item = &'life T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor.value();
        self.remaining -= 1;
        if self.remaining > 0 && !(self.step)(&mut self.cursor) {
            self.remaining = 0;
        }
        Some(current)
    }
}

pub struct IntoIter<T>(std::vec::IntoIter<T>);
impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}
impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut order = Vec::with_capacity(self.len());
        let mut current = self.head;
        while let Some(id) = current {
            if order.len() == self.len() {
                break;
            }
            order.push(id.0);
            current = self.next(id);
        }

        let mut slots: Vec<Option<T>> = self
            .nodes
            .into_iter()
            .map(|node| Some(node.into_value()))
            .collect();
        let values: Vec<T> = order.into_iter().filter_map(|i| slots[i].take()).collect();
        IntoIter(values.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let l = List::default();
        assert_eq!(l.iter().copied().collect::<Vec<i32>>(), &[]);
        assert_eq!(l.head(), None);
        assert!(l.check_links());
    }

    #[test]
    fn ids_follow_the_links() {
        let mut l = list![1, 2, 3];
        let ids: Vec<NodeId> = l.ids().collect();
        assert_eq!(ids.len(), 3);
        assert!(l.swap_with_prev(ids[2]));
        assert_eq!(l.ids().collect::<Vec<_>>(), &[ids[0], ids[2], ids[1]]);
        assert_eq!(List::<i32>::new().ids().count(), 0);
    }

    #[test]
    fn push_back() {
        let l = list![42, 43, 44, 45, 46];
        assert!(l.check_links());
        assert_eq!(l.into_iter().collect::<Vec<i32>>(), &[42, 43, 44, 45, 46])
    }

    #[test]
    fn iter_rev() {
        let l = list![1, 2, 3];
        assert_eq!(l.iter_rev().copied().collect::<Vec<i32>>(), &[3, 2, 1]);
    }

    #[test]
    fn swap_with_prev() {
        for (i, expected) in [
            (1, &[43, 42, 44, 45, 46]),
            (2, &[42, 44, 43, 45, 46]),
            (4, &[42, 43, 44, 46, 45]),
        ] {
            let mut l = list![42, 43, 44, 45, 46];
            assert!(l.swap_with_prev(NodeId(i)));
            assert!(l.check_links());
            assert_eq!(l.into_iter().collect::<Vec<i32>>(), expected);
        }
    }

    #[test]
    fn swap_with_prev_updates_head() {
        let mut l = list![42, 43];
        assert!(l.swap_with_prev(NodeId(1)));
        assert_eq!(l.head(), Some(NodeId(1)));
        assert_eq!(l.tail(), Some(NodeId(0)));
        assert!(l.check_links());
        assert_eq!(l.iter_rev().copied().collect::<Vec<i32>>(), &[42, 43]);
    }

    #[test]
    fn swap_with_next() {
        for (i, expected) in [
            (0, &[43, 42, 44, 45, 46]),
            (2, &[42, 43, 45, 44, 46]),
            (3, &[42, 43, 44, 46, 45]),
        ] {
            let mut l = list![42, 43, 44, 45, 46];
            assert!(l.swap_with_next(NodeId(i)));
            assert!(l.check_links());
            assert_eq!(l.into_iter().collect::<Vec<i32>>(), expected);
        }
    }

    #[test]
    fn swap_with_next_updates_head() {
        let mut l = list![42, 43, 44];
        assert!(l.swap_with_next(NodeId(0)));
        assert_eq!(l.head(), Some(NodeId(1)));
        assert!(l.check_links());
    }

    #[test]
    fn swaps_at_the_edges_are_noops() {
        let mut l = list![42, 43, 44];
        assert!(!l.swap_with_prev(NodeId(0)));
        assert!(!l.swap_with_next(NodeId(2)));
        assert!(!l.swap_with_next(NodeId(9)));
        assert!(!l.swap_with_prev(NodeId(9)));
        assert!(l.check_links());
        assert_eq!(l.into_iter().collect::<Vec<i32>>(), &[42, 43, 44]);
    }

    #[test]
    fn swaps_keep_ids_stable() {
        let mut l = list![1, 2, 3];
        l.swap_with_next(NodeId(0));
        l.swap_with_next(NodeId(0));
        assert_eq!(l.value(NodeId(0)), Some(&1));
        assert_eq!(l.tail(), Some(NodeId(0)));
        assert_eq!(l.iter().copied().collect::<Vec<i32>>(), &[2, 3, 1]);
    }

    #[test]
    fn into_iter_double_ended_iterator() {
        let numbers = list![1, 2, 3, 4, 5, 6];

        let mut iter = numbers.into_iter();

        assert_eq!(Some(1), iter.next());
        assert_eq!(Some(6), iter.next_back());
        assert_eq!(Some(5), iter.next_back());
        assert_eq!(Some(2), iter.next());
        assert_eq!(Some(3), iter.next());
        assert_eq!(Some(4), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next_back());
    }

    #[test]
    fn from_iterator() {
        let numbers: List<_> = vec![4, 5, 6, 7].into_iter().collect();
        assert_eq!(numbers.len(), 4);
        assert_eq!(format!("{:?}", numbers), "[4, 5, 6, 7]");
    }

    #[test]
    fn clone_follows_list_order() {
        let mut a = list![1, 2, 3];
        a.swap_with_next(NodeId(0));
        let b = a.clone();
        assert_eq!(b.head(), Some(NodeId(0)));
        assert_eq!(b.into_iter().collect::<Vec<i32>>(), &[2, 1, 3]);
    }
}
