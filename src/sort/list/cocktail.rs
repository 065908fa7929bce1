use crate::{sort::ListSorter, Event, List, NodeId, Snapshot};

/// Cocktail shaker sort: bubble passes alternately go forwards and backwards.
///
/// The active window `[start, end]` shrinks by one node at the end after a forward pass and by
/// one node at the start after a backward pass. The sort stops when neither pass of a round
/// swapped anything. A snapshot of the whole list is taken after every swap.
pub struct CocktailSort;

/// Bounds of the part of the list that is not sorted yet.
struct Window {
    start: NodeId,
    end: NodeId,
    len: usize,
}

impl ListSorter for CocktailSort {
    fn sort(list: &mut List<i32>, snapshot: &mut dyn Snapshot) {
        let mut window = match (list.head(), list.tail()) {
            (Some(start), Some(end)) if list.len() > 1 => Window {
                start,
                end,
                len: list.len(),
            },
            _ => return,
        };

        while window.len > 1 {
            let mut swapped = swap_right(list, &mut window, snapshot);
            if window.len > 1 {
                swapped |= swap_left(list, &mut window, snapshot);
            }
            if !swapped {
                break;
            }
        }
    }
}

/// Bubbles the greatest value of the window up to its end, then takes the end out of the window.
fn swap_right(list: &mut List<i32>, window: &mut Window, snapshot: &mut dyn Snapshot) -> bool {
    let mut swapped = false;
    let mut current = window.start;

    while current != window.end {
        let next = match list.next(current) {
            Some(next) => next,
            None => break,
        };
        if list.get(current) > list.get(next) {
            list.swap_with_next(current);
            // `current` keeps moving forward, the node it jumped over may have been a bound.
            if current == window.start {
                window.start = next;
            }
            if next == window.end {
                window.end = current;
            }
            swapped = true;
            snapshot.snapshot(Event::List(list));
        } else {
            current = next;
        }
    }

    if let Some(prev) = list.prev(window.end) {
        window.end = prev;
    }
    window.len -= 1;
    swapped
}

/// Sinks the lowest value of the window down to its start, then takes the start out of the
/// window.
fn swap_left(list: &mut List<i32>, window: &mut Window, snapshot: &mut dyn Snapshot) -> bool {
    let mut swapped = false;
    let mut current = window.end;

    while current != window.start {
        let prev = match list.prev(current) {
            Some(prev) => prev,
            None => break,
        };
        if list.get(current) < list.get(prev) {
            list.swap_with_prev(current);
            if current == window.end {
                window.end = prev;
            }
            if prev == window.start {
                window.start = current;
            }
            swapped = true;
            snapshot.snapshot(Event::List(list));
        } else {
            current = prev;
        }
    }

    if let Some(next) = list.next(window.start) {
        window.start = next;
    }
    window.len -= 1;
    swapped
}
