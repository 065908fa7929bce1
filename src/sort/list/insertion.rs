use crate::{sort::ListSorter, Event, List, Snapshot};

/// Insertion sort: each node walks backwards until the previous one is not greater.
///
/// A snapshot of the whole list is taken after every swap.
pub struct InsertionSort;

impl ListSorter for InsertionSort {
    fn sort(list: &mut List<i32>, snapshot: &mut dyn Snapshot) {
        insertion_sort_by(list, |a, b| a < b, |list| {
            snapshot.snapshot(Event::List(list))
        });
    }
}

/// Stable insertion sort of `list` according to `is_less`. `on_swap` is called after every
/// swap.
pub(crate) fn insertion_sort_by<T, F, S>(list: &mut List<T>, mut is_less: F, mut on_swap: S)
where
    F: FnMut(&T, &T) -> bool,
    S: FnMut(&List<T>),
{
    let mut current = match list.head().and_then(|head| list.next(head)) {
        Some(second) => second,
        None => return,
    };

    loop {
        // The node after `current` is saved before `current` moves backwards.
        let following = list.next(current);

        while let Some(prev) = list.prev(current) {
            if !is_less(list.get(current), list.get(prev)) {
                break;
            }
            list.swap_with_prev(current);
            on_swap(list);
        }

        match following {
            Some(next) => current = next,
            None => break,
        }
    }
}
