use {
    super::swap,
    crate::{sort::Sorter, Event, Snapshot},
};

/// Selection sort: each position receives the minimum of the elements after it.
///
/// A snapshot is taken after each exchange, that is at most once per position.
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        if array.len() < 2 {
            return;
        }

        for i in 0..array.len() {
            let mut min_index = i;
            for j in i + 1..array.len() {
                if array[j] < array[min_index] {
                    min_index = j;
                }
            }

            if min_index != i {
                swap(array, i, min_index);
                snapshot.snapshot(Event::Array(array));
            }
        }
    }
}
