use {
    super::swap,
    crate::{sort::Sorter, Event, Snapshot},
};

/// Heap sort over a max-heap built in place.
///
/// A snapshot is taken after every exchange, whether it sifts an element down the heap or moves
/// the root to the end of the array.
pub struct HeapSort;

impl Sorter for HeapSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        let len = array.len();
        if len < 2 {
            return;
        }

        // Build the heap, from the last parent up to the root.
        for parent in (0..len / 2).rev() {
            sift_down(array, len, parent, snapshot);
        }

        // Pop maximal elements from the heap.
        for last in (1..len).rev() {
            swap(array, 0, last);
            snapshot.snapshot(Event::Array(array));
            sift_down(array, last, 0, snapshot);
        }
    }
}

/// Restores the heap property of `array[..boundary]` below `node`.
fn sift_down(array: &mut [i32], boundary: usize, mut node: usize, snapshot: &mut dyn Snapshot) {
    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < boundary && array[largest] < array[left] {
            largest = left;
        }
        if right < boundary && array[largest] < array[right] {
            largest = right;
        }

        if largest == node {
            break;
        }
        swap(array, node, largest);
        snapshot.snapshot(Event::Array(array));
        node = largest;
    }
}
