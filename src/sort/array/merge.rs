use {
    super::buffer,
    crate::{sort::Sorter, Event, Snapshot},
};

/// A top-down merge sort.
///
/// Every merge takes two snapshots: both halves before merging, the merged range after. A
/// single buffer, as long as the array, is allocated for the whole sort; if the allocation
/// fails the array is left as is.
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        if array.len() < 2 {
            return;
        }
        if let Some(mut buffer) = buffer(array.len(), 0) {
            merge_sort(array, &mut buffer, snapshot);
        }
    }
}

/// Sorts `array` using `buffer`, which has the same length, as scratch space.
fn merge_sort(array: &mut [i32], buffer: &mut [i32], snapshot: &mut dyn Snapshot) {
    // Base case. A range of zero or one elements is sorted, by definition.
    if array.len() <= 1 {
        return;
    }

    // Recursive case. Both halves are sorted, each with its own half of the buffer.
    let mid = array.len() / 2;
    merge_sort(&mut array[..mid], &mut buffer[..mid], snapshot);
    merge_sort(&mut array[mid..], &mut buffer[mid..], snapshot);

    merge(array, mid, buffer, snapshot);
}

/// Merges the sorted ranges `array[..mid]` and `array[mid..]`. On ties the element of the left
/// range comes first.
fn merge(array: &mut [i32], mid: usize, buffer: &mut [i32], snapshot: &mut dyn Snapshot) {
    let (left, right) = array.split_at(mid);
    snapshot.snapshot(Event::Merging { left, right });

    let (mut low, mut high) = (0, mid);
    for slot in buffer.iter_mut() {
        if high >= array.len() || (low < mid && array[low] <= array[high]) {
            *slot = array[low];
            low += 1;
        } else {
            *slot = array[high];
            high += 1;
        }
    }
    array.copy_from_slice(buffer);

    snapshot.snapshot(Event::Merged(array));
}

#[cfg(test)]
mod tests {
    use {
        super::MergeSort,
        crate::{snapshot::Record, sort::Sorter, Recorder},
    };

    #[test]
    fn merge_sort_works() {
        let mut recorder = Recorder::default();
        let mut array = [3, 1, 8, 21, 5, 9, 12, 5, 2, 6, 6, 6, 13, 2, 17];
        MergeSort::sort(&mut array, &mut recorder);
        assert_eq!(array, [1, 2, 2, 3, 5, 5, 6, 6, 6, 8, 9, 12, 13, 17, 21]);
        // A merge for every inner node of the recursion tree, and two snapshots per merge.
        assert_eq!(recorder.len(), 2 * 14);
    }

    #[test]
    fn merge_trace() {
        let mut recorder = Recorder::default();
        let mut array = [4, 2, 7];
        MergeSort::sort(&mut array, &mut recorder);
        assert_eq!(
            recorder.records(),
            &[
                Record::Merging {
                    left: vec![2],
                    right: vec![7]
                },
                Record::Merged(vec![2, 7]),
                Record::Merging {
                    left: vec![4],
                    right: vec![2, 7]
                },
                Record::Merged(vec![2, 4, 7]),
            ]
        );
    }
}
