use {
    super::swap,
    crate::{sort::Sorter, Event, Snapshot},
};

/// Quick sort with the Lomuto partition scheme: the pivot is the last element of the range.
///
/// A snapshot is taken after every exchange inside a partition, and after the pivot is moved to
/// its final place (if it has to move at all).
pub struct QuickSort;

/// Quick sort with the Hoare partition scheme: the pivot is the last element of the range and
/// two scans converge towards each other.
///
/// A snapshot is taken after every exchange.
pub struct HoareQuickSort;

impl Sorter for QuickSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        if array.len() < 2 {
            return;
        }

        // Pending ranges, inclusive. The right range is pushed first so that the left one is
        // handled first, which gives the same trace as the recursive formulation.
        let mut ranges = vec![(0, array.len() - 1)];
        while let Some((left, right)) = ranges.pop() {
            if left >= right {
                continue;
            }
            let pivot = lomuto_partition(array, left, right, snapshot);
            ranges.push((pivot + 1, right));
            if pivot > left {
                ranges.push((left, pivot - 1));
            }
        }
    }
}

/// Partitions `array[left..=right]` into elements lower than the pivot and elements greater or
/// equal to it, then returns the final position of the pivot.
fn lomuto_partition(
    array: &mut [i32],
    left: usize,
    right: usize,
    snapshot: &mut dyn Snapshot,
) -> usize {
    let pivot = array[right];
    let mut high = left;

    for low in left..right {
        if array[low] < pivot {
            if low > high {
                swap(array, high, low);
                snapshot.snapshot(Event::Array(array));
            }
            high += 1;
        }
    }

    if array[high] > pivot {
        swap(array, high, right);
        snapshot.snapshot(Event::Array(array));
    }

    high
}

impl Sorter for HoareQuickSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        if array.len() < 2 {
            return;
        }

        let mut ranges = vec![(0, array.len() - 1)];
        while let Some((left, right)) = ranges.pop() {
            if left >= right {
                continue;
            }
            // `split` is in `left + 1..=right`, both ranges are strictly smaller.
            let split = hoare_partition(array, left, right, snapshot);
            ranges.push((split, right));
            ranges.push((left, split - 1));
        }
    }
}

/// Partitions `array[left..=right]` around its last element and returns the index at which the
/// scans crossed: everything before it is lower or equal to the pivot, everything from it is
/// greater or equal.
fn hoare_partition(
    array: &mut [i32],
    left: usize,
    right: usize,
    snapshot: &mut dyn Snapshot,
) -> usize {
    let pivot = array[right];
    let (mut low, mut high) = (left, right);
    let mut first_scan = true;

    loop {
        if !first_scan {
            low += 1;
            high -= 1;
        }
        first_scan = false;

        // Both scans stop at the latest on an element equal to the pivot.
        while array[low] < pivot {
            low += 1;
        }
        while array[high] > pivot {
            high -= 1;
        }

        if low >= high {
            return low;
        }
        swap(array, low, high);
        snapshot.snapshot(Event::Array(array));
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{HoareQuickSort, QuickSort},
        crate::{snapshot::Record, sort::array::tests::sorted, sort::Sorter, Recorder, Silent},
    };

    #[test]
    fn quick_sort_works() {
        let mut array = [19, 48, 99, 71, 13, 52, 96, 73, 86, 7];
        QuickSort::sort(&mut array, &mut Silent);
        assert_eq!(array, [7, 13, 19, 48, 52, 71, 73, 86, 96, 99]);
    }

    #[test]
    fn lomuto_trace() {
        let mut recorder = Recorder::default();
        let mut array = [4, 2, 7, 1, 9, 3, 5];
        QuickSort::sort(&mut array, &mut recorder);
        assert_eq!(array, [1, 2, 3, 4, 5, 7, 9]);
        // Pivot 5: 1 then 3 move left of 7, then 5 takes the place of 7.
        assert_eq!(
            &recorder.records()[..3],
            &[
                Record::Array(vec![4, 2, 1, 7, 9, 3, 5]),
                Record::Array(vec![4, 2, 1, 3, 9, 7, 5]),
                Record::Array(vec![4, 2, 1, 3, 5, 7, 9]),
            ]
        );
    }

    #[test]
    fn lomuto_pivot_already_in_place() {
        let mut recorder = Recorder::default();
        let mut array = [1, 2, 3, 4];
        QuickSort::sort(&mut array, &mut recorder);
        assert!(recorder.is_empty());
    }

    #[test]
    fn hoare_quick_sort_works() {
        let mut array = [19, 48, 99, 71, 13, 52, 96, 73, 86, 7];
        HoareQuickSort::sort(&mut array, &mut Silent);
        assert_eq!(array, [7, 13, 19, 48, 52, 71, 73, 86, 96, 99]);
    }

    #[test]
    fn hoare_trace() {
        let mut recorder = Recorder::default();
        let mut array = [4, 2, 7, 1, 9, 3, 5];
        HoareQuickSort::sort(&mut array, &mut recorder);
        assert_eq!(array, [1, 2, 3, 4, 5, 7, 9]);
        // Pivot 5: 7 is exchanged with the pivot itself, then 9 with 3.
        assert_eq!(
            &recorder.records()[..2],
            &[
                Record::Array(vec![4, 2, 5, 1, 9, 3, 7]),
                Record::Array(vec![4, 2, 5, 1, 3, 9, 7]),
            ]
        );
    }

    #[test]
    fn many_duplicates() {
        let original = [5, 1, 5, 5, 0, 5, 1, 5, 5, 5, 0, 1];
        for sort in [QuickSort::sort, HoareQuickSort::sort] {
            let mut array = original;
            sort(&mut array, &mut Silent);
            assert_eq!(array.to_vec(), sorted(&original));
        }
    }

    #[test]
    fn sorted_input_does_not_exhaust_the_stack() {
        let mut array: Vec<i32> = (0..20_000).collect();
        QuickSort::sort(&mut array, &mut Silent);
        assert!(array.windows(2).all(|w| w[0] <= w[1]));

        let mut array: Vec<i32> = (0..20_000).rev().collect();
        HoareQuickSort::sort(&mut array, &mut Silent);
        assert!(array.windows(2).all(|w| w[0] <= w[1]));
    }
}
