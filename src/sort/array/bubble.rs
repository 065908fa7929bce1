use {
    super::swap,
    crate::{sort::Sorter, Event, Snapshot},
};

/// Bubble sort: adjacent pairs are exchanged until a whole pass leaves the array unchanged.
///
/// A snapshot is taken after every exchange.
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        let len = array.len();
        if len < 2 {
            return;
        }

        for i in 0..len {
            let mut swapped = false;
            // The last `i` elements are already in place.
            for j in 0..len - i - 1 {
                if array[j] > array[j + 1] {
                    swap(array, j, j + 1);
                    snapshot.snapshot(Event::Array(array));
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::BubbleSort,
        crate::{snapshot::Record, sort::Sorter, Recorder},
    };

    #[test]
    fn bubble_sort_works() {
        let mut recorder = Recorder::default();
        let mut array = [4, 2, 7, 1, 9, 3, 5];
        BubbleSort::sort(&mut array, &mut recorder);
        assert_eq!(array, [1, 2, 3, 4, 5, 7, 9]);
        assert_eq!(
            &recorder.records()[..3],
            &[
                Record::Array(vec![2, 4, 7, 1, 9, 3, 5]),
                Record::Array(vec![2, 4, 1, 7, 9, 3, 5]),
                Record::Array(vec![2, 4, 1, 7, 3, 9, 5]),
            ]
        );
    }

    #[test]
    fn one_snapshot_per_exchange() {
        let mut recorder = Recorder::default();
        let mut array = [3, 2, 1];
        BubbleSort::sort(&mut array, &mut recorder);
        assert_eq!(recorder.len(), 3);
    }

    #[test]
    fn sorted_input_is_not_touched() {
        let mut recorder = Recorder::default();
        let mut array = [1, 1, 1];
        BubbleSort::sort(&mut array, &mut recorder);
        assert!(recorder.is_empty());
    }
}
