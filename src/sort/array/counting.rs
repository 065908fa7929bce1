use {
    super::{bounds, buffer},
    crate::{sort::Sorter, Event, Snapshot},
};

/// Counting sort.
///
/// The only snapshot is the array of cumulated counts, taken once before the elements are
/// placed. Counts are indexed from `0` when every value is non-negative, from the minimum value
/// otherwise.
///
/// If the counts or the output buffer cannot be allocated (the range of values is too wide), the
/// array is left as is.
pub struct CountingSort;

impl Sorter for CountingSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        if array.len() < 2 {
            return;
        }
        let _ = counting_sort(array, snapshot);
    }
}

fn counting_sort(array: &mut [i32], snapshot: &mut dyn Snapshot) -> Option<()> {
    let (min, max) = bounds(array)?;
    let offset = i64::from(min.min(0));
    let range = usize::try_from(i64::from(max) - offset + 1).ok()?;
    // The value is between `offset` and `max`.
    let slot = |value: i32| (i64::from(value) - offset) as usize;

    let mut counts = buffer(range, 0usize)?;
    let mut sorted = buffer(array.len(), 0)?;

    for &value in array.iter() {
        counts[slot(value)] += 1;
    }
    for i in 1..range {
        counts[i] += counts[i - 1];
    }

    snapshot.snapshot(Event::Counts(&counts));

    // Walking backwards keeps equal elements in their original order.
    for &value in array.iter().rev() {
        let count = &mut counts[slot(value)];
        *count -= 1;
        sorted[*count] = value;
    }
    array.copy_from_slice(&sorted);

    Some(())
}

#[cfg(test)]
mod tests {
    use {
        super::CountingSort,
        crate::{snapshot::Record, sort::Sorter, Recorder},
    };

    #[test]
    fn counting_sort_works() {
        let mut recorder = Recorder::default();
        let mut array = [4, 2, 7, 1, 9, 3, 5];
        CountingSort::sort(&mut array, &mut recorder);
        assert_eq!(array, [1, 2, 3, 4, 5, 7, 9]);
        assert_eq!(
            recorder.records(),
            &[Record::Counts(vec![0, 1, 2, 3, 4, 5, 5, 6, 6, 7])]
        );
    }

    #[test]
    fn negative_values_offset_the_counts() {
        let mut recorder = Recorder::default();
        let mut array = [-5, 3, -2, 0, 8];
        CountingSort::sort(&mut array, &mut recorder);
        assert_eq!(array, [-5, -2, 0, 3, 8]);
        match recorder.records() {
            [Record::Counts(counts)] => {
                assert_eq!(counts.len(), 14);
                assert_eq!(counts[0], 1);
                assert_eq!(counts[13], 5);
            }
            other => panic!("unexpected snapshots: {:?}", other),
        }
    }

    #[test]
    fn duplicates() {
        let mut array = [3, 3, 0, 3, 1, 0];
        CountingSort::sort(&mut array, &mut Recorder::default());
        assert_eq!(array, [0, 0, 1, 3, 3, 3]);
    }
}
