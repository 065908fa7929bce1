use {
    super::swap,
    crate::{
        snapshot::{Direction, Stage},
        sort::Sorter,
        Event, Snapshot,
    },
};

/// Bitonic sort.
///
/// Each half of a sequence is sorted in opposite directions, which makes the whole sequence
/// bitonic, then a compare-exchange network merges it in the wanted direction. A snapshot of the
/// sequence is taken before and after each merge, at every level of the recursion.
///
/// The network is only well-defined when the length of the array is a power of two. Other
/// lengths are processed by the same network: the result is a permutation of the input, but it
/// may not be sorted.
pub struct BitonicSort;

impl Sorter for BitonicSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        let total = array.len();
        if total < 2 {
            return;
        }
        bitonic_sort(array, total, Direction::Up, snapshot);
    }
}

fn bitonic_sort(
    array: &mut [i32],
    total: usize,
    direction: Direction,
    snapshot: &mut dyn Snapshot,
) {
    let len = array.len();
    if len <= 1 {
        return;
    }
    let cut = len / 2;

    snapshot.snapshot(Event::Bitonic {
        stage: Stage::Merging,
        len,
        total,
        direction,
        array,
    });

    bitonic_sort(&mut array[..cut], total, Direction::Up, snapshot);
    bitonic_sort(&mut array[cut..2 * cut], total, Direction::Down, snapshot);
    bitonic_merge(array, direction);

    snapshot.snapshot(Event::Bitonic {
        stage: Stage::Result,
        len,
        total,
        direction,
        array,
    });
}

/// Compares each element of the first half with its counterpart in the second half, then
/// recurses on both halves with half the distance.
fn bitonic_merge(array: &mut [i32], direction: Direction) {
    let len = array.len();
    if len <= 1 {
        return;
    }
    let jump = len / 2;

    for i in 0..jump {
        let out_of_order = match direction {
            Direction::Up => array[i] > array[i + jump],
            Direction::Down => array[i] < array[i + jump],
        };
        if out_of_order {
            swap(array, i, i + jump);
        }
    }

    bitonic_merge(&mut array[..jump], direction);
    bitonic_merge(&mut array[jump..2 * jump], direction);
}
