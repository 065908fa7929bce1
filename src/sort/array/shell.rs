use {
    super::swap,
    crate::{sort::Sorter, Event, Snapshot},
    std::iter,
};

/// Shell sort over the Knuth gap sequence.
///
/// A snapshot is taken after each gap pass.
pub struct ShellSort;

/// Knuth's gaps (`1, 4, 13, 40, ...`) for an array of `len` elements, largest first.
///
/// The largest gap is the one before the first term that reaches `len`.
pub fn gaps(len: usize) -> impl Iterator<Item = usize> {
    let mut gap = 1usize;
    while gap < len {
        gap = gap.saturating_mul(3).saturating_add(1);
    }
    let next = |&gap: &usize| Some((gap - 1) / 3).filter(|&gap| gap > 0);
    iter::successors(next(&gap), next)
}

impl Sorter for ShellSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        let len = array.len();
        if len < 2 {
            return;
        }

        for gap in gaps(len) {
            for i in gap..len {
                let mut j = i;
                while j >= gap && array[j - gap] > array[j] {
                    swap(array, j - gap, j);
                    j -= gap;
                }
            }
            snapshot.snapshot(Event::Array(array));
        }
    }
}
