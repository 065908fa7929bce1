//! Sorters for slices of integers, and the helpers they share.
mod bitonic;
mod bubble;
mod counting;
mod heap;
mod merge;
mod quick;
mod radix;
mod selection;
mod shell;

pub use self::{
    bitonic::BitonicSort,
    bubble::BubbleSort,
    counting::CountingSort,
    heap::HeapSort,
    merge::MergeSort,
    quick::{HoareQuickSort, QuickSort},
    radix::RadixSort,
    selection::SelectionSort,
    shell::{gaps, ShellSort},
};

/// Exchanges the elements at positions `a` and `b`.
///
/// Returns `false` and leaves `array` untouched when a position is out of bounds.
pub fn swap(array: &mut [i32], a: usize, b: usize) -> bool {
    if a >= array.len() || b >= array.len() {
        return false;
    }
    array.swap(a, b);
    true
}

/// Smallest and largest values of `array`, `None` if it is empty.
pub(crate) fn bounds(array: &[i32]) -> Option<(i32, i32)> {
    let (&first, rest) = array.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(min, max), &x| (min.min(x), max.max(x))),
    )
}

/// Allocates a buffer of `len` copies of `fill`, `None` if the allocation fails.
pub(crate) fn buffer<T: Clone>(len: usize, fill: T) -> Option<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).ok()?;
    buffer.resize(len, fill);
    Some(buffer)
}
