use {
    super::buffer,
    crate::{sort::Sorter, Event, Snapshot},
};

/// Least significant digit radix sort, in base 10.
///
/// A snapshot is taken after each digit pass. Only non-negative values are supported: an array
/// holding a negative value is left as is.
pub struct RadixSort;

impl Sorter for RadixSort {
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot) {
        if array.len() < 2 {
            return;
        }
        let _ = radix_sort(array, snapshot);
    }
}

fn radix_sort(array: &mut [i32], snapshot: &mut dyn Snapshot) -> Option<()> {
    if array.iter().any(|&value| value < 0) {
        return None;
    }
    let max = i64::from(*array.iter().max()?);
    let mut buffer = buffer(array.len(), 0)?;

    // `exp` is wide enough to go past `i32::MAX`.
    let mut exp = 1i64;
    while max / exp > 0 {
        digit_pass(array, exp, &mut buffer);
        snapshot.snapshot(Event::Array(array));
        exp *= 10;
    }

    Some(())
}

/// Stable counting sort of `array` on the digit selected by `exp`.
fn digit_pass(array: &mut [i32], exp: i64, buffer: &mut [i32]) {
    let digit = |value: i32| ((i64::from(value) / exp) % 10) as usize;

    let mut counts = [0usize; 10];
    for &value in array.iter() {
        counts[digit(value)] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    for &value in array.iter().rev() {
        let count = &mut counts[digit(value)];
        *count -= 1;
        buffer[*count] = value;
    }
    array.copy_from_slice(buffer);
}
