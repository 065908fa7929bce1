//! Sorting algorithms.
//!
//! Array algorithms implement [`Sorter`] and list algorithms implement [`ListSorter`]. When the
//! algorithm is only known at runtime, [`Algorithm`] names each of them.
use {
    crate::{List, Snapshot},
    core::{fmt, str::FromStr},
};

pub mod array;
pub mod list;

pub use self::{
    array::{
        BitonicSort, BubbleSort, CountingSort, HeapSort, HoareQuickSort, MergeSort, QuickSort,
        RadixSort, SelectionSort, ShellSort,
    },
    list::{CocktailSort, InsertionSort},
};

/// A trait for sorting slices of integers.
pub trait Sorter {
    /// Sorts `array` in ascending order, reporting intermediate states to `snapshot`.
    fn sort(array: &mut [i32], snapshot: &mut dyn Snapshot);
}

/// A trait for sorting [`List`s](`crate::List`) of integers.
pub trait ListSorter {
    /// Sorts `list` in ascending order by relinking its nodes, reporting every relinking to
    /// `snapshot`.
    fn sort(list: &mut List<i32>, snapshot: &mut dyn Snapshot);
}

/// Sorts a slice of integers.
pub fn sort<S: Sorter>(array: &mut [i32], snapshot: &mut dyn Snapshot) {
    S::sort(array, snapshot)
}

/// Sorts a list of integers.
pub fn sort_list<S: ListSorter>(list: &mut List<i32>, snapshot: &mut dyn Snapshot) {
    S::sort(list, snapshot)
}

/// Every algorithm of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Quick,
    QuickHoare,
    Shell,
    Counting,
    Merge,
    Heap,
    Radix,
    Bitonic,
    Insertion,
    Cocktail,
}

impl Algorithm {
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::QuickHoare,
        Algorithm::Shell,
        Algorithm::Counting,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Bitonic,
        Algorithm::Insertion,
        Algorithm::Cocktail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::QuickHoare => "quick-hoare",
            Algorithm::Shell => "shell",
            Algorithm::Counting => "counting",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
            Algorithm::Bitonic => "bitonic",
            Algorithm::Insertion => "insertion",
            Algorithm::Cocktail => "cocktail",
        }
    }

    /// Whether the algorithm sorts lists rather than arrays.
    pub fn is_list(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Cocktail)
    }

    /// Sorts `array`. Returns `false` without touching it if `self` is a list algorithm.
    pub fn sort_array(self, array: &mut [i32], snapshot: &mut dyn Snapshot) -> bool {
        match self {
            Algorithm::Bubble => BubbleSort::sort(array, snapshot),
            Algorithm::Selection => SelectionSort::sort(array, snapshot),
            Algorithm::Quick => QuickSort::sort(array, snapshot),
            Algorithm::QuickHoare => HoareQuickSort::sort(array, snapshot),
            Algorithm::Shell => ShellSort::sort(array, snapshot),
            Algorithm::Counting => CountingSort::sort(array, snapshot),
            Algorithm::Merge => MergeSort::sort(array, snapshot),
            Algorithm::Heap => HeapSort::sort(array, snapshot),
            Algorithm::Radix => RadixSort::sort(array, snapshot),
            Algorithm::Bitonic => BitonicSort::sort(array, snapshot),
            Algorithm::Insertion | Algorithm::Cocktail => return false,
        }
        true
    }

    /// Sorts `list`. Returns `false` without touching it if `self` is an array algorithm.
    pub fn sort_list(self, list: &mut List<i32>, snapshot: &mut dyn Snapshot) -> bool {
        match self {
            Algorithm::Insertion => InsertionSort::sort(list, snapshot),
            Algorithm::Cocktail => CocktailSort::sort(list, snapshot),
            _ => return false,
        }
        true
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name given to [`Algorithm::from_str`] matches no algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Algorithm, BubbleSort, InsertionSort, UnknownAlgorithm},
        crate::{list, Recorder, Silent},
    };

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(UnknownAlgorithm("bogo".to_owned()))
        );
    }

    #[test]
    fn dispatch_rejects_the_wrong_structure() {
        let mut array = [2, 1];
        let mut l = list![2, 1];
        assert!(!Algorithm::Cocktail.sort_array(&mut array, &mut Silent));
        assert!(!Algorithm::Heap.sort_list(&mut l, &mut Silent));
        assert_eq!(array, [2, 1]);
        assert_eq!(l.into_iter().collect::<Vec<i32>>(), &[2, 1]);
    }

    #[test]
    fn generic_helpers() {
        let mut recorder = Recorder::default();
        let mut array = [3, 1, 8, 21, 5, 9, 12, 5, 2, 6, 6, 6, 13, 2, 17];
        super::sort::<BubbleSort>(&mut array, &mut recorder);
        assert_eq!(array, [1, 2, 2, 3, 5, 5, 6, 6, 6, 8, 9, 12, 13, 17, 21]);

        let mut l = list![3, 1, 8, 21, 5, 9, 12, 5, 2, 6, 6, 6, 13, 2, 17];
        super::sort_list::<InsertionSort>(&mut l, &mut recorder);
        assert_eq!(
            l.into_iter().collect::<Vec<i32>>(),
            &[1, 2, 2, 3, 5, 5, 6, 6, 6, 8, 9, 12, 13, 17, 21]
        );
    }
}
