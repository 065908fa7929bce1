//! Sorters for doubly linked [`List`s](crate::List). They never touch a value: nodes are
//! relinked with [`List::swap_with_prev`](crate::List::swap_with_prev) and
//! [`List::swap_with_next`](crate::List::swap_with_next) only.
mod cocktail;
mod insertion;

pub use self::{cocktail::CocktailSort, insertion::InsertionSort};

pub(crate) use self::insertion::insertion_sort_by;
