//! Snapshot sinks.
//!
//! Sorters report their intermediate states as [`Event`]s. What happens to an event is up to the
//! sink: [`Printer`] renders it as text, [`Recorder`] keeps a copy of it and [`Silent`] drops it.

use {
    crate::List,
    std::{fmt, io},
};

/// Sort direction of a bitonic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("UP"),
            Direction::Down => f.write_str("DOWN"),
        }
    }
}

/// Whether a bitonic snapshot is taken before or after its merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Merging,
    Result,
}

/// An intermediate state emitted by a sorter.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The whole sequence, after an exchange or a pass.
    Array(&'a [i32]),
    /// Prefix sums of the counting sort, before elements are placed.
    Counts(&'a [usize]),
    /// Both halves about to be merged by the merge sort.
    Merging { left: &'a [i32], right: &'a [i32] },
    /// The range produced by a merge.
    Merged(&'a [i32]),
    /// A bitonic sequence of `len` elements (out of `total`) around its merge.
    Bitonic {
        stage: Stage,
        len: usize,
        total: usize,
        direction: Direction,
        array: &'a [i32],
    },
    /// The whole list, after a relinking.
    List(&'a List<i32>),
}

/// Consumer of the intermediate states of a sort.
pub trait Snapshot {
    fn snapshot(&mut self, event: Event<'_>);
}

impl<S: Snapshot + ?Sized> Snapshot for &mut S {
    fn snapshot(&mut self, event: Event<'_>) {
        (**self).snapshot(event)
    }
}

/// Discards every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Snapshot for Silent {
    fn snapshot(&mut self, _event: Event<'_>) {}
}

/// Writes `values` separated by `", "`.
fn join<'v, W, I, D>(out: &mut W, values: I) -> io::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'v D>,
    D: fmt::Display + 'v + ?Sized,
{
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.write_all(b", ")?;
        }
        write!(out, "{}", value)?;
    }
    writeln!(out)
}

/// Renders snapshots as text lines.
///
/// Sequences and lists are printed as `1, 2, 3`. Write errors are ignored, rendering is a side
/// channel that must not interfere with the sort itself.
pub struct Printer<W> {
    out: W,
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: Event<'_>) -> io::Result<()> {
        let out = &mut self.out;
        match event {
            Event::Array(array) => join(out, array),
            Event::Counts(counts) => join(out, counts),
            Event::Merging { left, right } => {
                writeln!(out, "Merging...")?;
                write!(out, "[left]: ")?;
                join(out, left)?;
                write!(out, "[right]: ")?;
                join(out, right)
            }
            Event::Merged(array) => {
                write!(out, "[Done]: ")?;
                join(out, array)
            }
            Event::Bitonic {
                stage,
                len,
                total,
                direction,
                array,
            } => {
                let title = match stage {
                    Stage::Merging => "Merging",
                    Stage::Result => "Result",
                };
                writeln!(out, "{} [{}/{}] ({}):", title, len, total, direction)?;
                join(out, array)
            }
            Event::List(list) => join(out, list.iter()),
        }
    }
}

impl<W: io::Write> Snapshot for Printer<W> {
    fn snapshot(&mut self, event: Event<'_>) {
        let _ = self.render(event);
    }
}

/// Owned copy of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Array(Vec<i32>),
    Counts(Vec<usize>),
    Merging { left: Vec<i32>, right: Vec<i32> },
    Merged(Vec<i32>),
    Bitonic {
        stage: Stage,
        len: usize,
        total: usize,
        direction: Direction,
        array: Vec<i32>,
    },
    List(Vec<i32>),
}

impl From<Event<'_>> for Record {
    fn from(event: Event<'_>) -> Self {
        match event {
            Event::Array(array) => Record::Array(array.to_vec()),
            Event::Counts(counts) => Record::Counts(counts.to_vec()),
            Event::Merging { left, right } => Record::Merging {
                left: left.to_vec(),
                right: right.to_vec(),
            },
            Event::Merged(array) => Record::Merged(array.to_vec()),
            Event::Bitonic {
                stage,
                len,
                total,
                direction,
                array,
            } => Record::Bitonic {
                stage,
                len,
                total,
                direction,
                array: array.to_vec(),
            },
            Event::List(list) => Record::List(list.iter().copied().collect()),
        }
    }
}

/// Keeps a copy of every snapshot, in emission order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    records: Vec<Record>,
}

impl Recorder {
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn clear(&mut self) {
        self.records.clear()
    }
    /// The last recorded state, if any.
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }
}

impl Snapshot for Recorder {
    fn snapshot(&mut self, event: Event<'_>) {
        self.records.push(event.into());
    }
}
