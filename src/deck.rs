//! A deck of playing cards stored in a [`List`], sorted by suit then by rank.
//!
//! ```
//! use sortkit::{deck::{self, Card, Kind}, List};
//!
//! let mut cards: List<Card> = vec![
//!     Card::new("King", Kind::Heart),
//!     Card::new("3", Kind::Spade),
//!     Card::new("Ace", Kind::Heart),
//! ]
//! .into_iter()
//! .collect();
//! deck::sort_deck(&mut cards);
//! assert_eq!(
//!     cards.iter().map(ToString::to_string).collect::<Vec<_>>(),
//!     &["{3, S}", "{Ace, H}", "{King, H}"]
//! );
//! ```
use {
    crate::{sort::list::insertion_sort_by, List},
    std::{fmt, io},
};

/// Suit of a card, in sorting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Spade, Kind::Heart, Kind::Club, Kind::Diamond];

    pub fn letter(self) -> char {
        match self {
            Kind::Spade => 'S',
            Kind::Heart => 'H',
            Kind::Club => 'C',
            Kind::Diamond => 'D',
        }
    }
}

/// Card values, from the lowest to the highest.
pub const VALUES: [&str; 13] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

/// Ranks of the values that are not numbers.
const FACES: [(&str, u8); 4] = [("Ace", 1), ("Jack", 11), ("Queen", 12), ("King", 13)];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub value: &'static str,
    pub kind: Kind,
}

impl Card {
    pub const fn new(value: &'static str, kind: Kind) -> Self {
        Self { value, kind }
    }

    /// Rank of the card within its suit: `1` for an ace up to `13` for a king, `0` for a value
    /// that is neither a face nor a number.
    pub fn rank(&self) -> u8 {
        rank_in(self.value, &FACES)
    }
}

fn rank_in(value: &str, faces: &[(&str, u8)]) -> u8 {
    faces
        .iter()
        .find(|(name, _)| *name == value)
        .map(|&(_, rank)| rank)
        .or_else(|| value.parse().ok())
        .unwrap_or(0)
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.value, self.kind.letter())
    }
}

/// Sorts `deck` by suit, then by rank within a suit.
///
/// Two stable passes are made over the list, by rank first then by suit, so that cards of the
/// same suit stay ordered by rank.
pub fn sort_deck(deck: &mut List<Card>) {
    insertion_sort_by(deck, |a, b| a.rank() < b.rank(), |_| {});
    insertion_sort_by(deck, |a, b| a.kind < b.kind, |_| {});
}

/// Writes `deck`, thirteen cards per line.
pub fn render<W: io::Write>(out: &mut W, deck: &List<Card>) -> io::Result<()> {
    for (i, card) in deck.iter().enumerate() {
        if i % 13 != 0 {
            write!(out, ", ")?;
        }
        write!(out, "{}", card)?;
        if i % 13 == 12 {
            writeln!(out)?;
        }
    }
    Ok(())
}
