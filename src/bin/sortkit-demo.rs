//! Runs one algorithm on a handful of integers and prints every intermediate state.
//!
//! ```text
//! sortkit-demo [ALGORITHM] [INTEGERS...]
//! sortkit-demo deck
//! ```
use {
    either::Either,
    sortkit::{
        deck::{self, Card, Kind},
        Algorithm, List, Printer,
    },
    std::{
        env,
        io::{self, Write},
        process,
    },
};

const SAMPLE: [i32; 10] = [19, 48, 99, 71, 13, 52, 96, 73, 86, 7];

const SHUFFLED_DECK: [Card; 52] = [
    Card::new("Jack", Kind::Club),
    Card::new("4", Kind::Heart),
    Card::new("3", Kind::Heart),
    Card::new("3", Kind::Diamond),
    Card::new("Queen", Kind::Heart),
    Card::new("5", Kind::Heart),
    Card::new("5", Kind::Spade),
    Card::new("10", Kind::Heart),
    Card::new("6", Kind::Heart),
    Card::new("5", Kind::Diamond),
    Card::new("6", Kind::Spade),
    Card::new("9", Kind::Heart),
    Card::new("7", Kind::Diamond),
    Card::new("Jack", Kind::Spade),
    Card::new("Ace", Kind::Diamond),
    Card::new("9", Kind::Club),
    Card::new("Jack", Kind::Diamond),
    Card::new("7", Kind::Spade),
    Card::new("King", Kind::Diamond),
    Card::new("10", Kind::Club),
    Card::new("King", Kind::Spade),
    Card::new("8", Kind::Club),
    Card::new("9", Kind::Spade),
    Card::new("6", Kind::Club),
    Card::new("Ace", Kind::Club),
    Card::new("3", Kind::Spade),
    Card::new("8", Kind::Spade),
    Card::new("9", Kind::Diamond),
    Card::new("2", Kind::Heart),
    Card::new("4", Kind::Diamond),
    Card::new("6", Kind::Diamond),
    Card::new("3", Kind::Club),
    Card::new("Queen", Kind::Club),
    Card::new("10", Kind::Spade),
    Card::new("8", Kind::Diamond),
    Card::new("8", Kind::Heart),
    Card::new("Ace", Kind::Spade),
    Card::new("Jack", Kind::Heart),
    Card::new("2", Kind::Club),
    Card::new("4", Kind::Spade),
    Card::new("2", Kind::Spade),
    Card::new("2", Kind::Diamond),
    Card::new("King", Kind::Club),
    Card::new("Queen", Kind::Spade),
    Card::new("Queen", Kind::Diamond),
    Card::new("7", Kind::Club),
    Card::new("7", Kind::Heart),
    Card::new("5", Kind::Club),
    Card::new("10", Kind::Diamond),
    Card::new("4", Kind::Club),
    Card::new("King", Kind::Heart),
    Card::new("Ace", Kind::Heart),
];

fn usage() -> ! {
    let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
    eprintln!("usage: sortkit-demo [ALGORITHM] [INTEGERS...]");
    eprintln!("       sortkit-demo deck");
    eprintln!("algorithms: {}", names.join(", "));
    process::exit(1)
}

fn run_deck() -> io::Result<()> {
    let mut cards: List<Card> = SHUFFLED_DECK.iter().copied().collect();
    let mut out = io::stdout();
    deck::render(&mut out, &cards)?;
    writeln!(out)?;
    deck::sort_deck(&mut cards);
    writeln!(out)?;
    deck::render(&mut out, &cards)
}

fn main() -> io::Result<()> {
    let mut args = env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "bubble".to_owned());
    if name == "deck" {
        return run_deck();
    }
    let algorithm: Algorithm = match name.parse() {
        Ok(algorithm) => algorithm,
        Err(err) => {
            eprintln!("{}", err);
            usage()
        }
    };

    let mut values = Vec::new();
    for arg in args {
        match arg.parse::<i32>() {
            Ok(value) => values.push(value),
            Err(err) => {
                eprintln!("invalid integer {:?}: {}", arg, err);
                process::exit(1)
            }
        }
    }
    if values.is_empty() {
        values.extend_from_slice(&SAMPLE);
    }

    let mut data = if algorithm.is_list() {
        Either::Right(values.into_iter().collect::<List<i32>>())
    } else {
        Either::Left(values)
    };

    let mut out = io::stdout();
    let mut printer = Printer::stdout();
    print_data(&mut out, &data)?;
    writeln!(out)?;
    match &mut data {
        Either::Left(array) => algorithm.sort_array(array, &mut printer),
        Either::Right(list) => algorithm.sort_list(list, &mut printer),
    };
    writeln!(out)?;
    print_data(&mut out, &data)
}

fn print_data<W: Write>(out: &mut W, data: &Either<Vec<i32>, List<i32>>) -> io::Result<()> {
    let values: Vec<String> = match data {
        Either::Left(array) => array.iter().map(ToString::to_string).collect(),
        Either::Right(list) => list.iter().map(ToString::to_string).collect(),
    };
    writeln!(out, "{}", values.join(", "))
}
