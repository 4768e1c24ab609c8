//! Suits, faces, and card labels.

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::{ParseFaceError, ParseSuitError};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the label used when rendering a card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseSuitError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|suit| suit.label() == s)
            .ok_or(ParseSuitError::Unknown)
    }
}

/// A card face.
///
/// Court cards and the ace are named; the pip cards carry their number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// A named face such as `"Ace"` or `"King"`.
    Named(&'static str),
    /// A numbered face, rendered as decimal digits.
    Numeric(u8),
}

impl Face {
    /// The ace.
    pub const ACE: Self = Self::Named("Ace");
    /// The king.
    pub const KING: Self = Self::Named("King");
    /// The queen.
    pub const QUEEN: Self = Self::Named("Queen");
    /// The jack.
    pub const JACK: Self = Self::Named("Jack");

    /// Returns whether this is a numbered face.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Numeric(number) => write!(f, "{number}"),
        }
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    /// Parses one of the standard faces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseFaceError::Empty);
        }

        if let Some(face) = [Self::ACE, Self::KING, Self::QUEEN, Self::JACK]
            .into_iter()
            .find(|face| matches!(face, Self::Named(name) if *name == s))
        {
            return Ok(face);
        }

        // Only canonical decimal text: no sign, no leading zero.
        if !s.bytes().all(|b| b.is_ascii_digit()) || (s.len() > 1 && s.starts_with('0')) {
            return Err(ParseFaceError::Unknown);
        }

        match s.parse::<u8>() {
            Ok(number @ 2..=10) => Ok(Self::Numeric(number)),
            _ => Err(ParseFaceError::OutOfRange),
        }
    }
}

/// Suits of a standard deck, in deck order.
pub const SUITS: [Suit; 4] = Suit::ALL;

/// Faces of a standard deck, in deck order.
pub const FACES: [Face; 13] = [
    Face::ACE,
    Face::KING,
    Face::QUEEN,
    Face::JACK,
    Face::Numeric(2),
    Face::Numeric(3),
    Face::Numeric(4),
    Face::Numeric(5),
    Face::Numeric(6),
    Face::Numeric(7),
    Face::Numeric(8),
    Face::Numeric(9),
    Face::Numeric(10),
];

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUITS.len() * FACES.len();

/// Renders the label of a single card, e.g. `"Ace of Spades"`.
///
/// ```
/// use cardsrs::{Face, Suit, card_label};
///
/// assert_eq!(card_label(Face::Numeric(2), Suit::Hearts), "2 of Hearts");
/// ```
#[must_use]
pub fn card_label(face: Face, suit: Suit) -> String {
    alloc::format!("{face} of {suit}")
}
