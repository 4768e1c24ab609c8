//! The deck of card labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::card::{FACES, Face, SUITS, Suit, card_label};
use crate::options::DeckOptions;

/// A deck of card labels, built eagerly on construction.
///
/// Labels are ordered suit by suit; within a suit, faces follow their
/// enumeration order.
///
/// ```
/// use cardsrs::Cards;
///
/// let cards = Cards::new();
/// assert_eq!(cards.deck()[0], "Ace of Spades");
/// assert_eq!(cards.len(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cards {
    /// Card labels in deck order.
    deck: Vec<String>,
}

impl Cards {
    /// Creates the standard 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Self { deck: Vec::new() };
        cards.make_deck(&SUITS, &FACES);
        cards
    }

    /// Creates a deck from the suits and faces in `options`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardsrs::{Cards, DeckOptions, Face, Suit};
    ///
    /// let options = DeckOptions::default()
    ///     .with_suits([Suit::Hearts])
    ///     .with_faces([Face::ACE, Face::Numeric(2)]);
    /// let cards = Cards::with_options(&options);
    /// assert_eq!(cards.deck(), ["Ace of Hearts", "2 of Hearts"]);
    /// ```
    #[must_use]
    pub fn with_options(options: &DeckOptions) -> Self {
        let mut cards = Self { deck: Vec::new() };
        cards.make_deck(&options.suits, &options.faces);
        cards
    }

    /// Rebuilds the deck from `suits` and `faces`.
    ///
    /// Any previous contents are replaced, so calling this twice with the
    /// same input leaves the same deck. An empty `suits` or `faces` yields
    /// an empty deck.
    pub fn make_deck(&mut self, suits: &[Suit], faces: &[Face]) {
        self.deck.clear();
        self.deck.reserve(suits.len() * faces.len());

        for &suit in suits {
            for &face in faces {
                self.deck.push(card_label(face, suit));
            }
        }

        debug!(
            suits = suits.len(),
            faces = faces.len(),
            cards = self.deck.len(),
            "built deck"
        );
    }

    /// Returns the card labels in deck order.
    #[must_use]
    pub fn deck(&self) -> &[String] {
        &self.deck
    }

    /// Consumes the deck and returns its labels.
    #[must_use]
    pub fn into_deck(self) -> Vec<String> {
        self.deck
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Iterates over the card labels.
    pub fn iter(&self) -> core::slice::Iter<'_, String> {
        self.deck.iter()
    }
}

impl Default for Cards {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the card labels separated by `", "`.
///
/// This is a plain listing for people to read; the derived [`Debug`] output
/// is the one that names the type and its fields.
///
/// ```
/// use cardsrs::{Cards, DeckOptions, Face, Suit};
///
/// let options = DeckOptions::default()
///     .with_suits([Suit::Clubs])
///     .with_faces([Face::JACK, Face::Numeric(3)]);
/// let cards = Cards::with_options(&options);
/// assert_eq!(cards.to_string(), "Jack of Clubs, 3 of Clubs");
/// assert_eq!(format!("{cards:?}"), r#"Cards { deck: ["Jack of Clubs", "3 of Clubs"] }"#);
/// ```
impl fmt::Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.deck.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

impl IntoIterator for Cards {
    type Item = String;
    type IntoIter = alloc::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.deck.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cards {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.deck.iter()
    }
}
