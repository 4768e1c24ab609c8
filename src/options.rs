//! Deck configuration options.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{FACES, Face, SUITS, Suit};

/// Suits and faces to build a deck from.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardsrs::{DeckOptions, Face, Suit};
///
/// let options = DeckOptions::default()
///     .with_suits([Suit::Hearts])
///     .with_faces([Face::ACE, Face::KING]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Suits, iterated as the outer loop.
    pub suits: Vec<Suit>,
    /// Faces, iterated as the inner loop.
    pub faces: Vec<Face>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            suits: SUITS.to_vec(),
            faces: FACES.to_vec(),
        }
    }
}

impl DeckOptions {
    /// Sets the suits.
    ///
    /// # Example
    ///
    /// ```
    /// use cardsrs::{DeckOptions, Suit};
    ///
    /// let options = DeckOptions::default().with_suits([Suit::Clubs, Suit::Spades]);
    /// assert_eq!(options.suits, vec![Suit::Clubs, Suit::Spades]);
    /// ```
    #[must_use]
    pub fn with_suits(mut self, suits: impl IntoIterator<Item = Suit>) -> Self {
        self.suits = suits.into_iter().collect();
        self
    }

    /// Sets the faces.
    ///
    /// # Example
    ///
    /// ```
    /// use cardsrs::{DeckOptions, Face};
    ///
    /// let options = DeckOptions::default().with_faces([Face::Numeric(9), Face::Numeric(10)]);
    /// assert_eq!(options.faces.len(), 2);
    /// ```
    #[must_use]
    pub fn with_faces(mut self, faces: impl IntoIterator<Item = Face>) -> Self {
        self.faces = faces.into_iter().collect();
        self
    }
}
