//! A playing card deck builder with optional `no_std` support.
//!
//! The crate provides a [`Cards`] type that builds the standard 52-card deck
//! as an ordered list of labels such as `"Ace of Spades"`, crossing the
//! [`SUITS`] and [`FACES`] enumerations.
//!
//! # Example
//!
//! ```
//! use cardsrs::{Cards, DECK_SIZE};
//!
//! let cards = Cards::new();
//! assert_eq!(cards.len(), DECK_SIZE);
//! assert_eq!(cards.deck().last().map(String::as_str), Some("10 of Clubs"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{DECK_SIZE, FACES, Face, SUITS, Suit, card_label};
pub use deck::Cards;
pub use error::{ParseFaceError, ParseSuitError};
pub use options::DeckOptions;
