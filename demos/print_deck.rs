//! Prints the standard deck, one card per line.
//!
//! Set `RUST_LOG=debug` to see the build event.

use cardsrs::{Cards, DeckOptions, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cards = Cards::new();
    for label in &cards {
        println!("{label}");
    }
    println!("{} cards", cards.len());

    let hearts = Cards::with_options(&DeckOptions::default().with_suits([Suit::Hearts]));
    println!("Hearts only: {hearts}");
}
