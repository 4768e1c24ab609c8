//! Deck integration tests.

use std::collections::HashSet;

use cardsrs::{
    Cards, DECK_SIZE, DeckOptions, FACES, Face, ParseFaceError, ParseSuitError, SUITS, Suit,
    card_label,
};
use rstest::rstest;

#[test]
fn standard_deck_has_52_unique_cards() {
    let cards = Cards::new();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards.len(), 52);

    let unique: HashSet<&String> = cards.iter().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn deck_is_suit_major_face_minor() {
    let cards = Cards::new();
    for (i, label) in cards.deck().iter().enumerate() {
        let expected = format!("{} of {}", FACES[i % 13], SUITS[i / 13]);
        assert_eq!(label, &expected, "card at index {i}");
    }
}

#[rstest]
#[case(0, "Ace of Spades")]
#[case(3, "Jack of Spades")]
#[case(4, "2 of Spades")]
#[case(12, "10 of Spades")]
#[case(13, "Ace of Hearts")]
#[case(26, "Ace of Diamonds")]
#[case(39, "Ace of Clubs")]
#[case(51, "10 of Clubs")]
fn standard_deck_positions(#[case] index: usize, #[case] expected: &str) {
    let cards = Cards::new();
    assert_eq!(cards.deck()[index], expected);
}

#[test]
fn default_matches_new() {
    assert_eq!(Cards::default(), Cards::new());
    assert_eq!(Cards::with_options(&DeckOptions::default()), Cards::new());
}

#[test]
fn empty_inputs_yield_empty_deck() {
    let mut cards = Cards::new();
    cards.make_deck(&[], &[]);
    assert!(cards.is_empty());

    cards.make_deck(&SUITS, &[]);
    assert!(cards.is_empty());

    cards.make_deck(&[], &FACES);
    assert!(cards.is_empty());

    let options = DeckOptions::default()
        .with_suits(Vec::<Suit>::new())
        .with_faces(Vec::<Face>::new());
    assert!(Cards::with_options(&options).is_empty());
}

#[test]
fn make_deck_replaces_previous_contents() {
    let mut cards = Cards::new();
    cards.make_deck(&SUITS, &FACES);
    cards.make_deck(&SUITS, &FACES);
    assert_eq!(cards.len(), 52);
    assert_eq!(cards, Cards::new());

    cards.make_deck(&[Suit::Diamonds], &[Face::QUEEN]);
    assert_eq!(cards.deck(), ["Queen of Diamonds"]);
}

#[test]
fn custom_options_follow_given_order() {
    let options = DeckOptions::default()
        .with_suits([Suit::Clubs, Suit::Hearts])
        .with_faces([Face::Numeric(10), Face::KING]);
    let cards = Cards::with_options(&options);

    assert_eq!(
        cards.into_deck(),
        vec![
            "10 of Clubs".to_string(),
            "King of Clubs".to_string(),
            "10 of Hearts".to_string(),
            "King of Hearts".to_string(),
        ]
    );
}

#[test]
fn card_label_renders_face_and_suit() {
    assert_eq!(card_label(Face::ACE, Suit::Spades), "Ace of Spades");
    assert_eq!(card_label(Face::Numeric(7), Suit::Diamonds), "7 of Diamonds");
}

#[test]
fn debug_shows_type_and_fields() {
    let options = DeckOptions::default()
        .with_suits([Suit::Hearts])
        .with_faces([Face::ACE]);
    let cards = Cards::with_options(&options);
    assert_eq!(format!("{cards:?}"), r#"Cards { deck: ["Ace of Hearts"] }"#);
}

#[test]
fn display_joins_labels() {
    let options = DeckOptions::default()
        .with_suits([Suit::Spades])
        .with_faces([Face::ACE, Face::Numeric(2)]);
    let cards = Cards::with_options(&options);
    assert_eq!(cards.to_string(), "Ace of Spades, 2 of Spades");
}

#[test]
fn owned_iteration_yields_labels_in_order() {
    let labels: Vec<String> = Cards::new().into_iter().take(2).collect();
    assert_eq!(labels, ["Ace of Spades", "King of Spades"]);
}

#[test]
fn every_label_parses_back_to_its_parts() {
    for label in &Cards::new() {
        let (face, suit) = label.split_once(" of ").expect("label has separator");
        assert!(face.parse::<Face>().is_ok(), "face {face}");
        assert!(suit.parse::<Suit>().is_ok(), "suit {suit}");
    }
}

#[rstest]
#[case("", ParseSuitError::Empty)]
#[case("spades", ParseSuitError::Unknown)]
#[case("Stars", ParseSuitError::Unknown)]
fn suit_parse_errors(#[case] input: &str, #[case] expected: ParseSuitError) {
    assert_eq!(input.parse::<Suit>(), Err(expected));
}

#[rstest]
#[case("", ParseFaceError::Empty)]
#[case("1", ParseFaceError::OutOfRange)]
#[case("11", ParseFaceError::OutOfRange)]
#[case("Joker", ParseFaceError::Unknown)]
#[case("-2", ParseFaceError::Unknown)]
#[case("+5", ParseFaceError::Unknown)]
#[case("+10", ParseFaceError::Unknown)]
#[case("05", ParseFaceError::Unknown)]
#[case("010", ParseFaceError::Unknown)]
#[case("0", ParseFaceError::OutOfRange)]
#[case("300", ParseFaceError::OutOfRange)]
#[case(" 5", ParseFaceError::Unknown)]
fn face_parse_errors(#[case] input: &str, #[case] expected: ParseFaceError) {
    assert_eq!(input.parse::<Face>(), Err(expected));
}

#[test]
fn parsed_faces_render_back_to_their_text() {
    for face in FACES {
        let text = face.to_string();
        let parsed: Face = text.parse().expect("standard face parses");
        assert_eq!(parsed, face);
        assert_eq!(parsed.to_string(), text);
    }
}

#[test]
fn faces_parse_to_standard_values() {
    assert_eq!("King".parse::<Face>(), Ok(Face::KING));
    assert_eq!("10".parse::<Face>(), Ok(Face::Numeric(10)));
    assert_eq!("Hearts".parse::<Suit>(), Ok(Suit::Hearts));
}

#[test]
fn error_messages() {
    assert_eq!(ParseSuitError::Unknown.to_string(), "unknown suit");
    assert_eq!(ParseFaceError::OutOfRange.to_string(), "face number out of range");
}
