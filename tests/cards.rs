use preflop_advisor::cards::{Card, HoleCards, Rank, Suit};
use preflop_advisor::error::AdvisorError;

#[test]
fn parses_numeric_card_line() {
    let hand: HoleCards = "14 H 13 S".parse().expect("valid card line");
    assert_eq!(hand.first, Card::new(Rank::ACE, Suit::Hearts));
    assert_eq!(hand.second, Card::new(Rank::KING, Suit::Spades));
    assert!(!hand.is_suited());
}

#[test]
fn parses_compact_and_symbol_forms() {
    let compact: HoleCards = "AhKh".parse().unwrap();
    let spaced: HoleCards = "A♥ K♥".parse().unwrap();
    let words: HoleCards = "a hearts k hearts".parse().unwrap();
    assert_eq!(compact, spaced);
    assert_eq!(compact, words);
    assert!(compact.is_suited());

    let tens: HoleCards = "10s9s".parse().unwrap();
    assert_eq!(tens.first.rank, Rank::TEN);
    assert_eq!(tens.second.rank_value(), 9);
}

#[test]
fn rejects_out_of_range_ranks() {
    assert_eq!(Rank::new(0), Err(AdvisorError::InvalidRank(0)));
    assert_eq!(Rank::new(15), Err(AdvisorError::InvalidRank(15)));
    assert_eq!(
        "15 H 2 S".parse::<HoleCards>(),
        Err(AdvisorError::InvalidRank(15))
    );
    assert_eq!(Rank::new(1).map(Rank::value), Ok(1));
}

#[test]
fn rejects_unknown_suits_and_shapes() {
    assert_eq!(
        "14 X 13 S".parse::<HoleCards>(),
        Err(AdvisorError::InvalidSuit("X".to_string()))
    );
    assert!(matches!(
        "14 H".parse::<HoleCards>(),
        Err(AdvisorError::MalformedInput(_))
    ));
    assert!(matches!(
        "AhKsQd".parse::<HoleCards>(),
        Err(AdvisorError::MalformedInput(_))
    ));
    assert!(matches!(
        "ace H king S".parse::<HoleCards>(),
        Err(AdvisorError::MalformedInput(_))
    ));
}

#[test]
fn notation_uses_short_labels() {
    let hand: HoleCards = "14 S 10 D".parse().unwrap();
    assert_eq!(hand.to_string(), "A♠ T♦");
    assert_eq!(Card::new(Rank::new(7).unwrap(), Suit::Clubs).notation(), "7♣");
}
