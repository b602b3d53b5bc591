//! Card construction and parsing tests.

use handrank::{Card, CardError, Suit};
use rstest::rstest;

#[rstest]
#[case("2", 2)]
#[case("3", 3)]
#[case("4", 4)]
#[case("5", 5)]
#[case("6", 6)]
#[case("7", 7)]
#[case("8", 8)]
#[case("9", 9)]
#[case("10", 10)]
#[case("J", 11)]
#[case("Q", 12)]
#[case("K", 13)]
#[case("A", 14)]
fn valid_rank_tokens_map_to_rank(#[case] token: &str, #[case] rank: u8) {
    for (suit_token, suit) in [
        ("H", Suit::Hearts),
        ("C", Suit::Clubs),
        ("S", Suit::Spades),
        ("D", Suit::Diamonds),
    ] {
        let card = Card::new(token, suit_token).unwrap();
        assert_eq!(card.rank(), rank);
        assert_eq!(card.suit(), suit);
    }
}

#[rstest]
#[case("0")]
#[case("1")]
#[case("11")]
#[case("14")]
#[case("99")]
#[case("256")]
#[case("-2")]
#[case("+5")]
#[case("+10")]
#[case("j")]
#[case("a")]
#[case("X")]
#[case("JJ")]
#[case("#")]
#[case(" ")]
#[case("")]
fn invalid_rank_tokens_fail(#[case] token: &str) {
    assert_eq!(Card::new(token, "H"), Err(CardError::InvalidRank));
}

#[rstest]
#[case("X")]
#[case("h")]
#[case("HH")]
#[case("♥")]
#[case("")]
fn invalid_suit_tokens_fail(#[case] token: &str) {
    assert_eq!(Card::new("A", token), Err(CardError::InvalidSuit));
}

#[test]
fn rank_is_checked_before_suit() {
    assert_eq!(Card::new("1", "X"), Err(CardError::InvalidRank));
}

#[test]
fn from_rank_validates_range() {
    assert_eq!(Card::from_rank(1, Suit::Clubs), Err(CardError::InvalidRank));
    assert_eq!(Card::from_rank(15, Suit::Clubs), Err(CardError::InvalidRank));

    let ace = Card::from_rank(14, Suit::Spades).unwrap();
    assert_eq!(ace, Card::new("A", "S").unwrap());
    assert_eq!(Card::from_rank(2, Suit::Hearts).unwrap().rank(), 2);
}

#[rstest]
#[case("10C", 10, Suit::Clubs)]
#[case("JD", 11, Suit::Diamonds)]
#[case("AS", 14, Suit::Spades)]
#[case("2H", 2, Suit::Hearts)]
#[case(" KH ", 13, Suit::Hearts)]
fn parses_card_tokens(#[case] token: &str, #[case] rank: u8, #[case] suit: Suit) {
    let card: Card = token.parse().unwrap();
    assert_eq!(card.rank(), rank);
    assert_eq!(card.suit(), suit);
}

#[rstest]
#[case("", CardError::InvalidToken)]
#[case(" ", CardError::InvalidToken)]
#[case("H", CardError::InvalidToken)]
#[case("000H", CardError::InvalidToken)]
#[case("000X", CardError::InvalidToken)]
#[case("10CC", CardError::InvalidToken)]
#[case("0H", CardError::InvalidRank)]
#[case("+5H", CardError::InvalidRank)]
#[case("1C", CardError::InvalidRank)]
#[case("11C", CardError::InvalidRank)]
#[case("ZH", CardError::InvalidRank)]
#[case("0X", CardError::InvalidRank)]
#[case("AX", CardError::InvalidSuit)]
#[case("10h", CardError::InvalidSuit)]
fn rejects_bad_card_tokens(#[case] token: &str, #[case] err: CardError) {
    assert_eq!(token.parse::<Card>(), Err(err));
}

#[test]
fn display_round_trips_all_cards() {
    for suit in Suit::ALL {
        for rank in 2..=14 {
            let card = Card::from_rank(rank, suit).unwrap();
            let token = card.to_string();
            assert_eq!(token.parse::<Card>().unwrap(), card);
        }
    }

    assert_eq!(Card::new("10", "C").unwrap().to_string(), "10C");
    assert_eq!(Card::new("Q", "D").unwrap().to_string(), "QD");
}

#[test]
fn cards_equal_by_rank_and_suit() {
    let a = Card::new("9", "S").unwrap();
    assert_eq!(a, "9S".parse::<Card>().unwrap());
    assert_ne!(a, "9H".parse::<Card>().unwrap());
    assert_ne!(a, "8S".parse::<Card>().unwrap());
}

#[test]
fn cards_order_by_rank_then_suit() {
    let two_spades = Card::new("2", "S").unwrap();
    let three_clubs = Card::new("3", "C").unwrap();
    let three_hearts = Card::new("3", "H").unwrap();

    assert!(three_clubs > two_spades);
    assert!(three_hearts > three_clubs);
    assert!(three_hearts > two_spades);
}

#[test]
fn suit_tokens() {
    for suit in Suit::ALL {
        let token = suit.token().to_string();
        assert_eq!(Suit::from_token(&token), Ok(suit));
        assert_eq!(suit.to_string(), token);
    }
}
