//! Card types and token parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Lowest card rank (two).
pub const MIN_RANK: u8 = 2;

/// Highest card rank (ace).
pub const MAX_RANK: u8 = 14;

/// Card suit.
///
/// The declaration order is only used to sort cards of equal rank, suits
/// never change the strength of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in sort order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Parses a single letter suit token (`C`, `D`, `H` or `S`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for any other token.
    pub fn from_token(token: &str) -> Result<Self, CardError> {
        match token {
            "C" => Ok(Self::Clubs),
            "D" => Ok(Self::Diamonds),
            "H" => Ok(Self::Hearts),
            "S" => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }

    /// Returns the single letter token for this suit.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

fn parse_rank(token: &str) -> Result<u8, CardError> {
    match token {
        "J" => Ok(11),
        "Q" => Ok(12),
        "K" => Ok(13),
        "A" => Ok(14),
        // Digits only, no sign. Face cards only parse from letters.
        _ if token.bytes().all(|b| b.is_ascii_digit()) => match token.parse::<u8>() {
            Ok(rank @ MIN_RANK..=10) => Ok(rank),
            _ => Err(CardError::InvalidRank),
        },
        _ => Err(CardError::InvalidRank),
    }
}

/// A playing card.
///
/// Cards order by rank first and suit second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card (11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    rank: u8,
    /// The suit of the card.
    suit: Suit,
}

impl Card {
    /// Creates a card from a rank token and a suit token.
    ///
    /// The rank token is `2` to `10` or one of `J`, `Q`, `K`, `A`; the suit
    /// token is one of `H`, `C`, `S`, `D`. Tokens are case sensitive.
    ///
    /// ```
    /// use handrank::{Card, Suit};
    ///
    /// let card = Card::new("Q", "H").unwrap();
    /// assert_eq!(card.rank(), 12);
    /// assert_eq!(card.suit(), Suit::Hearts);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] when a
    /// token cannot be mapped.
    pub fn new(rank_token: &str, suit_token: &str) -> Result<Self, CardError> {
        let rank = parse_rank(rank_token)?;
        let suit = Suit::from_token(suit_token)?;
        Ok(Self { rank, suit })
    }

    /// Creates a card from a numeric rank in `2..=14`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub const fn from_rank(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::InvalidRank);
        }
        Ok(Self { rank, suit })
    }

    /// Returns the card rank.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the card suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card token such as `10C`, `JD` or `AS`: the last character is
    /// the suit, the rest is the rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let Some(suit) = token.chars().next_back() else {
            return Err(CardError::InvalidToken);
        };

        if !(2..=3).contains(&token.chars().count()) {
            return Err(CardError::InvalidToken);
        }

        let (rank, suit) = token.split_at(token.len() - suit.len_utf8());
        Self::new(rank, suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            14 => write!(f, "A{}", self.suit),
            rank => write!(f, "{rank}{}", self.suit),
        }
    }
}
