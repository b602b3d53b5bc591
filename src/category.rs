//! Poker hand categories.

use core::fmt;

/// Category of a five card hand, from weakest to strongest.
///
/// A royal flush is the ace high [`HandCategory::StraightFlush`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No other category applies.
    HighCard = 0,
    /// Two cards of one rank.
    Pair = 1,
    /// Two cards of one rank and two cards of another.
    TwoPair = 2,
    /// Three cards of one rank.
    ThreeOfAKind = 3,
    /// Five cards in sequence.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Three cards of one rank and two of another.
    FullHouse = 6,
    /// Four cards of one rank.
    FourOfAKind = 7,
    /// Five cards in sequence, all of one suit.
    StraightFlush = 8,
}

impl HandCategory {
    /// Returns the category value, higher is stronger.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the snake case name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "high_card",
            Self::Pair => "pair",
            Self::TwoPair => "two_pair",
            Self::ThreeOfAKind => "three_of_a_kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full_house",
            Self::FourOfAKind => "four_of_a_kind",
            Self::StraightFlush => "straight_flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
