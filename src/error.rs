//! Error types for card, hand and comparison operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank token is not `2`..`10`, `J`, `Q`, `K` or `A`.
    #[error("card rank must be between 2 and A")]
    InvalidRank,
    /// The suit token is not `H`, `C`, `S` or `D`.
    #[error("card suit must be one of H, C, S, D")]
    InvalidSuit,
    /// The card token is blank or not 2-3 characters long.
    #[error("card token must be 2 or 3 characters")]
    InvalidToken,
}

/// Errors that can occur while building or querying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is already in this hand.
    #[error("card {0} already exists in this hand")]
    DuplicateCard(Card),
    /// The hand already holds five cards.
    #[error("hand already has 5 cards")]
    HandFull,
    /// The hand does not have five cards yet.
    #[error("hand must have exactly 5 cards")]
    NotReady,
    /// A card token could not be parsed.
    #[error("invalid card: {0}")]
    InvalidCard(#[from] CardError),
    /// The hand string is blank.
    #[error("hand string is empty")]
    Empty,
    /// The hand string does not hold five comma separated cards.
    #[error("hand must have 5 comma separated cards, found {0}")]
    CardCount(usize),
}

/// Errors that can occur while comparing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// One of the hands does not have five cards.
    #[error("both hands must have exactly 5 cards")]
    NotReady,
    /// Rank lists have different lengths at equal category and tiebreak.
    #[error("length of hand rankings do not match: {left} and {right}")]
    RankMismatch {
        /// Rank list length of the left hand.
        left: usize,
        /// Rank list length of the right hand.
        right: usize,
    },
    /// The same card is in both hands.
    #[error("card {0} exists in both hands")]
    DuplicateAcrossHands(Card),
}

impl CompareError {
    /// Returns whether this error signals a ranking defect rather than bad input.
    ///
    /// Only [`CompareError::RankMismatch`] is a defect: it cannot happen for
    /// hands ranked by this crate.
    #[must_use]
    pub const fn is_defect(&self) -> bool {
        matches!(self, Self::RankMismatch { .. })
    }
}
