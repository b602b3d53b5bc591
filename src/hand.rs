//! Five card poker hand.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::category::HandCategory;
use crate::error::HandError;
use crate::rules::{HAND_SIZE, Ranking, rank_cards};

/// A poker hand of up to five unique cards.
///
/// Cards are kept sorted by rank, then suit. The hand is ranked when the
/// fifth card is added and the ranking is kept until [`Hand::clear`].
///
/// ```
/// use handrank::{Hand, HandCategory};
///
/// let hand: Hand = "QC,QD,QS,JH,JS".parse().unwrap();
/// assert_eq!(hand.category(), Some(HandCategory::FullHouse));
/// assert_eq!(hand.tiebreak(), 12);
/// assert_eq!(hand.rank_list(), &[11]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Ranking, set once the hand has five cards.
    ranking: Option<Ranking>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            ranking: None,
        }
    }

    /// Adds a card to the hand.
    ///
    /// Adding the fifth card ranks the hand. A failed add leaves the hand
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if the card is already in the
    /// hand, or [`HandError::HandFull`] if the hand has five cards.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.has(&card) {
            return Err(HandError::DuplicateCard(card));
        }

        if self.cards.len() == HAND_SIZE {
            return Err(HandError::HandFull);
        }

        self.cards.push(card);
        self.cards.sort_unstable();

        if self.cards.len() == HAND_SIZE {
            self.ranking = rank_cards(&self.cards);
        }

        Ok(())
    }

    /// Parses a card token such as `10C` and adds it to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidCard`] if the token does not parse, or any
    /// error from [`Hand::add`].
    pub fn add_token(&mut self, token: &str) -> Result<(), HandError> {
        let card = token.parse::<Card>()?;
        self.add(card)
    }

    /// Removes all cards and the ranking.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.ranking = None;
    }

    /// Returns whether the hand holds a card with the same rank and suit.
    #[must_use]
    pub fn has(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    /// Returns the cards in the hand, sorted by rank then suit.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand has five cards and has been ranked.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.ranking.is_some()
    }

    /// Returns the hand ranking.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NotReady`] until the hand has five cards.
    pub fn ranking(&self) -> Result<&Ranking, HandError> {
        self.ranking.as_ref().ok_or(HandError::NotReady)
    }

    /// Returns the hand category, `None` until the hand has five cards.
    #[must_use]
    pub fn category(&self) -> Option<HandCategory> {
        self.ranking.as_ref().map(|r| r.category)
    }

    /// Returns the tiebreak rank, 0 until the hand has five cards.
    #[must_use]
    pub fn tiebreak(&self) -> u8 {
        self.ranking.as_ref().map_or(0, |r| r.tiebreak)
    }

    /// Returns the rank list, empty until the hand has five cards.
    #[must_use]
    pub fn rank_list(&self) -> &[u8] {
        self.ranking
            .as_ref()
            .map(|r| r.rank_list.as_slice())
            .unwrap_or_default()
    }

    pub(crate) const fn ranking_opt(&self) -> Option<&Ranking> {
        self.ranking.as_ref()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses five comma separated card tokens, e.g. `2C,3H,4D,5C,6H`.
    ///
    /// Whitespace around each token is ignored, so `2C, 3H ,4D,5C,6H` parses
    /// to the same hand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(HandError::Empty);
        }

        let tokens = s.split(',').count();
        if tokens != HAND_SIZE {
            return Err(HandError::CardCount(tokens));
        }

        let mut hand = Self::new();
        for token in s.split(',') {
            hand.add_token(token)?;
        }
        Ok(hand)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
