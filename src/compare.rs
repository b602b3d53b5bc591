//! Hand comparison.
//!
//! All comparison operators derive from [`Ranking::try_cmp`]: category first,
//! then tiebreak, then the rank list element by element.

use core::cmp::Ordering;

use crate::error::CompareError;
use crate::hand::Hand;
use crate::rules::Ranking;

/// Result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The first hand wins.
    FirstWins,
    /// The second hand wins.
    SecondWins,
    /// Both hands have the same strength.
    Draw,
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::FirstWins,
            Ordering::Less => Self::SecondWins,
            Ordering::Equal => Self::Draw,
        }
    }
}

impl Ranking {
    /// Compares two rankings.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::RankMismatch`] if category and tiebreak are
    /// equal but the rank lists have different lengths.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, CompareError> {
        let ordering = self
            .category
            .cmp(&other.category)
            .then(self.tiebreak.cmp(&other.tiebreak));
        if ordering.is_ne() {
            return Ok(ordering);
        }

        if self.rank_list.len() != other.rank_list.len() {
            return Err(CompareError::RankMismatch {
                left: self.rank_list.len(),
                right: other.rank_list.len(),
            });
        }

        Ok(self
            .rank_list
            .iter()
            .zip(&other.rank_list)
            .map(|(a, b)| a.cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal))
    }
}

impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Hand {
    /// Compares two hands.
    ///
    /// Two hands without five cards compare equal.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::NotReady`] if only one of the hands has five
    /// cards, or [`CompareError::RankMismatch`] on inconsistent rankings.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, CompareError> {
        match (self.ranking_opt(), other.ranking_opt()) {
            (Some(a), Some(b)) => a.try_cmp(b),
            (None, None) => Ok(Ordering::Equal),
            _ => Err(CompareError::NotReady),
        }
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.ranking_opt() == other.ranking_opt()
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

/// Compares two complete hands.
///
/// ```
/// use handrank::{Hand, Outcome, compare};
///
/// let flush: Hand = "AS,JS,9S,8S,2S".parse().unwrap();
/// let straight: Hand = "5S,6C,7D,8H,9S".parse().unwrap();
/// assert_eq!(compare(&flush, &straight), Ok(Outcome::FirstWins));
/// ```
///
/// # Errors
///
/// Returns [`CompareError::NotReady`] if a hand does not have five cards, or
/// [`CompareError::RankMismatch`] on inconsistent rankings.
pub fn compare(first: &Hand, second: &Hand) -> Result<Outcome, CompareError> {
    let (Ok(a), Ok(b)) = (first.ranking(), second.ranking()) else {
        return Err(CompareError::NotReady);
    };

    let outcome = Outcome::from(a.try_cmp(b)?);
    log::debug!("{first} ({}) vs {second} ({}): {outcome:?}", a.category, b.category);
    Ok(outcome)
}

/// Checks that no card appears in both hands, as if dealt from one deck.
///
/// # Errors
///
/// Returns [`CompareError::DuplicateAcrossHands`] with the first shared card.
pub fn hand_sanity(first: &Hand, second: &Hand) -> Result<(), CompareError> {
    match first.cards().iter().find(|c| second.has(c)) {
        Some(card) => Err(CompareError::DuplicateAcrossHands(*card)),
        None => Ok(()),
    }
}
