//! Comparison options.

use crate::compare::{Outcome, compare, hand_sanity};
use crate::error::CompareError;
use crate::hand::Hand;

/// Configuration options for comparing hands.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handrank::CompareOptions;
///
/// let options = CompareOptions::default().with_sanity_check(false);
/// assert!(!options.sanity_check);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompareOptions {
    /// Whether to reject hands sharing a card before comparing them, as if
    /// both hands were dealt from a single deck.
    pub sanity_check: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { sanity_check: true }
    }
}

impl CompareOptions {
    /// Sets whether hands sharing a card are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::{CompareError, CompareOptions, Hand, Outcome};
    ///
    /// let first: Hand = "4C,4D,4H,4S,5C".parse().unwrap();
    /// let second: Hand = "4C,4D,4H,4S,6C".parse().unwrap();
    ///
    /// let strict = CompareOptions::default();
    /// assert!(matches!(
    ///     strict.compare(&first, &second),
    ///     Err(CompareError::DuplicateAcrossHands(_))
    /// ));
    ///
    /// let lenient = CompareOptions::default().with_sanity_check(false);
    /// assert_eq!(lenient.compare(&first, &second), Ok(Outcome::SecondWins));
    /// ```
    #[must_use]
    pub const fn with_sanity_check(mut self, enabled: bool) -> Self {
        self.sanity_check = enabled;
        self
    }

    /// Compares two hands with these options.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::DuplicateAcrossHands`] if the sanity check is
    /// enabled and a card is in both hands, or any error from
    /// [`compare`](crate::compare()).
    pub fn compare(&self, first: &Hand, second: &Hand) -> Result<Outcome, CompareError> {
        if self.sanity_check {
            hand_sanity(first, second)?;
        }
        compare(first, second)
    }
}
