//! A five-card poker hand ranking engine with optional `no_std` support.
//!
//! The crate provides [`Card`] and [`Hand`] types. A hand is ranked when its
//! fifth card is added, and two ranked hands compare by category, then
//! tiebreak rank, then the remaining ranks.
//!
//! # Example
//!
//! ```
//! use handrank::{Hand, HandCategory, Outcome, compare};
//!
//! let royal: Hand = "10C,JC,QC,KC,AC".parse().unwrap();
//! let quads: Hand = "4C,4D,4H,4S,5C".parse().unwrap();
//!
//! assert_eq!(royal.category(), Some(HandCategory::StraightFlush));
//! assert_eq!(compare(&royal, &quads), Ok(Outcome::FirstWins));
//! assert!(royal > quads);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod compare;
pub mod error;
pub mod hand;
pub mod options;
pub mod rules;

// Re-export main types
pub use card::{Card, MAX_RANK, MIN_RANK, Suit};
pub use category::HandCategory;
pub use compare::{Outcome, compare, hand_sanity};
pub use error::{CardError, CompareError, HandError};
pub use hand::Hand;
pub use options::CompareOptions;
pub use rules::{HAND_SIZE, Ranking, rank_cards};
