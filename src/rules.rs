//! Category detection rules.
//!
//! A hand is ranked by walking a fixed rule table from the strongest category
//! down, the first rule that matches decides the hand [`Ranking`].

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, MAX_RANK};
use crate::category::HandCategory;

/// Number of cards in a complete hand.
pub const HAND_SIZE: usize = 5;

const ACE_LOW: [u8; HAND_SIZE] = [14, 5, 4, 3, 2];

/// Ranking data of a complete hand.
///
/// Rankings compare by category, then tiebreak, then rank list element by
/// element (see [`Ranking::try_cmp`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ranking {
    /// The hand category.
    pub category: HandCategory,
    /// Rank of the determining multiple (the quad, the triple, the higher
    /// pair), 0 when the category has none.
    pub tiebreak: u8,
    /// Residual ranks, most significant first.
    pub rank_list: Vec<u8>,
}

/// Rank counts and suit information shared by all rules.
struct Tally {
    /// Ranks sorted descending.
    ranks: [u8; HAND_SIZE],
    /// `(count, rank)` for each distinct rank, by count then rank, descending.
    groups: Vec<(u8, u8)>,
    /// Whether all cards share one suit.
    suited: bool,
}

impl Tally {
    fn new(cards: [Card; HAND_SIZE]) -> Self {
        let mut ranks = cards.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let mut counts = [0u8; MAX_RANK as usize + 1];
        for rank in ranks {
            counts[rank as usize] += 1;
        }

        let mut groups = counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(rank, count)| (*count, rank as u8))
            .collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let suited = cards.iter().all(|c| c.suit() == cards[0].suit());

        Self {
            ranks,
            groups,
            suited,
        }
    }

    /// Returns the straight values, descending, with an ace low straight as
    /// `[5, 4, 3, 2, 1]`.
    fn straight(&self) -> Option<Vec<u8>> {
        if self.ranks == ACE_LOW {
            return Some(vec![5, 4, 3, 2, 1]);
        }

        self.ranks
            .windows(2)
            .all(|w| w[0] == w[1] + 1)
            .then(|| self.ranks.to_vec())
    }

    fn count(&self, index: usize) -> u8 {
        self.groups.get(index).map_or(0, |g| g.0)
    }

    /// Ranks of the groups from `index` onwards.
    fn ranks_from(&self, index: usize) -> Vec<u8> {
        self.groups.iter().skip(index).map(|g| g.1).collect()
    }
}

/// Tiebreak and rank list for a matching rule.
type Rule = fn(&Tally) -> Option<(u8, Vec<u8>)>;

/// Rules in strength order.
const RULES: [(HandCategory, Rule); 9] = [
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::Pair, pair),
    (HandCategory::HighCard, high_card),
];

fn straight_flush(t: &Tally) -> Option<(u8, Vec<u8>)> {
    if !t.suited {
        return None;
    }
    t.straight().map(|ranks| (0, ranks))
}

fn four_of_a_kind(t: &Tally) -> Option<(u8, Vec<u8>)> {
    (t.count(0) == 4).then(|| (t.groups[0].1, t.ranks_from(1)))
}

fn full_house(t: &Tally) -> Option<(u8, Vec<u8>)> {
    (t.groups.len() == 2 && t.count(0) == 3).then(|| (t.groups[0].1, t.ranks_from(1)))
}

fn flush(t: &Tally) -> Option<(u8, Vec<u8>)> {
    t.suited.then(|| (0, t.ranks.to_vec()))
}

fn straight(t: &Tally) -> Option<(u8, Vec<u8>)> {
    t.straight().map(|ranks| (0, ranks))
}

fn three_of_a_kind(t: &Tally) -> Option<(u8, Vec<u8>)> {
    (t.count(0) == 3).then(|| (t.groups[0].1, t.ranks_from(1)))
}

fn two_pair(t: &Tally) -> Option<(u8, Vec<u8>)> {
    // Lower pair first, then the kicker.
    (t.count(0) == 2 && t.count(1) == 2).then(|| (t.groups[0].1, t.ranks_from(1)))
}

fn pair(t: &Tally) -> Option<(u8, Vec<u8>)> {
    (t.count(0) == 2).then(|| (t.groups[0].1, t.ranks_from(1)))
}

fn high_card(t: &Tally) -> Option<(u8, Vec<u8>)> {
    Some((0, t.ranks.to_vec()))
}

/// Ranks a five card hand.
///
/// Returns `None` unless exactly [`HAND_SIZE`] cards are given.
#[must_use]
pub fn rank_cards(cards: &[Card]) -> Option<Ranking> {
    let cards: [Card; HAND_SIZE] = cards.try_into().ok()?;
    let tally = Tally::new(cards);

    RULES.iter().find_map(|(category, rule)| {
        rule(&tally).map(|(tiebreak, rank_list)| {
            log::trace!("ranked {category}: tiebreak {tiebreak}, ranks {rank_list:?}");
            Ranking {
                category: *category,
                tiebreak,
                rank_list,
            }
        })
    })
}
