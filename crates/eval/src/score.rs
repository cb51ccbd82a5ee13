// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and comparable hand scores.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Rank;

/// The integer value used to pad tiebreak values, lower than any rank.
pub const NO_RANK: i8 = -1;

/// The poker hand category, ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair = 1,
    /// Two pairs of different ranks.
    TwoPair = 2,
    /// Three cards of the same rank.
    ThreeOfAKind = 3,
    /// Five cards of consecutive ranks.
    Straight = 4,
    /// Five cards of the same suit.
    Flush = 5,
    /// Three of a kind and a pair.
    FullHouse = 6,
    /// Four cards of the same rank.
    FourOfAKind = 7,
    /// Five cards of consecutive ranks in the same suit.
    StraightFlush = 8,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories, weakest first.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a five cards hand.
///
/// A score is a category followed by five tiebreak ranks, most significant
/// first, padded with `None` when the category uses fewer ranks. Scores are
/// totally ordered by category and then by tiebreak ranks, two scores that
/// compare equal are a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score {
    // Field order defines the derived ordering.
    category: HandCategory,
    tiebreak: [Option<Rank>; 5],
}

impl Score {
    /// Creates a score from a category and up to five tiebreak ranks.
    ///
    /// Panics if more than five ranks are given.
    pub fn new(category: HandCategory, ranks: &[Rank]) -> Self {
        assert!(ranks.len() <= 5, "At most 5 tiebreak ranks");

        let mut tiebreak = [None; 5];
        for (slot, rank) in tiebreak.iter_mut().zip(ranks) {
            *slot = Some(*rank);
        }

        Self { category, tiebreak }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tiebreak ranks, `None` entries are padding.
    pub fn tiebreak(&self) -> [Option<Rank>; 5] {
        self.tiebreak
    }

    /// The tiebreak ranks as integers in `0..13`, padding is [NO_RANK].
    pub fn values(&self) -> [i8; 5] {
        self.tiebreak.map(|r| r.map_or(NO_RANK, |r| r as i8))
    }

    /// Checks if this is an ace high straight flush.
    pub fn is_royal_flush(&self) -> bool {
        self.category == HandCategory::StraightFlush && self.tiebreak[0] == Some(Rank::Ace)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_royal_flush() {
            write!(f, "Royal Flush")
        } else {
            write!(f, "{}", self.category)
        }
    }
}

/// Compares two scores, [Ordering::Greater] if `a` is the stronger hand.
pub fn compare(a: &Score, b: &Score) -> Ordering {
    a.cmp(b)
}
