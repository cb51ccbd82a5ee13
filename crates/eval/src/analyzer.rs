// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand analysis.
use showdown_cards::{Card, Rank, Suit};

/// The ranks of a wheel straight in descending order (A-5-4-3-2).
const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];

/// Rank and suit statistics for exactly five distinct cards.
///
/// The analysis characterizes one fixed hand, it never looks at other cards.
#[derive(Debug, Clone)]
pub(crate) struct HandAnalysis {
    /// All five ranks sorted descending.
    ranks: [Rank; 5],
    /// Distinct ranks sorted descending, the first `num_distinct` are valid.
    distinct: [Rank; 5],
    num_distinct: usize,
    rank_counts: [u8; Rank::COUNT],
    suit_counts: [u8; Suit::COUNT],
    is_flush: bool,
    straight_high: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(hand: &[Card; 5]) -> Self {
        let mut rank_counts = [0u8; Rank::COUNT];
        let mut suit_counts = [0u8; Suit::COUNT];

        for card in hand {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let mut ranks = hand.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let mut distinct = ranks;
        let mut num_distinct = 0;
        for rank in Rank::ranks().rev() {
            if rank_counts[rank as usize] > 0 {
                distinct[num_distinct] = rank;
                num_distinct += 1;
            }
        }

        let is_flush = suit_counts.contains(&5);
        let straight_high = Self::find_straight_high(&ranks, num_distinct);

        Self {
            ranks,
            distinct,
            num_distinct,
            rank_counts,
            suit_counts,
            is_flush,
            straight_high,
        }
    }

    /// Returns the high rank of a straight, the wheel plays five high.
    fn find_straight_high(ranks: &[Rank; 5], num_distinct: usize) -> Option<Rank> {
        if num_distinct != 5 {
            return None;
        }

        if ranks[0] as u8 - ranks[4] as u8 == 4 {
            Some(ranks[0])
        } else if *ranks == WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }

    /// All five ranks, highest first.
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.ranks
    }

    /// The distinct ranks, highest first.
    pub fn distinct_ranks(&self) -> &[Rank] {
        &self.distinct[..self.num_distinct]
    }

    /// How many cards of `rank` are in the hand.
    pub fn rank_count(&self, rank: Rank) -> u8 {
        self.rank_counts[rank as usize]
    }

    /// How many cards of `suit` are in the hand.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_counts[suit as usize]
    }

    /// Ranks appearing exactly `count` times, highest first.
    pub fn ranks_with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        self.distinct_ranks()
            .iter()
            .copied()
            .filter(move |&r| self.rank_count(r) == count)
    }

    pub fn is_flush(&self) -> bool {
        self.is_flush
    }

    pub fn straight_high(&self) -> Option<Rank> {
        self.straight_high
    }
}
