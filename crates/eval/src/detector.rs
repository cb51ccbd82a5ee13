// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use showdown_cards::Rank;

use crate::{
    analyzer::HandAnalysis,
    score::{HandCategory, Score},
};

/// Classifies an analyzed five cards hand.
///
/// Categories are checked from the strongest down, the first match wins.
pub(crate) fn detect(hand: &HandAnalysis) -> Score {
    if let (true, Some(high)) = (hand.is_flush(), hand.straight_high()) {
        return Score::new(HandCategory::StraightFlush, &[high]);
    }

    if let Some(quads) = hand.ranks_with_count(4).next() {
        let kicker = hand.ranks_with_count(1).next().unwrap_or(quads);
        return Score::new(HandCategory::FourOfAKind, &[quads, kicker]);
    }

    let trips = hand.ranks_with_count(3).next();

    // At most two pairs in five cards.
    let mut pairs = [None; 2];
    for (slot, rank) in pairs.iter_mut().zip(hand.ranks_with_count(2)) {
        *slot = Some(rank);
    }

    if let (Some(trips), [Some(pair), _]) = (trips, pairs) {
        return Score::new(HandCategory::FullHouse, &[trips, pair]);
    }

    if hand.is_flush() {
        return Score::new(HandCategory::Flush, hand.ranks());
    }

    if let Some(high) = hand.straight_high() {
        return Score::new(HandCategory::Straight, &[high]);
    }

    let kickers = hand.ranks_with_count(1);
    match (trips, pairs) {
        (Some(trips), _) => with_kickers(HandCategory::ThreeOfAKind, &[trips], kickers),
        (None, [Some(high), Some(low)]) => {
            with_kickers(HandCategory::TwoPair, &[high, low], kickers)
        }
        (None, [Some(pair), None]) => with_kickers(HandCategory::OnePair, &[pair], kickers),
        _ => Score::new(HandCategory::HighCard, hand.ranks()),
    }
}

/// Builds a score from the ranks that define the category followed by the
/// kickers, highest first.
fn with_kickers(
    category: HandCategory,
    ranks: &[Rank],
    kickers: impl Iterator<Item = Rank>,
) -> Score {
    let mut tiebreak = [Rank::Deuce; 5];
    let mut len = 0;
    for rank in ranks.iter().copied().chain(kickers).take(5) {
        tiebreak[len] = rank;
        len += 1;
    }

    Score::new(category, &tiebreak[..len])
}
