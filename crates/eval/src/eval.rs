// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator scores every five cards subset of a 5, 6, or 7 cards set and
//! keeps the best one, so that all categories are always detected on the same
//! five cards.
//!
//! It provides an [evaluate] function that returns the hand [Score], and a
//! [evaluate_with_best_hand] function that also returns the five best cards,
//! useful for UIs to show a winning hand.
use log::trace;
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, CardSet};

use crate::{
    analyzer::HandAnalysis,
    combinations::Combinations,
    detector::detect,
    score::{HandCategory, Score},
};

/// The number of cards in a scored hand.
pub const HAND_SIZE: usize = 5;

/// Evaluates a cards set and returns the score of its best five cards hand.
pub fn evaluate(cards: &CardSet) -> Score {
    HandValue::eval(cards).score()
}

/// Evaluates a cards set and returns its best five cards hand with its score.
pub fn evaluate_with_best_hand(cards: &CardSet) -> HandValue {
    HandValue::eval(cards)
}

/// Scores exactly five cards.
pub fn score_hand(hand: &[Card; HAND_SIZE]) -> Score {
    detect(&HandAnalysis::new(hand))
}

/// Returns the indices of all the scores equal to the best score.
///
/// Returns an empty vector if there are no scores.
pub fn winners(scores: &[Score]) -> Vec<usize> {
    let Some(best) = scores.iter().max() else {
        return Vec::new();
    };

    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| *s == best)
        .map(|(idx, _)| idx)
        .collect()
}

/// A hand value with the five cards that produced it.
///
/// Values compare by score only, two values with different cards and the same
/// score are equal.
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    score: Score,
    hand: [Card; HAND_SIZE],
}

impl HandValue {
    /// Evaluates all the five cards hands in `cards` and keeps the best one.
    ///
    /// When more subsets have the same best score the first in enumeration
    /// order is kept.
    pub fn eval(cards: &CardSet) -> Self {
        let cards = cards.cards();

        let score_subset = |idx: [usize; HAND_SIZE]| {
            let hand = idx.map(|i| cards[i]);
            HandValue {
                score: score_hand(&hand),
                hand,
            }
        };

        // A set has at least five cards, start from the first subset.
        let first = score_subset(std::array::from_fn(|i| i));
        let best = Combinations::<HAND_SIZE>::new(cards.len())
            .skip(1)
            .map(score_subset)
            .fold(first, |best, hv| if hv.score > best.score { hv } else { best });

        trace!("Best hand {best} out of {} cards", cards.len());
        best
    }

    /// The hand score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.score.category()
    }

    /// The five cards that make the hand.
    pub fn hand(&self) -> &[Card; HAND_SIZE] {
        &self.hand
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)?;
        for card in &self.hand {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::compare;
    use rand::prelude::*;
    use showdown_cards::{Rank, Suit};

    fn eval(cards: &str) -> Score {
        evaluate(&cards.parse::<CardSet>().unwrap())
    }

    #[test]
    fn five_cards_scenarios() {
        use Rank::*;

        // 2S, 7D, 9C, JH, AS
        let set = CardSet::validate_and_build(&[3, 21, 28, 38, 51]).unwrap();
        let score = evaluate(&set);
        assert_eq!(score.category(), HandCategory::HighCard);
        assert_eq!(
            score,
            Score::new(HandCategory::HighCard, &[Ace, Jack, Nine, Seven, Deuce])
        );

        let score = eval("4C 4D 4H 9S 9C");
        assert_eq!(score.category(), HandCategory::FullHouse);
        assert_eq!(
            score.tiebreak(),
            [Some(Four), Some(Nine), None, None, None]
        );

        let score = eval("5S 6S 7S 8S 9S");
        assert_eq!(score.category(), HandCategory::StraightFlush);
        assert_eq!(score.tiebreak(), [Some(Nine), None, None, None, None]);
    }

    #[test]
    fn seven_cards_full_house() {
        let hv = evaluate_with_best_hand(&"AS AD AC KS KD 2C 3H".parse().unwrap());
        assert_eq!(hv.category(), HandCategory::FullHouse);
        assert_eq!(
            hv.score().tiebreak(),
            [Some(Rank::Ace), Some(Rank::King), None, None, None]
        );

        let mut hand = hv.hand().to_vec();
        hand.sort();
        assert_eq!(
            hand,
            ["KD", "KS", "AC", "AD", "AS"]
                .into_iter()
                .map(|c| c.parse::<Card>().unwrap())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn best_subset_across_categories() {
        // Flush and straight use different cards, the flush wins.
        let score = eval("4H 5C 6H 7D 8H KH 2H");
        assert_eq!(score.category(), HandCategory::Flush);

        // Straight flush hidden in a flush with a pair.
        let score = eval("9S 9D TS JS QS KS 2C");
        assert_eq!(score, Score::new(HandCategory::StraightFlush, &[Rank::King]));

        // Two trips make a full house with the best pair.
        let score = eval("7C 7D 7H 5S 5C 5D KH");
        assert_eq!(
            score,
            Score::new(HandCategory::FullHouse, &[Rank::Seven, Rank::Five])
        );

        // Three pairs play the two best pairs and the best kicker.
        let score = eval("7C 7D 5H 5S 3C 3D 4H");
        assert_eq!(
            score,
            Score::new(HandCategory::TwoPair, &[Rank::Seven, Rank::Five, Rank::Four])
        );

        // Quads take the best kicker even if it is paired.
        let score = eval("8C 8D 8H 8S 3C 3D QH");
        assert_eq!(
            score,
            Score::new(HandCategory::FourOfAKind, &[Rank::Eight, Rank::Queen])
        );

        // The wheel loses to a six high straight in the same hand.
        let score = eval("AC 2D 3H 4S 5C 6D JH");
        assert_eq!(score, Score::new(HandCategory::Straight, &[Rank::Six]));

        // Ace high straight.
        let score = eval("TC JD QH KS AC 2D 3H");
        assert_eq!(score, Score::new(HandCategory::Straight, &[Rank::Ace]));
        assert!(evaluate_with_best_hand(&"TC JC QC KC AC 2D".parse().unwrap())
            .score()
            .is_royal_flush());
    }

    #[test]
    fn category_ordering() {
        let hands = [
            "2S 7D 9C JH AS",
            "2S 2D 9C JH AS",
            "2S 2D 9C 9H AS",
            "2S 2D 2C JH AS",
            "AS 2D 3C 4H 5S",
            "2H 3H 4H 5H 7H",
            "2S 2D 2C 3H 3S",
            "2S 2D 2C 2H 3S",
            "AS 2S 3S 4S 5S",
        ];

        let scores = hands.map(eval);
        for (i, a) in scores.iter().enumerate() {
            assert_eq!(a.category() as usize, i);
            for b in &scores[..i] {
                assert_eq!(compare(a, b), Ordering::Greater);
            }
        }
    }

    #[test]
    fn order_invariance_and_purity() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ids = (0..52).collect::<Vec<u8>>();

        for len in [5, 6, 7] {
            for _ in 0..200 {
                ids.shuffle(&mut rng);
                let mut hand = ids[..len].to_vec();
                let set = CardSet::validate_and_build(&hand).unwrap();
                let hv = evaluate_with_best_hand(&set);

                // Same score for the same set.
                assert_eq!(evaluate(&set), hv.score());

                // Same score for any permutation.
                hand.shuffle(&mut rng);
                let shuffled = CardSet::validate_and_build(&hand).unwrap();
                assert_eq!(evaluate(&shuffled), hv.score());

                // The best hand comes from the set and scores the same.
                assert!(hv.hand().iter().all(|c| set.cards().contains(c)));
                assert_eq!(score_hand(hv.hand()), hv.score());
            }
        }
    }

    #[test]
    fn adding_cards_never_lowers_score() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut ids = (0..52).collect::<Vec<u8>>();

        for _ in 0..200 {
            ids.shuffle(&mut rng);
            let five = evaluate(&CardSet::validate_and_build(&ids[..5]).unwrap());
            let six = evaluate(&CardSet::validate_and_build(&ids[..6]).unwrap());
            let seven = evaluate(&CardSet::validate_and_build(&ids[..7]).unwrap());
            assert!(five <= six && six <= seven);
        }
    }

    #[test]
    fn showdown_winners() {
        let board = "QS JD 8C 3H 3S";
        let scores = ["AC KD", "QC 2D", "QH 4H", "9C TD"]
            .map(|hole| eval(&format!("{hole} {board}")));

        // The straight wins.
        assert_eq!(winners(&scores), vec![3]);

        // The board plays for everybody.
        let board = "AS KS QS JS TS";
        let scores = ["2C 3D", "4H 5C"].map(|hole| eval(&format!("{hole} {board}")));
        assert_eq!(winners(&scores), vec![0, 1]);

        assert!(winners(&[]).is_empty());
    }

    #[test]
    fn hand_value_display() {
        let set = CardSet::from_cards(&[
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Clubs),
        ])
        .unwrap();
        let hv = evaluate_with_best_hand(&set);
        assert_eq!(hv.to_string(), "One Pair AH AS KC 9D 2C");
    }

    // Checks the categories distribution of all the 2.6M five cards hands.
    #[test]
    #[ignore]
    fn all_five_cards_hands() {
        let mut counts = [0usize; HandCategory::COUNT];

        for idx in Combinations::<HAND_SIZE>::new(Card::COUNT as usize) {
            let ids = idx.map(|i| i as u8);
            let set = CardSet::validate_and_build(&ids).unwrap();
            counts[evaluate(&set).category() as usize] += 1;
        }

        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40]
        );
    }
}
