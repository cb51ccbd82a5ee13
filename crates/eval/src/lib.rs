// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator scores each
//! five cards subset of a hand and keeps the best one, the resulting [Score] is
//! totally ordered so that hands can be compared and sorted.
//!
//! To use the evaluator build a [CardSet] from card identifiers or text, and
//! use [evaluate] to get its score:
//!
//! ```
//! # use showdown_eval::*;
//! let straight = "5S 6D 7H 8C 9S KD 2C".parse::<CardSet>().unwrap();
//! let pair = "AS AD 7H 8C 9S KD 2C".parse::<CardSet>().unwrap();
//!
//! let s1 = evaluate(&straight);
//! let s2 = evaluate(&pair);
//! assert_eq!(s1.category(), HandCategory::Straight);
//! assert_eq!(s2.category(), HandCategory::OnePair);
//! assert!(s1 > s2);
//! assert_eq!(winners(&[s2, s1]), vec![1]);
//! ```
//!
//! Use [evaluate_with_best_hand] to also get the five cards that make the hand:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = "AS AD AC KS KD 2C 3H".parse::<CardSet>().unwrap();
//! let hv = evaluate_with_best_hand(&cards);
//! assert_eq!(hv.category(), HandCategory::FullHouse);
//! assert_eq!(hv.score().values(), [12, 11, -1, -1, -1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod analyzer;
pub mod combinations;
mod detector;
pub mod eval;
pub mod score;

pub use eval::{HandValue, evaluate, evaluate_with_best_hand, score_hand, winners};
pub use score::{HandCategory, Score, compare};

// Reexport cards types.
pub use showdown_cards::{Card, CardError, CardSet, Rank, Suit};
