// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! A card is identified by a number in `0..52` encoded as `rank * 4 + suit`,
//! this crate defines the types to create and decode cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.id(), 50);
//! assert_eq!(Card::try_from_id(50).unwrap(), ah);
//! ```
//!
//! and a [CardSet] type that validates a 5 to 7 cards hand before it is
//! handed to the evaluator:
//!
//! ```
//! # use showdown_cards::{CardError, CardSet};
//! let set = CardSet::validate_and_build(&[0, 21, 28, 38, 51]).unwrap();
//! assert_eq!(set.len(), 5);
//!
//! let err = CardSet::validate_and_build(&[0, 0, 21, 28, 38]).unwrap_err();
//! assert!(matches!(err, CardError::DuplicateCard(_)));
//! ```
//!
//! Sets can also be parsed from text, one two-characters card per word:
//!
//! ```
//! # use showdown_cards::CardSet;
//! let set = "AS KD 7h 7c 2D".parse::<CardSet>().unwrap();
//! assert_eq!(set.to_string(), "AS KD 7H 7C 2D");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit, decode};

mod card_set;
pub use card_set::CardSet;

mod error;
pub use error::CardError;
