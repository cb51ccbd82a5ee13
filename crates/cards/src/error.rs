// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards validation errors.
use thiserror::Error;

use crate::{Card, CardSet};

/// Errors raised when building cards from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A card identifier outside `0..52`.
    #[error("Invalid card id {0}, must be less than 52")]
    InvalidCardId(u8),
    /// The same card appears more than once in a set.
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
    /// A set with fewer than 5 or more than 7 cards.
    #[error(
        "Invalid hand size {0}, must be between {min} and {max}",
        min = CardSet::MIN_SIZE,
        max = CardSet::MAX_SIZE
    )]
    InvalidHandSize(usize),
    /// A card text that is not a rank character followed by a suit character.
    #[error("Invalid card text {0:?}")]
    InvalidCardText(String),
}
