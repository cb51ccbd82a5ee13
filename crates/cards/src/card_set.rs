// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A validated set of cards.
use log::debug;
use std::{fmt, str::FromStr};

use crate::{Card, CardError};

/// A set of 5 to 7 unique cards.
///
/// A set can only be created through validation so that a hand evaluator can
/// assume every card is valid and distinct. The set is immutable once built,
/// the cards keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// The minimum number of cards in a set.
    pub const MIN_SIZE: usize = 5;

    /// The maximum number of cards in a set.
    pub const MAX_SIZE: usize = 7;

    /// Builds a set from cards identifiers.
    ///
    /// Fails with [CardError::InvalidHandSize] if there are fewer than 5 or more
    /// than 7 ids, with [CardError::InvalidCardId] if an id is not in `0..52`, and
    /// with [CardError::DuplicateCard] if an id appears more than once.
    pub fn validate_and_build(ids: &[u8]) -> Result<CardSet, CardError> {
        Self::check_size(ids.len())?;

        let cards = ids
            .iter()
            .map(|&id| Card::try_from_id(id))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| debug!("Rejected card ids {ids:?}: {e}"))?;

        Self::build(cards)
    }

    /// Builds a set from already decoded cards.
    pub fn from_cards(cards: &[Card]) -> Result<CardSet, CardError> {
        Self::check_size(cards.len())?;
        Self::build(cards.to_vec())
    }

    /// The number of cards in this set.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the set is empty, always false for a validated set.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in this set.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards in this set.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    fn check_size(len: usize) -> Result<(), CardError> {
        if (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&len) {
            Ok(())
        } else {
            debug!("Rejected hand of {len} cards");
            Err(CardError::InvalidHandSize(len))
        }
    }

    fn build(cards: Vec<Card>) -> Result<CardSet, CardError> {
        // The set is at most 7 cards so a bitmask over the ids is enough.
        let mut seen = 0u64;
        for card in &cards {
            let bit = 1u64 << card.id();
            if seen & bit != 0 {
                debug!("Rejected duplicate card {card}");
                return Err(CardError::DuplicateCard(*card));
            }

            seen |= bit;
        }

        Ok(CardSet { cards })
    }
}

impl FromStr for CardSet {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(&cards)
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
