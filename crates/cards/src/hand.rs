// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player hand.
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

use crate::{Card, ParseCardError};

/// The cards a player can use at showdown.
///
/// A hand is an unordered multiset of cards, usually the union of the board
/// cards and the player private cards, so 2 to 7 cards in Hold'em.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hand with the board cards and a player private cards.
    pub fn with_board(board: &[Card], hole: &[Card]) -> Self {
        board.iter().chain(hole).copied().collect()
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl ops::Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
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

/// Parses whitespace or comma separated cards, for example `"AS KD 10h"`.
impl FromStr for Hand {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect()
    }
}
