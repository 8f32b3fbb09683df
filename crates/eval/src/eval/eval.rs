// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use showdown_cards::Card;

use super::detect;

/// Evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// There are no cards to evaluate.
    #[error("cannot evaluate a hand with no cards")]
    EmptyInput,
}

/// The hand category, from the high card to the royal flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// The highest card.
    HighCard = 1,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all the hand ranks from the high card to the royal flush.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
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
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The rank strength in 1..=10.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

type Detector = fn(&[Card]) -> Option<Card>;

/// Detectors from the strongest to the weakest category, the high card is the
/// fallback that matches any non empty hand.
const DETECTORS: [(HandRank, Detector); 10] = [
    (HandRank::RoyalFlush, detect::royal_flush),
    (HandRank::StraightFlush, detect::straight_flush),
    (HandRank::FourOfAKind, detect::four_of_a_kind),
    (HandRank::FullHouse, detect::full_house),
    (HandRank::Flush, detect::flush),
    (HandRank::Straight, detect::straight),
    (HandRank::ThreeOfAKind, detect::three_of_a_kind),
    (HandRank::TwoPair, detect::two_pair),
    (HandRank::OnePair, detect::one_pair),
    (HandRank::HighCard, detect::high_card),
];

/// The value of a hand: its category and the card used to break ties between
/// hands of the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Card,
}

impl HandValue {
    /// Evaluates a hand with any number of cards.
    ///
    /// Returns [EvalError::EmptyInput] if there are no cards.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        let value = DETECTORS
            .iter()
            .find_map(|&(rank, detect)| {
                detect(cards).map(|tiebreak| HandValue { rank, tiebreak })
            })
            .ok_or(EvalError::EmptyInput)?;

        trace!("Evaluated {} cards as {value}", cards.len());

        Ok(value)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The card that breaks ties with another hand of the same category.
    pub fn tiebreak(&self) -> Card {
        self.tiebreak
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank, self.tiebreak)
    }
}
