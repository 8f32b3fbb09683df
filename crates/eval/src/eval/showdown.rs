// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up showdown resolution.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Card;

use super::{EvalError, HandValue, detect};

/// Who wins a showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The first hand wins.
    First,
    /// The second hand wins.
    Second,
    /// Nobody wins, the pot is split.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self {
            Outcome::First => "first hand wins",
            Outcome::Second => "second hand wins",
            Outcome::Draw => "draw",
        };

        write!(f, "{outcome}")
    }
}

/// The comparison that decided a showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decider {
    /// The hands have different categories.
    HandRank,
    /// Same category, the tie break cards have different ranks.
    TieBreak,
    /// Same category and tie break rank, the hands highest cards differ.
    HighCard,
    /// The hands are equal at every step.
    Exhausted,
}

impl fmt::Display for Decider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decider = match self {
            Decider::HandRank => "hand rank",
            Decider::TieBreak => "tie break card",
            Decider::HighCard => "high card",
            Decider::Exhausted => "nothing",
        };

        write!(f, "{decider}")
    }
}

/// The result of comparing two hands at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    first: HandValue,
    second: HandValue,
    outcome: Outcome,
    decider: Decider,
}

impl Showdown {
    /// Compares two hands, each made of the board cards and a player cards.
    ///
    /// The hands are compared by category first, then by the rank of their tie
    /// break cards, then by the rank of their highest card. Hands equal at all
    /// three steps are a draw.
    pub fn resolve(first: &[Card], second: &[Card]) -> Result<Self, EvalError> {
        let first_value = HandValue::eval(first)?;
        let second_value = HandValue::eval(second)?;

        let (ordering, decider) = match first_value.rank().cmp(&second_value.rank()) {
            Ordering::Equal => {
                let first_tiebreak = first_value.tiebreak().rank();
                let second_tiebreak = second_value.tiebreak().rank();

                match first_tiebreak.cmp(&second_tiebreak) {
                    Ordering::Equal => {
                        let first_high = detect::high_card(first).ok_or(EvalError::EmptyInput)?;
                        let second_high =
                            detect::high_card(second).ok_or(EvalError::EmptyInput)?;

                        match first_high.rank().cmp(&second_high.rank()) {
                            Ordering::Equal => (Ordering::Equal, Decider::Exhausted),
                            ordering => (ordering, Decider::HighCard),
                        }
                    }
                    ordering => (ordering, Decider::TieBreak),
                }
            }
            ordering => (ordering, Decider::HandRank),
        };

        let outcome = match ordering {
            Ordering::Greater => Outcome::First,
            Ordering::Less => Outcome::Second,
            Ordering::Equal => Outcome::Draw,
        };

        debug!("Showdown {first_value} vs {second_value}: {outcome} by {decider}");

        Ok(Self {
            first: first_value,
            second: second_value,
            outcome,
            decider,
        })
    }

    /// Who wins.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The comparison that decided the outcome.
    pub fn decider(&self) -> Decider {
        self.decider
    }

    /// The first hand value.
    pub fn first(&self) -> HandValue {
        self.first
    }

    /// The second hand value.
    pub fn second(&self) -> HandValue {
        self.second
    }
}
