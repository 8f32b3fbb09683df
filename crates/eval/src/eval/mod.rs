// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator finds the best category in a collection of cards by running
//! the [detect] functions from the royal flush down to the high card and
//! stopping at the first match. The result is a [HandValue] with the category
//! and a representative card used to break ties.
//!
//! A [Showdown] compares two hands by category, then by tie break card, and
//! then by each hand highest card, hands that are equal at every step are a
//! draw.

pub mod detect;

#[allow(clippy::module_inception)]
mod eval;
pub use eval::{EvalError, HandRank, HandValue};

mod showdown;
pub use showdown::{Decider, Outcome, Showdown};
