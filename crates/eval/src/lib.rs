// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluates hands with any number of cards, usually 5 to 7, and finds the
//! best poker category in the hand together with a tie break card:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = "AS KS QS JS TS".parse::<Hand>().unwrap();
//! let value = HandValue::eval(&cards).unwrap();
//! assert_eq!(value.rank(), HandRank::RoyalFlush);
//! assert_eq!(value.tiebreak(), Card::new(Rank::Ace, Suit::Spades));
//! ```
//!
//! Two hands that share the board cards are compared with a [Showdown]:
//!
//! ```
//! # use showdown_eval::*;
//! let board = "KS 7D 2C 9H 4S".parse::<Hand>().unwrap();
//! let first = Hand::with_board(&board, &"KH 3D".parse::<Hand>().unwrap());
//! let second = Hand::with_board(&board, &"QH QD".parse::<Hand>().unwrap());
//!
//! let showdown = Showdown::resolve(&first, &second).unwrap();
//! assert_eq!(showdown.outcome(), Outcome::First);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Decider, EvalError, HandRank, HandValue, Outcome, Showdown};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Hand, ParseCardError, Rank, Suit};
