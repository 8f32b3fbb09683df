// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "KD".parse::<Card>().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let board = deck.deal_many(5).unwrap();
//! assert_eq!(board.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
//!
//! and a [Hand] type that holds the cards a player uses at showdown:
//!
//! ```
//! # use showdown_cards::{Hand};
//! let board = "AS KS QS 7D 2C".parse::<Hand>().unwrap();
//! let hole = "JS TS".parse::<Hand>().unwrap();
//! let hand = Hand::with_board(&board, &hole);
//! assert_eq!(hand.len(), 7);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};

mod hand;
pub use hand::Hand;
