// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up rounds dealing.
use ahash::AHashMap;
use anyhow::{Context, Result};
use log::{debug, info};
use rand::{prelude::*, rngs::StdRng};
use std::fmt;

use showdown_eval::{Deck, Hand, HandRank, Outcome, Showdown};

/// The deal configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of rounds to deal.
    pub rounds: usize,
    /// Optional seed for the shuffles.
    pub seed: Option<u64>,
}

/// Deals the configured rounds and prints the results.
pub fn run(config: Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    info!("Dealing {} rounds", config.rounds);

    let mut tally = Tally::default();
    for _ in 0..config.rounds {
        let round = Round::deal(&mut rng)?;
        if config.rounds == 1 {
            println!("{round}");
        } else {
            debug!("{}", round.showdown.outcome());
        }

        tally.add(&round);
    }

    if config.rounds > 1 {
        println!("{tally}");
    }

    Ok(())
}

/// A heads-up round dealt from a fresh shuffled deck.
#[derive(Debug)]
pub struct Round {
    board: Hand,
    first: Hand,
    second: Hand,
    showdown: Showdown,
}

impl Round {
    /// Deals the board and two cards to each player and resolves the showdown.
    pub fn deal<R: Rng>(rng: &mut R) -> Result<Self> {
        let mut deck = Deck::new_and_shuffled(rng);
        let mut deal = |n: usize| deck.deal_many(n).context("Not enough cards in the deck");

        // Flop, players cards, then turn and river.
        let mut board = deal(3)?;
        let first = Hand::from(deal(2)?);
        let second = Hand::from(deal(2)?);
        board.extend(deal(2)?);
        let board = Hand::from(board);

        let showdown = Showdown::resolve(
            &Hand::with_board(&board, &first),
            &Hand::with_board(&board, &second),
        )?;

        Ok(Self {
            board,
            first,
            second,
            showdown,
        })
    }

    /// The round showdown.
    pub fn showdown(&self) -> &Showdown {
        &self.showdown
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:   {}", self.board)?;
        writeln!(f, "First:   {} -> {}", self.first, self.showdown.first())?;
        writeln!(f, "Second:  {} -> {}", self.second, self.showdown.second())?;
        write!(
            f,
            "Outcome: {} (decided by {})",
            self.showdown.outcome(),
            self.showdown.decider()
        )
    }
}

/// Rounds outcomes and hand categories counts.
#[derive(Debug, Default)]
pub struct Tally {
    rounds: usize,
    outcomes: AHashMap<Outcome, usize>,
    ranks: AHashMap<HandRank, usize>,
}

impl Tally {
    /// Adds a round to the tally.
    pub fn add(&mut self, round: &Round) {
        self.rounds += 1;
        *self.outcomes.entry(round.showdown.outcome()).or_default() += 1;

        for value in [round.showdown.first(), round.showdown.second()] {
            *self.ranks.entry(value.rank()).or_default() += 1;
        }
    }

    /// The number of rounds with the given outcome.
    pub fn outcomes(&self, outcome: Outcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or_default()
    }

    /// The number of hands with the given category.
    pub fn ranks(&self, rank: HandRank) -> usize {
        self.ranks.get(&rank).copied().unwrap_or_default()
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds:          {}", self.rounds)?;
        writeln!(f, "First wins:      {}", self.outcomes(Outcome::First))?;
        writeln!(f, "Second wins:     {}", self.outcomes(Outcome::Second))?;
        writeln!(f, "Draws:           {}", self.outcomes(Outcome::Draw))?;

        for rank in HandRank::ranks().rev() {
            writeln!(f)?;
            write!(f, "{:<17}{}", format!("{rank}:"), self.ranks(rank))?;
        }

        Ok(())
    }
}
