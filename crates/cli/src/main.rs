// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use showdown_eval::{Hand, HandValue, Showdown};

pub mod round;

#[derive(Debug, Parser)]
#[clap(version, about = "Poker hands evaluation and heads-up showdowns.")]
struct Cli {
    /// Logging verbosity, -v for debug and -vv for trace.
    #[clap(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand, for example `showdown eval AS KS QS JS TS`.
    Eval {
        /// The hand cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Compares two hands that share the board cards.
    Compare {
        /// The board cards.
        #[clap(long, short)]
        board: String,
        /// The first player cards.
        #[clap(long)]
        first: String,
        /// The second player cards.
        #[clap(long)]
        second: String,
    },
    /// Deals heads-up rounds from a shuffled deck.
    Deal {
        /// Number of rounds to deal.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
        rounds: u32,
        /// Seed for reproducible shuffles.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Command::Eval { cards } => {
            let hand = parse_hand(&cards.join(" "))?;
            let value = HandValue::eval(&hand)?;
            println!("{hand}: {value}");
        }
        Command::Compare {
            board,
            first,
            second,
        } => {
            let board = parse_hand(&board)?;
            let first = Hand::with_board(&board, &parse_hand(&first)?);
            let second = Hand::with_board(&board, &parse_hand(&second)?);

            let showdown = Showdown::resolve(&first, &second)?;
            println!("First:   {first} -> {}", showdown.first());
            println!("Second:  {second} -> {}", showdown.second());
            println!(
                "Outcome: {} (decided by {})",
                showdown.outcome(),
                showdown.decider()
            );
        }
        Command::Deal { rounds, seed } => {
            let config = round::Config {
                rounds: rounds as usize,
                seed,
            };

            round::run(config)?;
        }
    }

    Ok(())
}

fn parse_hand(s: &str) -> Result<Hand> {
    s.parse::<Hand>()
        .with_context(|| format!("Invalid cards {s:?}"))
}
