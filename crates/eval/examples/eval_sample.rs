// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_sample
// ```

use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use showdown_eval::*;

const SAMPLES: usize = 1_000_000;

fn main() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut counts = [0usize; 11];

    let now = Instant::now();
    for _ in 0..SAMPLES {
        let Some(hand) = Deck::new_and_shuffled(&mut rng).deal_many(7) else {
            continue;
        };

        if let Ok(value) = HandValue::eval(&hand) {
            counts[value.rank().value() as usize] += 1;
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let count = counts[rank.value() as usize];
        let pct = count as f64 * 100.0 / total as f64;
        println!("{:<17}{count:<9}{pct:.4}%", format!("{rank}:"));
    }
}
