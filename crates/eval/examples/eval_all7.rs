// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Counts the categories of all 7 cards hands, run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ```

use std::time::Instant;

use jokbo_eval::*;

#[rustfmt::skip]
fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; 10];

    Deck::default().for_each(7, |hand| {
        let category = HandValue::eval(hand).category();
        counts[category as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        println!("{:<17}{}", format!("{category}:"), counts[category as usize]);
    }
}
