// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Elapsed:         0.412s
// Hands/sec:       6308155
//
// High Card:       1302540
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use showdown_eval::{combinations::Combinations, *};

#[rustfmt::skip]
fn main() -> anyhow::Result<()> {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    for idx in Combinations::<5>::new(Card::COUNT as usize) {
        let cards = CardSet::validate_and_build(&idx.map(|i| i as u8))?;
        let category = evaluate(&cards).category();
        counts[category as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandCategory::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandCategory::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandCategory::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandCategory::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandCategory::Straight as usize]);
    println!("Flush:           {}", counts[HandCategory::Flush as usize]);
    println!("Full House:      {}", counts[HandCategory::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandCategory::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandCategory::StraightFlush as usize]);

    Ok(())
}
