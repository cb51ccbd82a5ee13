// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example showdown -- --board "QS JD 8C 3H 3S" --hand "AC KD" --hand "9C TD"
// ```
use anyhow::{Result, bail};
use clap::Parser;
use log::{error, info};

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The board cards shared by all players, e.g. "QS JD 8C".
    #[clap(long, short, default_value = "")]
    board: String,
    /// A player cards, repeat for each player.
    #[clap(long = "hand", short = 'p', required = true)]
    hands: Vec<String>,
}

fn run(cli: Cli) -> Result<()> {
    let mut values = Vec::with_capacity(cli.hands.len());

    for (player, hand) in cli.hands.iter().enumerate() {
        let cards = format!("{hand} {}", cli.board).parse::<CardSet>()?;
        let hv = evaluate_with_best_hand(&cards);
        info!("Player {player} {cards} -> {hv}");
        values.push(hv);
    }

    if values.is_empty() {
        bail!("No hands to compare");
    }

    let scores = values.iter().map(|hv| hv.score()).collect::<Vec<_>>();
    for player in winners(&scores) {
        println!("Player {player} wins with {}", values[player]);
    }

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}
