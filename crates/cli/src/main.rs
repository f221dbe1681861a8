// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokbo CLI, evaluates poker hands from the command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use rand::prelude::*;
use std::{io, process::ExitCode};

pub mod commands;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enables debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand of 5 to 9 cards.
    Eval {
        /// The cards as names (AS, TD, 10h) or codes (rank + 13 * suit).
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Deals a random table and shows the showdown.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Samples random hands and counts their categories.
    Stats {
        /// Number of hands to sample.
        #[clap(long, short = 'n', default_value_t = 1_000_000)]
        hands: usize,
        /// Number of cards in each hand.
        #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=9))]
        cards: u8,
        /// Number of sampling tasks.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
}

fn run(cli: Cli) -> Result<()> {
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Eval { cards } => {
            commands::eval(&mut out, &cards)?;
        }
        Command::Deal { players, seed } => {
            let players = players as usize;
            match seed {
                Some(seed) => commands::deal(&mut out, &mut StdRng::seed_from_u64(seed), players)?,
                None => commands::deal(&mut out, &mut rand::rng(), players)?,
            };
        }
        Command::Stats {
            hands,
            cards,
            tasks,
        } => {
            commands::stats(&mut out, hands, cards as usize, tasks as usize)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
