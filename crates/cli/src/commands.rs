// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command implementations.
use anyhow::{Context, Result};
use log::{debug, info};
use rand::prelude::*;
use std::{
    io::Write,
    sync::atomic::{AtomicU64, Ordering},
};

use jokbo_eval::{Card, Deck, Evaluation, Hand, HandCategory, HandValue, showdown};

/// Number of board cards dealt in a game.
const BOARD_SIZE: usize = 5;

/// Parses a card given as a name (`AS`, `10h`) or as a code (`0..52`).
fn parse_card(s: &str) -> Result<Card> {
    let card = match s.parse::<u8>() {
        Ok(code) => Card::try_from(code)?,
        Err(_) => s.parse::<Card>()?,
    };

    Ok(card)
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_evaluation<W: Write>(out: &mut W, label: &str, eval: &Evaluation) -> Result<()> {
    writeln!(
        out,
        "{label:<12}{:<16} {:>12}  [{}]",
        eval.category(),
        eval.value(),
        format_cards(eval.combination())
    )?;
    Ok(())
}

/// Evaluates a hand and writes its category, value and combination.
///
/// Each argument can hold more than one card separated by spaces or commas.
pub fn eval<W: Write>(out: &mut W, args: &[String]) -> Result<Evaluation> {
    let cards = args
        .iter()
        .flat_map(|a| a.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|t| !t.is_empty())
        .map(parse_card)
        .collect::<Result<Vec<_>>>()?;

    let hand = Hand::new(cards).context("invalid hand")?;
    debug!("Evaluating {hand}");

    let eval = hand.evaluate();
    writeln!(out, "{:<12}{hand}", "Hand")?;
    write_evaluation(out, "Best", &eval)?;

    Ok(eval)
}

/// Deals two cards to each player and a board, writes the players hands and
/// returns the winners indices.
pub fn deal<W: Write, R: Rng>(out: &mut W, rng: &mut R, players: usize) -> Result<Vec<usize>> {
    info!("Dealing {players} players");

    let mut deck = Deck::new_and_shuffled(rng);
    let mut next_card = || deck.deal().context("the deck is out of cards");

    let hole_cards = (0..players)
        .map(|_| -> Result<[Card; 2]> { Ok([next_card()?, next_card()?]) })
        .collect::<Result<Vec<_>>>()?;
    let board = (0..BOARD_SIZE)
        .map(|_| next_card())
        .collect::<Result<Vec<_>>>()?;

    writeln!(out, "{:<12}{}", "Board", format_cards(&board))?;

    let mut evaluations = Vec::with_capacity(players);
    for (idx, hole) in hole_cards.iter().enumerate() {
        let hand = Hand::new(hole.iter().chain(&board).copied())?;
        let eval = hand.evaluate();
        write_evaluation(out, &format!("P{} {}", idx + 1, format_cards(hole)), &eval)?;
        evaluations.push(eval);
    }

    let winners = showdown::winners(&evaluations);
    let names = winners
        .iter()
        .map(|idx| format!("P{}", idx + 1))
        .collect::<Vec<_>>();

    if winners.len() > 1 {
        writeln!(out, "Split pot between {}", names.join(", "))?;
    } else {
        writeln!(out, "Winner {}", names.join(""))?;
    }

    Ok(winners)
}

/// Per task category counters.
#[derive(Default)]
struct Counters([AtomicU64; HandCategory::ALL.len()]);

/// Samples random hands of `cards` cards from `tasks` threads and writes the
/// frequency of each category, returns the counts by category.
pub fn stats<W: Write>(
    out: &mut W,
    hands: usize,
    cards: usize,
    tasks: usize,
) -> Result<Vec<u64>> {
    let samples_per_task = hands.div_ceil(tasks);
    info!("Sampling {samples_per_task} hands of {cards} cards on {tasks} tasks");

    // Per task counters to avoid contention.
    let task_counters = (0..tasks)
        .map(|_| Counters::default())
        .collect::<Vec<_>>();

    Deck::default().par_sample(tasks, samples_per_task, cards, |task_id, hand| {
        let category = HandValue::eval(hand).category();
        task_counters[task_id].0[category as usize].fetch_add(1, Ordering::Relaxed);
    });

    let counts = HandCategory::categories()
        .map(|category| {
            task_counters
                .iter()
                .map(|c| c.0[category as usize].load(Ordering::Relaxed))
                .sum::<u64>()
        })
        .collect::<Vec<_>>();

    let total = counts.iter().sum::<u64>().max(1);
    for (category, count) in HandCategory::categories().zip(&counts) {
        writeln!(
            out,
            "{:<17}{count:>10} {:>8.4}%",
            format!("{category}:"),
            *count as f64 * 100.0 / total as f64
        )?;
    }
    writeln!(out, "{:<17}{:>10}", "Total:", counts.iter().sum::<u64>())?;

    Ok(counts)
}
