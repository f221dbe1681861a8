// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokbo poker hand evaluator.
//!
//! Finds the best five cards poker hand in a set of 5 to 9 cards, as dealt in
//! community cards poker games, and returns its value and the combination of
//! cards that makes the hand.
//!
//! The value is a single integer that orders hands across and within
//! categories, so that players hands can be compared directly:
//!
//! ```
//! # use jokbo_eval::*;
//! let flush = "2H 5H 7H 9H JH 6S 8D".parse::<Hand>().unwrap().evaluate();
//! assert_eq!(flush.category(), HandCategory::Flush);
//! assert_eq!(flush.value().raw(), 51_008_060_401);
//!
//! let pair = "AS AD KH 9C 7S 4D 2H".parse::<Hand>().unwrap().evaluate();
//! assert!(flush.value() > pair.value());
//! assert_eq!(showdown::winners(&[pair, flush]), [1]);
//! ```
//!
//! Card codes can be evaluated directly with [evaluate_codes], a card code is
//! `rank + 13 * suit` with ranks from deuce (0) to ace (12) and suits spades,
//! diamonds, hearts, clubs (0 to 3):
//!
//! ```
//! # use jokbo_eval::*;
//! let (value, combination) = evaluate_codes(&[0, 13, 26, 39, 1]).unwrap();
//! assert_eq!(value, 70_000_000_102);
//! assert_eq!(combination, [0, 13, 26, 39, 1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{CATEGORY_BAND, Evaluation, HandCategory, HandValue, InvalidValue, evaluate};

pub mod hand;
pub use hand::{Hand, InvalidHand, evaluate_codes};

pub mod showdown;

// Reexport cards types.
pub use jokbo_cards::{Card, CardError, Deck, Rank, Suit};
