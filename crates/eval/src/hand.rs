// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Validated player hands.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use jokbo_cards::{Card, CardError};

use crate::eval::{Evaluation, evaluate};

/// Errors for cards that don't make a valid hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidHand {
    /// Less than [Hand::MIN_CARDS] cards.
    #[error("a hand needs at least {min} cards, got {0}", min = Hand::MIN_CARDS)]
    TooFewCards(usize),
    /// More than [Hand::MAX_CARDS] cards.
    #[error("a hand has at most {max} cards, got {0}", max = Hand::MAX_CARDS)]
    TooManyCards(usize),
    /// A card code not in `0..52`.
    #[error("invalid card code {0}, expected a code in 0..52")]
    InvalidCode(u8),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card that cannot be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// A player hand, the hole cards and the board cards.
///
/// A hand has between [Hand::MIN_CARDS] and [Hand::MAX_CARDS] distinct cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// The minimum number of cards in a hand.
    pub const MIN_CARDS: usize = 5;

    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 9;

    /// Creates a hand checking the number of cards and duplicates.
    pub fn new<I>(cards: I) -> Result<Self, InvalidHand>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards = cards.into_iter().collect::<Vec<_>>();

        match cards.len() {
            n if n < Self::MIN_CARDS => return Err(InvalidHand::TooFewCards(n)),
            n if n > Self::MAX_CARDS => return Err(InvalidHand::TooManyCards(n)),
            _ => {}
        }

        let mut seen = 0u64;
        for &card in &cards {
            let bit = 1u64 << card.code();
            if seen & bit != 0 {
                return Err(InvalidHand::DuplicateCard(card));
            }

            seen |= bit;
        }

        Ok(Self { cards })
    }

    /// Creates a hand from card codes.
    pub fn from_codes(codes: &[u8]) -> Result<Self, InvalidHand> {
        let cards = codes
            .iter()
            .map(|&code| Card::from_code(code).ok_or(InvalidHand::InvalidCode(code)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }

    /// The hand cards in the order they were given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates the best five cards in this hand.
    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = InvalidHand;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

/// Parses cards separated by spaces or commas, like `"AS KD, 7H 7C 2D"`.
impl FromStr for Hand {
    type Err = InvalidHand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Evaluates a hand given as card codes.
///
/// Returns the hand value and the codes of the cards that make the hand.
///
/// ```
/// # use jokbo_eval::evaluate_codes;
/// let (value, combination) = evaluate_codes(&[12, 11, 10, 9, 8]).unwrap();
/// assert_eq!(value, 90_000_000_000);
/// assert_eq!(combination, [12, 11, 10, 9, 8]);
/// ```
pub fn evaluate_codes(codes: &[u8]) -> Result<(u64, Vec<u8>), InvalidHand> {
    let (value, combination) = Hand::from_codes(codes)?.evaluate().into_parts();
    Ok((value.raw(), combination.into_iter().map(u8::from).collect()))
}
