// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and their numeric value encoding.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use jokbo_cards::Rank;

/// The width of the numeric band reserved to each category.
pub const CATEGORY_BAND: u64 = 10_000_000_000;

/// Decimal weight of each packed rank.
const RANK_WEIGHT: u64 = 100;

/// A poker hand category.
///
/// Categories are ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandCategory {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; 10] = {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
    };

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        Self::ALL.into_iter()
    }

    /// The lowest value of this category band.
    pub const fn base(self) -> u64 {
        self as u64 * CATEGORY_BAND
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        f.write_str(name)
    }
}

/// The strength of a poker hand.
///
/// A value is a single integer where each category owns the band
/// `[category * 10^10, (category + 1) * 10^10)` and the lower digits encode
/// the ranks that break ties inside the category, so that two values can be
/// compared directly:
///
/// ```text
///   category  payload
///   |         |
///   2 00 00 13 12 06   two pair, aces and kings with a seven kicker
/// ```
///
/// The royal flush has the single value `9 * 10^10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct HandValue(u64);

/// Error for an integer that is not a hand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a hand value")]
pub struct InvalidValue(pub u64);

impl HandValue {
    /// Creates a value from a category and a tie break payload.
    pub(crate) fn new(category: HandCategory, payload: u64) -> Self {
        debug_assert!(payload < CATEGORY_BAND, "payload {payload} overflows band");
        Self(category.base() + payload)
    }

    /// Creates a value from its integer form, `None` if it doesn't fall in a
    /// category band.
    pub fn from_raw(raw: u64) -> Option<Self> {
        if raw <= HandCategory::RoyalFlush.base() {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// The integer form of this value.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The category of this value.
    pub fn category(&self) -> HandCategory {
        HandCategory::ALL[(self.0 / CATEGORY_BAND) as usize]
    }

    /// The tie break digits of this value.
    pub fn payload(&self) -> u64 {
        self.0 % CATEGORY_BAND
    }
}

impl TryFrom<u64> for HandValue {
    type Error = InvalidValue;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        HandValue::from_raw(raw).ok_or(InvalidValue(raw))
    }
}

impl From<HandValue> for u64 {
    fn from(value: HandValue) -> Self {
        value.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Packs ranks in `width` slots of two decimal digits, the first rank is the
/// most significant, each rank is stored as its index plus one so that missing
/// slots (zero) sort below any rank.
pub(crate) fn pack_ranks<I>(ranks: I, width: u32) -> u64
where
    I: IntoIterator<Item = Rank>,
{
    let mut packed = 0;
    let mut slots = 0;
    for rank in ranks.into_iter().take(width as usize) {
        packed = packed * RANK_WEIGHT + rank.index() as u64 + 1;
        slots += 1;
    }

    packed * RANK_WEIGHT.pow(width - slots)
}
